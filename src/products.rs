// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Product sorting, filtering and activity checks for a viewing date

use crate::types::Product;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Name of the holding product for people without a workstream
pub const UNASSIGNED_PRODUCT_NAME: &str = "unassigned";

/// Sort key for products without a location, so they land last
const MISSING_LOCATION: &str = "ZZZZZZZZ";

/// How to order products on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Case-insensitive product name
    #[default]
    Name,
    /// Location name, then product name
    Location,
    /// Keep snapshot order
    None,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "location" => Ok(Self::Location),
            "none" => Ok(Self::None),
            _ => Err(format!("Unknown sort order: {s}. Use name, location or none")),
        }
    }
}

/// Return a sorted copy; the input order is left untouched
#[must_use]
pub fn sort_products<'a>(products: &[&'a Product], sort_by: SortBy) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    match sort_by {
        SortBy::Name => sorted.sort_by(|a, b| by_name(a, b)),
        SortBy::Location => sorted.sort_by(|a, b| by_location(a, b)),
        SortBy::None => {}
    }
    sorted
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn by_location(a: &Product, b: &Product) -> Ordering {
    location_name(a)
        .to_lowercase()
        .cmp(&location_name(b).to_lowercase())
        .then_with(|| by_name(a, b))
}

fn location_name(product: &Product) -> &str {
    product
        .space_location
        .as_ref()
        .map_or(MISSING_LOCATION, |location| location.name.as_str())
}

/// Location and product-tag filters selected on the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Location names; empty matches every product
    #[serde(default)]
    pub locations: Vec<String>,
    /// Product tag names; empty matches every product
    #[serde(default)]
    pub product_tags: Vec<String>,
}

impl ProductFilter {
    /// Whether the product passes both the location and the tag filter
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let location_ok = self.locations.is_empty()
            || product
                .space_location
                .as_ref()
                .is_some_and(|location| self.locations.contains(&location.name));

        let tags_ok = self.product_tags.is_empty()
            || product
                .tags
                .iter()
                .any(|tag| self.product_tags.contains(&tag.name));

        location_ok && tags_ok
    }
}

/// The holding product for unassigned people
#[must_use]
pub fn is_unassigned_product(product: &Product) -> bool {
    product.name == UNASSIGNED_PRODUCT_NAME
}

/// No end date, or an end date on or after `date`
#[must_use]
pub fn ends_on_or_after(product: &Product, date: NaiveDate) -> bool {
    product.end_date.map_or(true, |end| end >= date)
}

/// A real, live product on the viewing date
#[must_use]
pub fn is_active_product(product: &Product, date: NaiveDate) -> bool {
    !product.name.eq_ignore_ascii_case(UNASSIGNED_PRODUCT_NAME)
        && !product.archived
        && ends_on_or_after(product, date)
}

/// Archived explicitly, or already ended on the viewing date
#[must_use]
pub fn is_archived_on(product: &Product, date: NaiveDate) -> bool {
    product.archived || !ends_on_or_after(product, date)
}

/// Copy of the product without assignments of people archived on `date`
#[must_use]
pub fn strip_archived_people(product: &Product, date: NaiveDate) -> Product {
    Product {
        assignments: product
            .assignments
            .iter()
            .filter(|assignment| !assignment.person.is_archived_on(date))
            .cloned()
            .collect(),
        ..product.clone()
    }
}
