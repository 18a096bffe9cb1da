// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Time on product, in inclusive calendar days

use crate::products::is_active_product;
use crate::types::{Assignment, Board, Person, Product};
use chrono::NaiveDate;
use serde::Serialize;

/// Days the assignment has run as of `viewing_date`.
///
/// Counts both the start and the end day. Without a start date the duration
/// is 0. An open-ended assignment runs until the viewing date, so one that
/// starts in the future comes out zero or negative.
#[must_use]
pub fn assignment_duration(assignment: &Assignment, viewing_date: NaiveDate) -> i64 {
    let Some(start) = assignment.start_date else {
        return 0;
    };
    let end = assignment.end_date.unwrap_or(viewing_date);
    (end - start).num_days() + 1
}

/// One row of the time-on-product table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeOnProduct<'a> {
    /// Assigned person
    pub person: &'a Person,
    /// Product the person sits on
    pub product: &'a Product,
    /// Inclusive days on the product
    pub days: i64,
}

/// Duration rows for every assignment on an active product
#[must_use]
pub fn time_on_product(board: &Board, viewing_date: NaiveDate) -> Vec<TimeOnProduct<'_>> {
    let mut rows: Vec<TimeOnProduct<'_>> = board
        .products
        .iter()
        .filter(|product| is_active_product(product, viewing_date))
        .flat_map(|product| {
            product.assignments.iter().map(move |assignment| TimeOnProduct {
                person: &assignment.person,
                product,
                days: assignment_duration(assignment, viewing_date),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        a.product
            .name
            .to_lowercase()
            .cmp(&b.product.name.to_lowercase())
            .then_with(|| a.person.name.to_lowercase().cmp(&b.person.name.to_lowercase()))
    });
    rows
}
