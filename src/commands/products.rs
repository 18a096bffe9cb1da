// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Products command - lists a board's products as the board would show them

use crate::products::{
    is_active_product, is_archived_on, is_unassigned_product, sort_products, strip_archived_people,
    ProductFilter, SortBy,
};
use crate::snapshot::{load_board, save_board};
use crate::types::{Board, Product};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments for listing products
pub struct ProductsArgs {
    /// Product order
    pub sort_by: SortBy,
    /// Location and tag filters
    pub filter: ProductFilter,
    /// Viewing date
    pub date: NaiveDate,
    /// Include archived, ended and unassigned products
    pub all: bool,
    /// Also write the listed products as a board snapshot
    pub output: Option<PathBuf>,
}

/// Products visible on `date`, filtered and sorted, with archived people removed
#[must_use]
pub fn visible_products(products: &[Product], args: &ProductsArgs) -> Vec<Product> {
    let shown: Vec<&Product> = products
        .iter()
        .filter(|p| args.all || is_active_product(p, args.date))
        .filter(|p| args.filter.matches(p))
        .collect();
    debug!(total = products.len(), shown = shown.len(), "filtered products");

    sort_products(&shown, args.sort_by)
        .into_iter()
        .map(|p| strip_archived_people(p, args.date))
        .collect()
}

/// Run the products command
pub fn run(board_path: &Path, args: &ProductsArgs, json: bool) -> Result<()> {
    info!("Listing products of {} on {}", board_path.display(), args.date);
    let board = load_board(board_path).context("Failed to load board")?;

    let products = visible_products(&board.products, args);

    if let Some(output) = &args.output {
        let listed = Board {
            products: products.clone(),
            ..board.clone()
        };
        save_board(output, &listed)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Wrote {} products to {}", listed.products.len(), output.display());
    }

    if json {
        let out = serde_json::to_string_pretty(&products).context("Failed to serialize products")?;
        println!("{out}");
        return Ok(());
    }

    if products.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    for product in &products {
        let location = product
            .space_location
            .as_ref()
            .map(|l| format!(" [{}]", l.name))
            .unwrap_or_default();
        let status = if is_unassigned_product(product) {
            " (unassigned)"
        } else if is_archived_on(product, args.date) {
            " (archived)"
        } else {
            ""
        };
        println!(
            "{}{}{} ({} assigned)",
            product.name,
            location,
            status,
            product.assignments.len()
        );
        for assignment in &product.assignments {
            let marker = if assignment.placeholder { " (placeholder)" } else { "" };
            println!("  {}{}", assignment.person.name, marker);
        }
    }

    Ok(())
}
