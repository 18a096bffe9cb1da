// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Time-on-product command

use crate::duration::time_on_product;
use crate::snapshot::load_board;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Run the time-on-product command
pub fn run(board_path: &Path, date: NaiveDate, json: bool) -> Result<()> {
    let board = load_board(board_path).context("Failed to load board")?;
    let rows = time_on_product(&board, date);

    if json {
        let out = serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?;
        println!("{out}");
        return Ok(());
    }

    if rows.is_empty() {
        println!("No assignments on active products.");
        return Ok(());
    }

    for row in &rows {
        let unit = if row.days == 1 { "day" } else { "days" };
        println!("{}\t{}\t{} {unit}", row.product.name, row.person.name, row.days);
    }

    Ok(())
}
