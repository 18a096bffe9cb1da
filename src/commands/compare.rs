// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Compare command - prints the reassignments between two board snapshots

use crate::comparison::compare;
use crate::report::{render, ReportStyle};
use crate::snapshot::load_board;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Run the compare command
pub fn run(before: &Path, after: &Path, json: bool, style: &ReportStyle) -> Result<()> {
    info!("Comparing {} with {}", before.display(), after.display());

    let initial = load_board(before).context("Failed to load the initial board")?;
    let modified = load_board(after).context("Failed to load the modified board")?;

    let reassignments = compare(&initial, &modified);
    info!("Found {} reassignments", reassignments.len());

    if json {
        let out = serde_json::to_string_pretty(&reassignments)
            .context("Failed to serialize reassignments")?;
        println!("{out}");
    } else {
        println!("{}", render(&reassignments, style));
    }

    Ok(())
}
