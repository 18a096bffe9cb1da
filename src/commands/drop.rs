// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Drop command - resolves which candidate a dragged card was released on

use crate::geometry::resolve_drop_product;
use crate::snapshot::load_layout;
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Run the drop command
pub fn run(layout_path: &Path, json: bool) -> Result<()> {
    let layout = load_layout(layout_path)
        .with_context(|| format!("Failed to load layout from {}", layout_path.display()))?;
    info!("Resolving drop over {} candidates", layout.candidates.len());

    let candidates: Vec<_> = layout
        .candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| (candidate.rect, (index, candidate.label.as_str())))
        .collect();
    let target = resolve_drop_product(&candidates, &layout.dropped);

    if json {
        let value = match target {
            Some((index, label)) => json!({ "index": index, "label": label }),
            None => json!(null),
        };
        println!("{value}");
    } else {
        match target {
            Some((index, label)) => println!("Dropped on {label} (#{index})"),
            None => println!("No drop target"),
        }
    }

    Ok(())
}
