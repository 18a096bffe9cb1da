// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - read or persist a single setting

use crate::config::{load, KEYS};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the config command
pub fn run(path: &Path, key: &str, value: Option<String>) -> Result<()> {
    let mut settings = load(path)?;

    if key == "list" {
        for k in KEYS {
            println!("{k} = {}", settings.get(k)?);
        }
        return Ok(());
    }

    match value {
        Some(v) => {
            settings.set(key, &v)?;
            settings
                .save(path)
                .with_context(|| format!("Failed to save configuration to {}", path.display()))?;
            tracing::info!("Set {} = {}", key, v);
            println!("{key} = {}", settings.get(key)?);
        }
        None => println!("{}", settings.get(key)?),
    }

    Ok(())
}
