// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Board snapshots and drop layouts on disk

use crate::geometry::Rect;
use crate::types::{Board, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Failure to read or trust a snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file could not be read or written
    #[error("Failed to access {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for the expected shape
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
    /// Two products share an id, so assignments cannot be resolved
    #[error("Duplicate product id {0}")]
    DuplicateProduct(ProductId),
}

impl Board {
    /// Check identity invariants the comparison relies on.
    ///
    /// An assignment whose `productId` differs from its holding product is
    /// kept: it resolves to no product and reports as unknown.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut seen: HashSet<ProductId> = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(SnapshotError::DuplicateProduct(product.id));
            }
            for stray in product.assignments.iter().filter(|a| a.product_id != product.id) {
                warn!(
                    assignment = stray.id,
                    person = %stray.person.name,
                    holder = product.id,
                    product_id = stray.product_id,
                    "assignment references a product other than its holder"
                );
            }
        }
        Ok(())
    }
}

/// A candidate drop container as measured by the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutCandidate {
    /// Name shown when this candidate wins
    pub label: String,
    /// Bounding box with the dragged card out of the layout
    pub rect: Rect,
}

/// Geometry captured at drop time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Drop containers, in board order
    #[serde(default)]
    pub candidates: Vec<LayoutCandidate>,
    /// Bounding box of the dragged card when released
    pub dropped: Rect,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a board snapshot
pub fn load_board(path: &Path) -> Result<Board, SnapshotError> {
    let board: Board = read_json(path)?;
    board.validate()?;
    debug!(
        path = %path.display(),
        products = board.products.len(),
        "loaded board snapshot"
    );
    Ok(board)
}

/// Write a board snapshot as pretty JSON
pub fn save_board(path: &Path, board: &Board) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(board).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a drop layout fixture
pub fn load_layout(path: &Path) -> Result<Layout, SnapshotError> {
    read_json(path)
}
