// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Human-readable reassignment log

use crate::types::{Product, Reassignment, ReassignmentKind};
use owo_colors::OwoColorize;

/// Label used when a reassignment points at a product missing from its board
pub const DEFAULT_UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Rendering options
#[derive(Debug, Clone)]
pub struct ReportStyle {
    /// Shown in place of a product that no longer resolves
    pub unknown_product: String,
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            unknown_product: DEFAULT_UNKNOWN_PRODUCT.to_string(),
            color: false,
        }
    }
}

impl ReportStyle {
    fn product_name<'a>(&'a self, product: Option<&'a Product>) -> &'a str {
        product.map_or(self.unknown_product.as_str(), |p| p.name.as_str())
    }
}

/// What happened to the person, without naming them
#[must_use]
pub fn describe(reassignment: &Reassignment<'_>, style: &ReportStyle) -> String {
    let from = style.product_name(reassignment.from_product);
    let to = style.product_name(reassignment.to_product);

    match reassignment.kind {
        ReassignmentKind::Moved => format!("{from} -> {to}"),
        ReassignmentKind::Unassigned => format!("{from} assignment cancelled"),
        ReassignmentKind::Assigned => format!("Assigned to {to}"),
    }
}

/// One log line: person, role if any, and the change
#[must_use]
pub fn render_line(reassignment: &Reassignment<'_>, style: &ReportStyle) -> String {
    let person = reassignment.person;
    let name = if style.color {
        person.name.bold().to_string()
    } else {
        person.name.clone()
    };
    let change = describe(reassignment, style);
    let change = if style.color {
        match reassignment.kind {
            ReassignmentKind::Moved => change.cyan().to_string(),
            ReassignmentKind::Assigned => change.green().to_string(),
            ReassignmentKind::Unassigned => change.yellow().to_string(),
        }
    } else {
        change
    };

    match &person.space_role {
        Some(role) => format!("{name} ({}): {change}", role.name),
        None => format!("{name}: {change}"),
    }
}

/// The full log, one line per reassignment
#[must_use]
pub fn render(reassignments: &[Reassignment<'_>], style: &ReportStyle) -> String {
    if reassignments.is_empty() {
        return "No reassignments".to_string();
    }
    reassignments
        .iter()
        .map(|r| render_line(r, style))
        .collect::<Vec<_>>()
        .join("\n")
}
