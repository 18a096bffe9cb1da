// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Board comparison - explains two snapshots as a list of person moves
//!
//! Assignments are matched on `(person id, product id)`. Whatever is left on
//! each side is paired per person, first match wins.

use crate::types::{Assignment, Board, Product, ProductId, Reassignment, ReassignmentKind};
use std::collections::HashSet;
use tracing::debug;

/// Compute the reassignments that turn `before` into `after`.
///
/// Moves and removals come first, in `before` order, followed by pure
/// additions in `after` order. Unchanged assignments produce nothing.
///
/// A person holding several changed assignments is paired with the first
/// new assignment for that person in `after`, even one already paired, which
/// may not be the pairing a human would pick.
#[must_use]
pub fn compare<'a>(before: &'a Board, after: &'a Board) -> Vec<Reassignment<'a>> {
    let initial: Vec<&Assignment> = before.assignments().collect();
    let modified: Vec<&Assignment> = after.assignments().collect();

    let unique_to_before = unique_to(&initial, &modified);
    let unique_to_after = unique_to(&modified, &initial);
    debug!(
        removed = unique_to_before.len(),
        added = unique_to_after.len(),
        "comparing boards"
    );

    // Indexes into `unique_to_after` already used as the destination of a move
    let mut consumed: HashSet<usize> = HashSet::new();
    let mut reassignments = Vec::with_capacity(unique_to_before.len() + unique_to_after.len());

    for assignment in &unique_to_before {
        let counterpart = unique_to_after
            .iter()
            .enumerate()
            .find(|(_, other)| other.person.id == assignment.person.id);

        match counterpart {
            Some((index, other)) if other.product_id != assignment.product_id => {
                consumed.insert(index);
                reassignments.push(Reassignment {
                    person: &other.person,
                    from_product: resolve(assignment.product_id, before),
                    to_product: resolve(other.product_id, after),
                    kind: ReassignmentKind::Moved,
                });
            }
            _ => reassignments.push(Reassignment {
                person: &assignment.person,
                from_product: resolve(assignment.product_id, before),
                to_product: None,
                kind: ReassignmentKind::Unassigned,
            }),
        }
    }

    reassignments.extend(
        unique_to_after
            .iter()
            .enumerate()
            .filter(|(index, _)| !consumed.contains(index))
            .map(|(_, assignment)| Reassignment {
                person: &assignment.person,
                from_product: None,
                to_product: resolve(assignment.product_id, after),
                kind: ReassignmentKind::Assigned,
            }),
    );

    reassignments
}

/// Assignments of `left` with no same-person, same-product match in `right`
fn unique_to<'a>(left: &[&'a Assignment], right: &[&'a Assignment]) -> Vec<&'a Assignment> {
    left.iter()
        .copied()
        .filter(|assignment| !right.iter().any(|other| other.matches(assignment)))
        .collect()
}

fn resolve(product_id: ProductId, board: &Board) -> Option<&Product> {
    let product = board.product(product_id);
    if product.is_none() {
        debug!(product_id, "assignment references a product missing from its board");
    }
    product
}
