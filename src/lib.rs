// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! PeopleMover library - roster boards, drop targets and reassignments
//!
//! This crate provides the pure core behind the PeopleMover board: resolving
//! which product a dragged assignment card landed on, and explaining the
//! difference between two board snapshots as a list of person moves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod comparison;
pub mod config;
pub mod duration;
pub mod geometry;
pub mod products;
pub mod report;
pub mod snapshot;

/// Core data types mirroring the REST resources of a space
pub mod types {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    /// Identifier of a person within a space
    pub type PersonId = i64;

    /// Identifier of a product (assignment container)
    pub type ProductId = i64;

    // =========================================================================
    // Tags
    // =========================================================================

    /// A named tag: location, product tag or person tag
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Tag {
        /// Tag identifier
        pub id: i64,
        /// Display name, used for filtering
        pub name: String,
    }

    /// A role held by a person within a space
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Role {
        /// Role identifier
        pub id: i64,
        /// Display name
        pub name: String,
    }

    // =========================================================================
    // People
    // =========================================================================

    /// A person who can be assigned to products
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Person {
        /// Identity used when matching assignments across snapshots
        pub id: PersonId,
        /// Display name
        pub name: String,
        /// Role in the space, if any
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub space_role: Option<Role>,
        /// Person tags
        #[serde(default)]
        pub tags: Vec<Tag>,
        /// Flagged as recently joined
        #[serde(default)]
        pub new_person: bool,
        /// Date from which the person is archived
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub archive_date: Option<NaiveDate>,
    }

    impl Person {
        /// A person is archived once their archive date lies before the viewing date
        #[must_use]
        pub fn is_archived_on(&self, date: NaiveDate) -> bool {
            self.archive_date.is_some_and(|archived| archived < date)
        }
    }

    // =========================================================================
    // Assignments
    // =========================================================================

    /// Links a person to a product
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Assignment {
        /// Server-side identifier (not used for snapshot matching)
        pub id: i64,
        /// The assigned person
        pub person: Person,
        /// The product holding this assignment
        pub product_id: ProductId,
        /// Placeholder (tentative) assignment
        #[serde(default)]
        pub placeholder: bool,
        /// First day on the product
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub start_date: Option<NaiveDate>,
        /// Last day on the product
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub end_date: Option<NaiveDate>,
    }

    impl Assignment {
        /// Two assignments are the same when person and product both match.
        ///
        /// The placeholder flag and dates are deliberately ignored.
        #[must_use]
        pub fn matches(&self, other: &Assignment) -> bool {
            self.person.id == other.person.id && self.product_id == other.product_id
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// A workstream people are assigned to
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Product {
        /// Product identifier
        pub id: ProductId,
        /// Display name
        pub name: String,
        /// Owning space
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub space_uuid: Option<String>,
        /// First active day
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub start_date: Option<NaiveDate>,
        /// Last active day
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub end_date: Option<NaiveDate>,
        /// Location tag
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub space_location: Option<Tag>,
        /// Product tags
        #[serde(default)]
        pub tags: Vec<Tag>,
        /// Archived products are hidden from the board
        #[serde(default)]
        pub archived: bool,
        /// Free-form notes
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub notes: Option<String>,
        /// External link
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub url: Option<String>,
        /// Assignments in display order
        #[serde(default)]
        pub assignments: Vec<Assignment>,
    }

    // =========================================================================
    // Boards
    // =========================================================================

    /// A point-in-time snapshot of products and their assignments
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Board {
        /// Board identifier, when the snapshot came from a stored board
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub id: Option<i64>,
        /// Display name
        #[serde(default)]
        pub name: String,
        /// Products in display order
        #[serde(default)]
        pub products: Vec<Product>,
    }

    impl Board {
        /// Flatten every product's assignments, product-then-assignment order
        pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
            self.products.iter().flat_map(|p| p.assignments.iter())
        }

        /// Find a product by id
        #[must_use]
        pub fn product(&self, id: ProductId) -> Option<&Product> {
            self.products.iter().find(|p| p.id == id)
        }
    }

    // =========================================================================
    // Reassignments
    // =========================================================================

    /// Which half of a move a reassignment carries
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ReassignmentKind {
        /// Left one product and joined another
        Moved,
        /// Newly assigned, no matching removal
        Assigned,
        /// Removed, no matching new assignment
        Unassigned,
    }

    /// One person's assignment change between two snapshots.
    ///
    /// Borrows from the compared boards. `from_product` is absent for an
    /// [`ReassignmentKind::Assigned`] entry and `to_product` for an
    /// [`ReassignmentKind::Unassigned`] one. A product id that no longer
    /// resolves in its snapshot also yields `None`, so `kind` is what tells
    /// the two cases apart.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Reassignment<'a> {
        /// The person who moved
        pub person: &'a Person,
        /// Product in the "before" snapshot
        #[serde(skip_serializing_if = "Option::is_none")]
        pub from_product: Option<&'a Product>,
        /// Product in the "after" snapshot
        #[serde(skip_serializing_if = "Option::is_none")]
        pub to_product: Option<&'a Product>,
        /// Move, addition or removal
        pub kind: ReassignmentKind,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::comparison::compare;
    pub use crate::geometry::{drag_offset, resolve_drop_target, DragOffset, Point, Rect};
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
