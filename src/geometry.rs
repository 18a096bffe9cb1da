// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Drop-target resolution for dragged assignment cards
//!
//! Candidate rectangles must be measured while the dragged card is out of
//! the layout, otherwise its own box shifts its siblings.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Axis-aligned bounding box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top edge
    pub top: f64,
    /// Left edge
    pub left: f64,
    /// Right edge, never less than `left`
    pub right: f64,
    /// Bottom edge, never less than `top`
    pub bottom: f64,
}

impl Rect {
    /// Create a rectangle from its four edges
    #[must_use]
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        debug_assert!(right >= left, "rect right edge before left edge");
        debug_assert!(bottom >= top, "rect bottom edge above top edge");
        Self { top, left, right, bottom }
    }

    /// Horizontal extent
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Inclusive overlap test; rectangles that only touch at an edge overlap
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right >= other.left
            && self.left <= other.right
            && self.bottom >= other.top
            && self.top <= other.bottom
    }

    /// Area shared with `other`, zero when disjoint
    #[must_use]
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let width = (self.right.min(other.right) - self.left.max(other.left)).max(0.0);
        let height = (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0);
        width * height
    }
}

/// Pointer position in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Client x
    pub x: f64,
    /// Client y
    pub y: f64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the pointer grabbed the card, relative to the card's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragOffset {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
}

/// Offset of the pointer inside the dragged card at drag start
#[must_use]
pub fn drag_offset(rect: &Rect, pointer: Point) -> DragOffset {
    DragOffset {
        x: pointer.x - rect.left,
        y: pointer.y - rect.top,
    }
}

/// A drag in progress.
///
/// The offset is captured once in [`DragGesture::start`] and reused for every
/// move so the card does not jump under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    offset: DragOffset,
}

impl DragGesture {
    /// Begin dragging a card whose box is `rect`, grabbed at `pointer`
    #[must_use]
    pub fn start(rect: &Rect, pointer: Point) -> Self {
        Self {
            offset: drag_offset(rect, pointer),
        }
    }

    /// The offset fixed at drag start
    #[must_use]
    pub fn offset(&self) -> DragOffset {
        self.offset
    }

    /// Top-left corner the card should be drawn at for a pointer position
    #[must_use]
    pub fn top_left_at(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.offset.x, pointer.y - self.offset.y)
    }
}

/// Index of the candidate sharing the most area with `dropped`.
///
/// Ties keep the lowest index. Returns `None` when no candidate overlaps
/// with a positive area, including when every overlap is edge-only.
#[must_use]
pub fn resolve_drop_target(candidates: &[Rect], dropped: &Rect) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_area = 0.0;

    for (index, candidate) in candidates.iter().enumerate() {
        if !candidate.overlaps(dropped) {
            continue;
        }
        let area = candidate.intersection_area(dropped);
        if area > best_area {
            best_area = area;
            best = Some(index);
        }
    }

    debug!(?best, best_area, candidates = candidates.len(), "resolved drop target");
    best
}

/// The item whose rectangle the card was dropped on.
///
/// Pairs each measured rectangle with the container it belongs to, usually a
/// [`crate::types::Product`].
#[must_use]
pub fn resolve_drop_product<'a, T>(candidates: &'a [(Rect, T)], dropped: &Rect) -> Option<&'a T> {
    let rects: Vec<Rect> = candidates.iter().map(|(rect, _)| *rect).collect();
    resolve_drop_target(&rects, dropped).map(|index| &candidates[index].1)
}
