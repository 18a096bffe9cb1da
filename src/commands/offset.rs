// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Offset command - where a card was grabbed, relative to its corner

use crate::geometry::{drag_offset, Point, Rect};
use anyhow::{Context, Result};

/// Parse `top,left,right,bottom`
pub fn parse_rect(s: &str) -> Result<Rect, String> {
    match parse_numbers(s)?.as_slice() {
        &[top, left, right, bottom] => {
            if right < left || bottom < top {
                return Err(format!("Degenerate rectangle: {s}"));
            }
            Ok(Rect::new(top, left, right, bottom))
        }
        _ => Err(format!("Expected top,left,right,bottom but got: {s}")),
    }
}

/// Parse `x,y`
pub fn parse_point(s: &str) -> Result<Point, String> {
    match parse_numbers(s)?.as_slice() {
        &[x, y] => Ok(Point::new(x, y)),
        _ => Err(format!("Expected x,y but got: {s}")),
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                Ok(_) => Err(format!("Expected a finite number but got '{part}'")),
                Err(e) => Err(format!("Invalid number '{part}': {e}")),
            }
        })
        .collect()
}

/// Run the offset command
pub fn run(rect: &Rect, pointer: Point, json: bool) -> Result<()> {
    let offset = drag_offset(rect, pointer);

    if json {
        let out = serde_json::to_string(&offset).context("Failed to serialize offset")?;
        println!("{out}");
    } else {
        println!("x: {}, y: {}", offset.x, offset.y);
    }

    Ok(())
}
