// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use peoplemover::geometry::{resolve_drop_target, Rect};

#[derive(Debug, Arbitrary)]
struct Input {
    candidates: Vec<(i16, i16, u8, u8)>,
    dropped: (i16, i16, u8, u8),
}

fn rect((top, left, width, height): (i16, i16, u8, u8)) -> Rect {
    let (top, left) = (f64::from(top), f64::from(left));
    Rect::new(top, left, left + f64::from(width), top + f64::from(height))
}

fuzz_target!(|input: Input| {
    let candidates: Vec<Rect> = input.candidates.iter().copied().map(rect).collect();
    let dropped = rect(input.dropped);

    if let Some(winner) = resolve_drop_target(&candidates, &dropped) {
        let best = candidates[winner].intersection_area(&dropped);
        assert!(best > 0.0);
        assert!(candidates.iter().all(|c| c.intersection_area(&dropped) <= best));
    }
});
