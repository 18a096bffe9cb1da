// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use peoplemover::comparison::compare;
use peoplemover::types::Board;

// Any board that parses must compare cleanly against itself and the empty board
fuzz_target!(|data: &[u8]| {
    if let Ok(board) = serde_json::from_slice::<Board>(data) {
        if board.validate().is_err() {
            return;
        }
        // Product ids are unique, so lookup finds each product itself
        assert!(board
            .products
            .iter()
            .all(|p| board.product(p.id).is_some_and(|found| std::ptr::eq(found, p))));

        assert!(compare(&board, &board).is_empty());

        let empty = Board::default();
        let removed = compare(&board, &empty);
        assert_eq!(removed.len(), board.assignments().count());
        let added = compare(&empty, &board);
        assert_eq!(added.len(), board.assignments().count());
    }
});
