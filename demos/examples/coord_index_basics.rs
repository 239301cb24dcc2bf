// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Coord Index: insert-or-get, nearest lookup, and range walks.
//!
//! Run:
//! - `cargo run -p understory_demos --example coord_index_basics`

use understory_coord_index::CoordIndex;

fn main() {
    // Sorted insertion would degrade an unbalanced tree to a list.
    let mut idx: CoordIndex<i64, u32> = CoordIndex::new();
    for k in (0..1000).step_by(10) {
        let _ = idx.insert_or_get(k);
    }
    println!("{idx:?}");

    let near = idx.find_nearest(437).unwrap();
    println!("nearest key at or below 437: {}", idx.key(near));

    let a = idx.find(200).unwrap();
    let b = idx.find(250).unwrap();
    idx.visit_range_mut(a, b, |_, hits| *hits += 1);
    let touched: Vec<_> = idx.range_inclusive(a, b).map(|id| idx.key(id)).collect();
    println!("range [200, 250]: {touched:?}");
}
