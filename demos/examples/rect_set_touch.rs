// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch hit-testing against detected regions.
//!
//! A stand-in detector reports face and barcode regions frame by frame; touches are
//! resolved against the regions of the current frame with `RectSet::contains`.
//!
//! Run:
//! - `cargo run -p understory_demos --example rect_set_touch`

use std::collections::HashMap;

use kurbo::{Point, Rect};
use understory_rect_set::{RectId, RectSet};

#[derive(Clone, Copy, Debug)]
enum Region {
    Face,
    Barcode,
}

/// Regions a detector might report for one frame.
fn detect(frame: u32) -> Vec<(Region, Rect)> {
    let dx = f64::from(frame) * 8.0;
    vec![
        (Region::Face, Rect::new(40.0 + dx, 30.0, 120.0 + dx, 130.0)),
        (Region::Face, Rect::new(100.0 + dx, 60.0, 180.0 + dx, 150.0)),
        (Region::Barcode, Rect::new(220.0, 200.0, 300.0, 240.0)),
    ]
}

fn main() {
    let touches = [
        Point::new(60.0, 50.0),
        Point::new(110.0, 100.0),
        Point::new(250.0, 220.0),
        Point::new(300.0, 220.0),
        Point::new(10.0, 10.0),
    ];

    let mut regions = RectSet::new();
    let mut kinds: HashMap<RectId, Region> = HashMap::new();

    for frame in 0..3 {
        // Each frame replaces the previous detections.
        regions.clear();
        kinds.clear();
        for (kind, rect) in detect(frame) {
            let _ = kinds.insert(regions.add(rect), kind);
        }
        println!("frame {frame}: {regions:?}");

        for pt in touches {
            match regions.contains(pt) {
                Some(id) => println!(
                    "  touch {pt:?} -> {:?} {:?}",
                    kinds[&id],
                    regions.get(id).unwrap()
                ),
                None => println!("  touch {pt:?} -> nothing"),
            }
        }

        let mut overlapping = Vec::new();
        regions.visit_point(Point::new(110.0, 100.0), |id, _| overlapping.push(kinds[&id]));
        println!("  regions under (110, 100): {overlapping:?}");
    }
}
