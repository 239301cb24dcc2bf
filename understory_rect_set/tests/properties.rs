// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests: `RectSet` answers agree with a linear scan.

use kurbo::{Point, Rect};
use proptest::collection::vec;
use proptest::prelude::*;
use understory_rect_set::{RectId, RectSet};

prop_compose! {
    fn rect()(x in -20_i32..20, y in -20_i32..20, w in 0_i32..15, h in 0_i32..15) -> Rect {
        Rect::from_origin_size((f64::from(x), f64::from(y)), (f64::from(w), f64::from(h)))
    }
}

prop_compose! {
    // Quarter steps land both on and between edges.
    fn point()(x in -25_i32..40, y in -25_i32..40, fx in 0_u8..4, fy in 0_u8..4) -> Point {
        Point::new(
            f64::from(x) + f64::from(fx) * 0.25,
            f64::from(y) + f64::from(fy) * 0.25,
        )
    }
}

proptest! {
    #[test]
    fn contains_agrees_with_scan(rects in vec(rect(), 0..24), pts in vec(point(), 1..32)) {
        let set: RectSet = rects.iter().copied().collect();
        for pt in pts {
            let expected = rects.iter().position(|r| r.contains(pt));
            prop_assert_eq!(set.contains(pt).map(RectId::index), expected);

            let mut visited = Vec::new();
            set.visit_point(pt, |id, _| visited.push(id.index()));
            let all: Vec<usize> = (0..rects.len()).filter(|&i| rects[i].contains(pt)).collect();
            prop_assert_eq!(visited, all);
        }
    }

    #[test]
    fn order_does_not_change_answers(rects in vec(rect(), 0..24), pts in vec(point(), 1..32)) {
        let forward: RectSet = rects.iter().copied().collect();
        let backward: RectSet = rects.iter().rev().copied().collect();
        for pt in pts {
            prop_assert_eq!(forward.contains(pt).is_some(), backward.contains(pt).is_some());
        }
    }

    #[test]
    fn clear_forgets_everything(rects in vec(rect(), 1..24), pts in vec(point(), 1..16)) {
        let mut set: RectSet = rects.iter().copied().collect();
        set.clear();
        prop_assert_eq!(set.elements().count(), 0);
        for pt in pts {
            prop_assert_eq!(set.contains(pt), None);
        }
    }

    #[test]
    fn elements_replay_insertions(rects in vec(rect(), 0..24)) {
        let set: RectSet = rects.iter().copied().collect();
        let walked: Vec<Rect> = set.elements().map(|(_, r)| r).collect();
        prop_assert_eq!(walked, rects);
    }
}
