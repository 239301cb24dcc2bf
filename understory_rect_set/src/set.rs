// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `RectSet` dual-projection index.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::{Enumerate, FusedIterator};
use core::slice;

use kurbo::{Point, Rect};
use understory_coord_index::CoordIndex;

use crate::members::{Intersect, Members};
use crate::types::{Axis, RectId};

type AxisIndex = CoordIndex<f64, Members>;

/// A growing set of axis-aligned rectangles answering "which rectangle
/// contains this point?".
///
/// Each rectangle is projected onto both axes. The row index is keyed by every
/// y edge seen so far and the column index by every x edge; each key lists the
/// rectangles whose closed span on that axis covers it. A point query looks up
/// the nearest key at or below the point on each axis, intersects the two
/// lists, and tests the few remaining candidates exactly.
///
/// Containment is half-open, as in [`Rect::contains`]: the near (top-left)
/// edges are inside, the far (bottom-right) edges are not. A rectangle with
/// zero width or height is indexed like any other but contains no point.
///
/// Rectangles cannot be removed individually; [`RectSet::clear`] drops all of
/// them.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use understory_rect_set::RectSet;
///
/// let mut set = RectSet::new();
/// let a = set.add(Rect::new(0.0, 0.0, 10.0, 10.0));
/// let b = set.add(Rect::new(5.0, 5.0, 15.0, 15.0));
///
/// assert_eq!(set.contains(Point::new(2.0, 2.0)), Some(a));
/// // Both contain (7, 7); the earliest added wins.
/// assert_eq!(set.contains(Point::new(7.0, 7.0)), Some(a));
/// assert_eq!(set.contains(Point::new(12.0, 12.0)), Some(b));
/// assert_eq!(set.contains(Point::new(20.0, 20.0)), None);
/// ```
#[derive(Clone, Default)]
pub struct RectSet {
    rects: Vec<Rect>,
    rows: AxisIndex,
    cols: AxisIndex,
    epoch: u32,
}

impl Debug for RectSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RectSet")
            .field("rects", &self.rects.len())
            .field("row_keys", &self.rows.len())
            .field("col_keys", &self.cols.len())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl RectSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rectangles added since creation or the last clear.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether no rectangle has been added since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Reserve space for at least `n` more rectangles.
    pub fn reserve(&mut self, n: usize) {
        self.rects.reserve(n);
        // Each rectangle introduces at most two keys per axis.
        self.rows.reserve(n.saturating_mul(2));
        self.cols.reserve(n.saturating_mul(2));
    }

    /// Add a rectangle and return its identity.
    ///
    /// Inverted rectangles are normalized with [`Rect::abs`] first.
    pub fn add(&mut self, rect: Rect) -> RectId {
        debug_assert!(!rect.is_nan(), "NaN rectangle coordinates");
        let rect = rect.abs();

        let slot = slot_for(self.rects.len());
        self.rects.push(rect);

        let Self {
            rects, rows, cols, ..
        } = self;
        index_span(rows, rects, Axis::Row, slot);
        index_span(cols, rects, Axis::Col, slot);

        RectId::new(slot, self.epoch)
    }

    /// The first rectangle, in insertion order, that contains `pt`.
    ///
    /// Returns `None` if the set is empty or no rectangle contains the point.
    /// A point with a NaN coordinate is contained by nothing.
    pub fn contains(&self, pt: Point) -> Option<RectId> {
        self.candidates(pt)
            .find(|&slot| self.rects[slot as usize].contains(pt))
            .map(|slot| RectId::new(slot, self.epoch))
    }

    /// Visit every rectangle that contains `pt`, in insertion order.
    ///
    /// Calls `f(id, rect)` for each match (does not allocate result storage).
    pub fn visit_point<F: FnMut(RectId, Rect)>(&self, pt: Point, mut f: F) {
        for slot in self.candidates(pt) {
            let rect = self.rects[slot as usize];
            if rect.contains(pt) {
                f(RectId::new(slot, self.epoch), rect);
            }
        }
    }

    /// The (normalized) rectangle behind `id`, if it belongs to this set.
    pub fn get(&self, id: RectId) -> Option<Rect> {
        if id.epoch() != self.epoch {
            return None;
        }
        self.rects.get(id.slot() as usize).copied()
    }

    /// Rectangles in insertion order.
    ///
    /// The iterator borrows the set, so it cannot observe later additions;
    /// clone it to walk the same sequence again.
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            iter: self.rects.iter().enumerate(),
            epoch: self.epoch,
        }
    }

    /// Remove every rectangle and discard both axis indices.
    ///
    /// Ids issued before the clear stop resolving through [`RectSet::get`].
    pub fn clear(&mut self) {
        self.rects.clear();
        self.rows = AxisIndex::new();
        self.cols = AxisIndex::new();
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Slots listed under the nearest keys at or below `pt` on both axes.
    fn candidates(&self, pt: Point) -> Intersect<'_> {
        // No rectangle contains a NaN point.
        if pt.is_nan() {
            return Intersect::default();
        }
        match (self.rows.find_nearest(pt.y), self.cols.find_nearest(pt.x)) {
            (Some(row), Some(col)) => Intersect::new(self.rows.value(row), self.cols.value(col)),
            _ => Intersect::default(),
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Slots are intentionally 32-bit; a set never holds more than u32::MAX rects."
)]
fn slot_for(len: usize) -> u32 {
    debug_assert!(u32::try_from(len).is_ok(), "RectSet holds at most u32::MAX rects");
    len as u32
}

/// Record `slot` under every key of `index` covered by its span on `axis`,
/// creating the span's boundary keys first.
fn index_span(index: &mut AxisIndex, rects: &[Rect], axis: Axis, slot: u32) {
    let (lo, hi) = axis.span(&rects[slot as usize]);

    // Snapshot before inserting anything: a new key at `hi` must not inherit
    // from a freshly created key at `lo`.
    let at_lo = inherited(index, rects, axis, lo);
    let at_hi = inherited(index, rects, axis, hi);

    let (lo_node, _) = index.insert_or_get_with(lo, || at_lo);
    let (hi_node, _) = index.insert_or_get_with(hi, || at_hi);

    index.visit_range_mut(lo_node, hi_node, |_, members| {
        debug_assert!(
            members.last().is_none_or(|&last| last < slot),
            "member list out of order"
        );
        members.push(slot);
    });
}

/// Members a brand-new key at `key` must start with.
///
/// Every rectangle covering `key` also covers its nearest lower key, since its
/// own near edge is a key at or below `key`. The converse fails when the lower
/// key is some rectangle's far edge, so the copy is filtered.
fn inherited(index: &AxisIndex, rects: &[Rect], axis: Axis, key: f64) -> Members {
    let Some(near) = index.find_nearest(key) else {
        return Members::new();
    };
    if index.key(near) == key {
        // Existing key: nothing gets created, nothing to seed.
        return Members::new();
    }
    index
        .value(near)
        .iter()
        .copied()
        .filter(|&slot| axis.covers(&rects[slot as usize], key))
        .collect()
}

impl Extend<Rect> for RectSet {
    fn extend<I: IntoIterator<Item = Rect>>(&mut self, iter: I) {
        for rect in iter {
            let _ = self.add(rect);
        }
    }
}

impl FromIterator<Rect> for RectSet {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Iterator over `(id, rect)` pairs in insertion order. See [`RectSet::elements`].
#[derive(Clone, Debug)]
pub struct Elements<'a> {
    iter: Enumerate<slice::Iter<'a, Rect>>,
    epoch: u32,
}

impl Iterator for Elements<'_> {
    type Item = (RectId, Rect);

    fn next(&mut self) -> Option<Self::Item> {
        let (i, rect) = self.iter.next()?;
        Some((RectId::new(slot_for(i), self.epoch), *rect))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Elements<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (i, rect) = self.iter.next_back()?;
        Some((RectId::new(slot_for(i), self.epoch), *rect))
    }
}

impl ExactSizeIterator for Elements<'_> {}

impl FusedIterator for Elements<'_> {}

impl<'a> IntoIterator for &'a RectSet {
    type Item = (RectId, Rect);
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}
