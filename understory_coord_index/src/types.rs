// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key ordering and node handles.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Coordinate types usable as keys of a [`CoordIndex`][crate::CoordIndex].
///
/// The index relies on a total order: two keys comparing [`Ordering::Equal`]
/// share one node. Floats compare by numeric value, so `-0.0` and `0.0` are the
/// same key. NaN is not a coordinate; debug builds assert against it.
pub trait Coord: Copy + Debug {
    /// Compare two coordinates.
    fn cmp_coord(a: Self, b: Self) -> Ordering;
}

impl Coord for f32 {
    #[inline]
    fn cmp_coord(a: Self, b: Self) -> Ordering {
        debug_assert!(
            !a.is_nan() && !b.is_nan(),
            "NaN is not a valid coordinate (f32)"
        );
        a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
    }
}

impl Coord for f64 {
    #[inline]
    fn cmp_coord(a: Self, b: Self) -> Ordering {
        debug_assert!(
            !a.is_nan() && !b.is_nan(),
            "NaN is not a valid coordinate (f64)"
        );
        a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
    }
}

impl Coord for i32 {
    #[inline]
    fn cmp_coord(a: Self, b: Self) -> Ordering {
        a.cmp(&b)
    }
}

impl Coord for i64 {
    #[inline]
    fn cmp_coord(a: Self, b: Self) -> Ordering {
        a.cmp(&b)
    }
}

/// Handle to a node of one [`CoordIndex`][crate::CoordIndex].
///
/// Handles stay valid for the lifetime of the index that issued them, until
/// [`CoordIndex::clear`][crate::CoordIndex::clear]. Passing a handle to a
/// different index is a logic error: it is not detected and yields unrelated
/// nodes or a panic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Node handles are intentionally 32-bit; an index never holds more than u32::MAX keys."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}
