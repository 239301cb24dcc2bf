// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle handles and axis projections.

use kurbo::Rect;

/// Identity of a rectangle added to a [`RectSet`][crate::RectSet] (generational).
///
/// Two rectangles with equal coordinates added separately get distinct ids.
/// Ids issued before [`RectSet::clear`][crate::RectSet::clear] no longer
/// resolve afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectId(u32, u32);

impl RectId {
    pub(crate) const fn new(slot: u32, epoch: u32) -> Self {
        Self(slot, epoch)
    }

    pub(crate) const fn slot(self) -> u32 {
        self.0
    }

    pub(crate) const fn epoch(self) -> u32 {
        self.1
    }

    /// Position of the rectangle in insertion order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One of the two projections a rectangle is indexed under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Vertical span, keyed by y.
    Row,
    /// Horizontal span, keyed by x.
    Col,
}

impl Axis {
    /// Closed span `[min, max]` of a normalized rect on this axis.
    #[inline]
    pub(crate) fn span(self, rect: &Rect) -> (f64, f64) {
        match self {
            Self::Row => (rect.y0, rect.y1),
            Self::Col => (rect.x0, rect.x1),
        }
    }

    /// Whether the closed span of `rect` on this axis contains `key`.
    #[inline]
    pub(crate) fn covers(self, rect: &Rect, key: f64) -> bool {
        let (lo, hi) = self.span(rect);
        lo <= key && key <= hi
    }
}
