// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-key membership lists and their intersection.

use core::cmp::Ordering;
use core::iter::FusedIterator;

use smallvec::SmallVec;

/// Rectangle slots whose span covers one coordinate key.
///
/// Slots are kept in ascending order, which is also insertion order: a new
/// rectangle always carries the largest slot so far, and inherited lists are
/// filtered copies of sorted lists.
pub(crate) type Members = SmallVec<[u32; 4]>;

/// Slots present in both sorted lists, ascending.
#[derive(Clone, Debug, Default)]
pub(crate) struct Intersect<'a> {
    a: &'a [u32],
    b: &'a [u32],
}

impl<'a> Intersect<'a> {
    pub(crate) fn new(a: &'a [u32], b: &'a [u32]) -> Self {
        debug_assert!(a.is_sorted(), "member list out of order");
        debug_assert!(b.is_sorted(), "member list out of order");
        Self { a, b }
    }
}

impl Iterator for Intersect<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        loop {
            let (&x, a_rest) = self.a.split_first()?;
            let (&y, b_rest) = self.b.split_first()?;
            match x.cmp(&y) {
                Ordering::Less => self.a = a_rest,
                Ordering::Greater => self.b = b_rest,
                Ordering::Equal => {
                    self.a = a_rest;
                    self.b = b_rest;
                    return Some(x);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.a.len().min(self.b.len())))
    }
}

impl FusedIterator for Intersect<'_> {}
