// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_coord_index --heading-base-level=0

//! Understory Coord Index: a threaded ordered map over 1D coordinates.
//!
//! Understory Coord Index is a small building block for projection-based spatial indexes.
//!
//! - Insert-or-get a node by exact key and receive a stable [`NodeId`].
//! - Look up the nearest predecessor-or-equal key with [`CoordIndex::find_nearest`].
//! - Walk every node between two known nodes with [`CoordIndex::range_inclusive`]
//!   without descending from the root again: nodes are threaded in key order.
//!
//! The tree is an AVL tree, so lookups stay logarithmic even when keys arrive in
//! sorted order. Keys are never removed individually; [`CoordIndex::clear`] drops
//! everything at once.
//!
//! It is generic over the key type through the [`Coord`] trait (implemented for `f32`,
//! `f64`, `i32` and `i64`) and over an arbitrary payload.
//!
//! # Example
//!
//! ```rust
//! use understory_coord_index::CoordIndex;
//!
//! let mut idx: CoordIndex<f64, Vec<&str>> = CoordIndex::new();
//! let (a, _) = idx.insert_or_get(0.0);
//! let (b, _) = idx.insert_or_get(10.0);
//! let _ = idx.insert_or_get(5.0);
//!
//! // Tag every key in [0, 10].
//! idx.visit_range_mut(a, b, |_, tags| tags.push("span"));
//!
//! // 7.5 is not a key; its nearest predecessor is 5.0.
//! let near = idx.find_nearest(7.5).unwrap();
//! assert_eq!(idx.key(near), 5.0);
//! assert_eq!(idx.value(near), &vec!["span"]);
//!
//! let keys: Vec<f64> = idx.range_inclusive(b, a).map(|id| idx.key(id)).collect();
//! assert_eq!(keys, [0.0, 5.0, 10.0]);
//! ```
//!
//! ### Float semantics
//!
//! Keys compare by value with no tolerance: `-0.0` and `0.0` are one key, and NaN is
//! not a valid key (debug builds assert).

#![no_std]

extern crate alloc;

mod index;
mod types;

pub use index::{CoordIndex, Iter, Range};
pub use types::{Coord, NodeId};
