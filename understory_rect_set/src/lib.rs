// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rect_set --heading-base-level=0

//! Understory Rect Set: incremental point-in-rectangle lookup.
//!
//! A [`RectSet`] collects axis-aligned [`kurbo::Rect`]s as they are produced (detected
//! regions, laid-out widgets, hot spots) and later answers "does this point land inside one
//! of them, and which?" without scanning every rectangle.
//!
//! - [`RectSet::add`] indexes a rectangle and returns its [`RectId`].
//! - [`RectSet::contains`] returns the earliest-added rectangle containing a point.
//! - [`RectSet::visit_point`] reports every rectangle containing a point.
//! - [`RectSet::elements`] walks the rectangles in insertion order.
//! - [`RectSet::clear`] drops everything; there is no per-rectangle removal.
//!
//! Internally each rectangle is projected onto the y axis (row index) and the x axis (column
//! index). Each projection is an [`understory_coord_index::CoordIndex`] whose keys are the
//! rectangle edges seen so far and whose payloads list the rectangles covering each key.
//! A point query takes the nearest key at or below the point on each axis and intersects the
//! two lists; only that (usually tiny) intersection is tested exactly.
//!
//! Identity is by handle, not by value: adding two equal rectangles yields two ids.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_rect_set::RectSet;
//!
//! let mut set = RectSet::new();
//! let face = set.add(Rect::new(40.0, 30.0, 120.0, 130.0));
//! let code = set.add(Rect::new(200.0, 200.0, 260.0, 240.0));
//!
//! assert_eq!(set.contains(Point::new(50.0, 60.0)), Some(face));
//! assert_eq!(set.contains(Point::new(210.0, 239.0)), Some(code));
//! assert_eq!(set.contains(Point::new(150.0, 150.0)), None);
//!
//! // Far edges are outside.
//! assert_eq!(set.contains(Point::new(120.0, 60.0)), None);
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` support for `kurbo`.
//! - `libm`: for `no_std` builds, lets `kurbo` use `libm` for float math.
//!
//! ### Float semantics
//!
//! Coordinates are compared exactly; there is no tolerance. Rectangles with NaN coordinates
//! are not supported (debug builds assert). A query point with a NaN coordinate is contained
//! by nothing.

#![no_std]

extern crate alloc;

mod members;
mod set;
mod types;

pub use set::{Elements, RectSet};
pub use types::RectId;
