// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for `understory_coord_index` and `understory_rect_set`.
//!
//! See the `examples/` directory of this crate.
