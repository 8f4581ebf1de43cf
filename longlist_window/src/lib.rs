// Copyright 2026 the Longlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Longlist Window: the windowing and height-indexing core for list
//! virtualization.
//!
//! Instead of rendering every element of a large ordered collection, a host
//! renders only the contiguous slice currently visible and sizes a spacer so
//! the scrollbar behaves as if the whole collection were present. This crate
//! is the pure, synchronous engine behind that: it maps a scroll offset in
//! pixels to an index range and per-item positions, for lists where most
//! items share one common height and a sparse set of items carry individual
//! overrides.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for heights,
//!   offsets, and scroll positions.
//! - [`HeightModel`]: the validated description of the strip: one common
//!   height, a sparse override set, and an item count.
//! - [`PrefixIndex`]: a derived cache of cumulative heights at each override,
//!   answering both directions of the index ↔ pixel mapping in O(log k)
//!   where k is the number of overrides. The full strip is never walked.
//! - [`select_window`]: picks the slice of items to realize for a scroll
//!   offset, each annotated with its absolute top offset and height.
//! - [`VirtualWindow`]: a controller that owns a model plus its cache and
//!   keeps the cache fresh across model mutation or replacement.
//!
//! This crate deliberately does **not** know about scroll containers, DOM
//! nodes, widgets, or any UI framework. Hosts are responsible for:
//!
//! - Reading live scroll metrics and calling [`VirtualWindow::select`] on
//!   every scroll or collection change.
//! - Writing the returned positions into their presentation layer.
//! - Sizing a spacer element from [`VirtualWindow::total_extent`].
//!
//! For the companion that fires a "load more" action near the bottom of the
//! container, see the `longlist_load_more` crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use longlist_window::{HeightException, HeightModel, VirtualWindow};
//!
//! let rows: Vec<String> = (0..100).map(|i| format!("row {i}")).collect();
//!
//! // 100 rows at 200px, except row 2 which is 1000px tall.
//! let model = HeightModel::with_overrides(
//!     200.0_f64,
//!     rows.len(),
//!     [HeightException { index: 2, height: 1000.0 }],
//! )
//! .unwrap();
//! let mut list = VirtualWindow::new(model);
//!
//! // Spacer height for the scrollbar.
//! assert_eq!(list.total_extent(), 99.0 * 200.0 + 1000.0);
//!
//! // On each scroll event, select the slice to paint.
//! let rendered = list.select(450.0, &rows);
//! assert!(!rendered.window.is_empty());
//! for item in &rendered.items {
//!     // Host positions each element absolutely at `item.top_offset`.
//!     let _ = (item.index, item.data, item.top_offset, item.height);
//! }
//! ```
//!
//! All heights and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite; heights must be
//! positive. Invalid model configuration is rejected at construction, never
//! silently clamped. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod heights;
mod prefix;
mod scalar;
mod window;

pub use heights::{HeightException, HeightModel, HeightModelError};
pub use prefix::{PrefixEntry, PrefixIndex};
pub use scalar::Scalar;
pub use window::{
    DEFAULT_WINDOW_SIZE, RenderedItem, RenderedWindow, VirtualWindow, Window, select_window,
};
