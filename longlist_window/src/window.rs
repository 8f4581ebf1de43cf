// Copyright 2026 the Longlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window selection: pick the contiguous run of items to realize for a given
//! scroll offset, annotated with absolute positions.
//!
//! [`select_window`] is the pure selection step. [`VirtualWindow`] wraps it in
//! a small controller that owns the [`HeightModel`] and keeps the derived
//! [`PrefixIndex`] fresh, so hosts can mutate or replace the model freely and
//! query without thinking about the cache.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{HeightModel, PrefixIndex, Scalar};

/// Default number of items realized per window.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// A contiguous index range selected for rendering.
///
/// Always clamped so that `first_index + count` does not exceed the item
/// count it was selected against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Index of the first realized item.
    pub first_index: usize,
    /// Number of realized items.
    pub count: usize,
}

impl Window {
    /// The selected indices as a half-open range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.first_index..self.first_index + self.count
    }

    /// Returns `true` if the window selects no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// One realized item: its index, a borrow of its data, and its absolute
/// position in pixel space.
///
/// Consecutive items of one selection tile exactly:
/// `next.top_offset == prev.top_offset + prev.height`.
#[derive(Debug, Clone, Copy)]
pub struct RenderedItem<'a, S: Scalar, T> {
    /// Index of the item in the full collection.
    pub index: usize,
    /// The item's data.
    pub data: &'a T,
    /// Absolute top offset of the item in pixels.
    pub top_offset: S,
    /// Height of the item in pixels.
    pub height: S,
}

/// Output of one window selection: the selected range plus the realized items.
#[derive(Debug, Clone)]
pub struct RenderedWindow<'a, S: Scalar, T> {
    /// The selected index range.
    pub window: Window,
    /// Realized items in index order, tiling without gaps or overlap.
    pub items: Vec<RenderedItem<'a, S, T>>,
}

/// Selects the window of items to realize for `scroll_offset`.
///
/// The first index is resolved through the prefix index, then biased one item
/// upward (`saturating_sub(1)`) so a sliver of context stays visible above the
/// viewport; a resolved index of 0 stays 0. The result is clamped into the
/// collection's bounds, and at most `window_size` items are emitted with
/// running top offsets seeded by the cumulative height before the first one.
///
/// An empty collection yields an empty window at index 0. When the model and
/// the item slice disagree on length, the shorter of the two bounds the
/// selection.
#[must_use]
pub fn select_window<'a, S: Scalar, T>(
    scroll_offset: S,
    window_size: usize,
    model: &HeightModel<S>,
    prefix: &PrefixIndex<S>,
    items: &'a [T],
) -> RenderedWindow<'a, S, T> {
    let item_count = model.len().min(items.len());
    if item_count == 0 {
        return RenderedWindow {
            window: Window {
                first_index: 0,
                count: 0,
            },
            items: Vec::new(),
        };
    }

    let resolved = prefix.index_at_offset(scroll_offset);
    let first_index = resolved.saturating_sub(1).min(item_count - 1);
    let count = window_size.min(item_count - first_index);

    let mut rendered = Vec::with_capacity(count);
    let mut running_top = prefix.height_before(first_index);
    for index in first_index..first_index + count {
        let height = model.height_of(index);
        rendered.push(RenderedItem {
            index,
            data: &items[index],
            top_offset: running_top,
            height,
        });
        running_top = running_top + height;
    }

    RenderedWindow {
        window: Window { first_index, count },
        items: rendered,
    }
}

/// Controller owning a [`HeightModel`] plus its cached [`PrefixIndex`].
///
/// The cache is refreshed lazily: borrowing the model mutably marks the cache
/// dirty, and every query rebuilds it when the mark is set or the revision
/// stamp no longer matches. Callers may mutate or wholesale replace the model
/// through [`VirtualWindow::model_mut`] between queries without any explicit
/// invalidation step; revision comparison alone would not catch a replaced
/// model whose counter happens to line up.
#[derive(Debug, Clone)]
pub struct VirtualWindow<S: Scalar> {
    model: HeightModel<S>,
    prefix: PrefixIndex<S>,
    window_size: usize,
    dirty: bool,
}

impl<S: Scalar> VirtualWindow<S> {
    /// Creates a controller with the default window size
    /// ([`DEFAULT_WINDOW_SIZE`]).
    #[must_use]
    pub fn new(model: HeightModel<S>) -> Self {
        Self::with_window_size(model, DEFAULT_WINDOW_SIZE)
    }

    /// Creates a controller with an explicit window size.
    ///
    /// A window size of 0 is degenerate but permitted; every selection will
    /// be empty.
    #[must_use]
    pub fn with_window_size(model: HeightModel<S>, window_size: usize) -> Self {
        let prefix = PrefixIndex::build(&model);
        Self {
            model,
            prefix,
            window_size,
            dirty: false,
        }
    }

    /// Number of items realized per selection.
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Sets the number of items realized per selection.
    pub fn set_window_size(&mut self, window_size: usize) {
        self.window_size = window_size;
    }

    /// Returns a shared reference to the height model.
    #[must_use]
    pub fn model(&self) -> &HeightModel<S> {
        &self.model
    }

    /// Returns a mutable reference to the height model.
    ///
    /// Marks the prefix cache dirty; it catches up on the next query. This
    /// also covers replacing the model outright, where revision counters
    /// give no signal.
    pub fn model_mut(&mut self) -> &mut HeightModel<S> {
        self.dirty = true;
        &mut self.model
    }

    /// Total pixel height of the whole collection, for spacer sizing.
    #[must_use]
    pub fn total_extent(&self) -> S {
        self.model.total_extent()
    }

    /// Cumulative pixel height of items `[0, index)`.
    pub fn height_before(&mut self, index: usize) -> S {
        self.refresh();
        self.prefix.height_before(index)
    }

    /// Index of the item occupying pixel position `offset`.
    pub fn index_at_offset(&mut self, offset: S) -> usize {
        self.refresh();
        self.prefix.index_at_offset(offset)
    }

    /// Selects the window of `items` to realize for `scroll_offset`.
    pub fn select<'a, T>(
        &mut self,
        scroll_offset: S,
        items: &'a [T],
    ) -> RenderedWindow<'a, S, T> {
        self.refresh();
        select_window(
            scroll_offset,
            self.window_size,
            &self.model,
            &self.prefix,
            items,
        )
    }

    fn refresh(&mut self) {
        if self.dirty || !self.prefix.is_current(&self.model) {
            self.prefix = PrefixIndex::build(&self.model);
            self.dirty = false;
        }
    }
}
