// Copyright 2026 the Longlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prefix index over the sparse height overrides, plus the two resolvers that
//! translate between index space and pixel space.
//!
//! [`PrefixIndex`] stores, for each overridden item, the cumulative pixel
//! height of the strip through that item. Because every other item has the
//! common height, these k entries are enough to answer both directions of the
//! mapping in O(log k) without ever materializing per-item heights:
//!
//! - [`PrefixIndex::height_before`]: index → pixels (sum of heights of all
//!   items strictly before the index).
//! - [`PrefixIndex::index_at_offset`]: pixels → index (the item occupying a
//!   pixel position).
//!
//! The index is a derived cache. It is rebuilt all-or-nothing from a
//! [`HeightModel`] snapshot and stamped with the model's revision; it is never
//! mutated in place.

use smallvec::SmallVec;

use crate::{HeightModel, Scalar};

/// Inline capacity for the entry list. Override sets are assumed sparse, so
/// most indexes avoid a heap allocation entirely.
const INLINE_ENTRIES: usize = 8;

/// Cumulative height through one overridden item.
///
/// `cumulative` is the total pixel height of items `[0..=index]`. Entries are
/// stored ascending by `index`, which makes `cumulative` strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixEntry<S: Scalar> {
    /// Index of the overridden item.
    pub index: usize,
    /// Total pixel height of items `[0..=index]`.
    pub cumulative: S,
}

/// Derived prefix-sum cache over a [`HeightModel`]'s overrides.
#[derive(Debug, Clone)]
pub struct PrefixIndex<S: Scalar> {
    common_height: S,
    entries: SmallVec<[PrefixEntry<S>; INLINE_ENTRIES]>,
    revision: u64,
}

impl<S: Scalar> PrefixIndex<S> {
    /// Builds the index from a model snapshot.
    ///
    /// Walks the overrides in ascending index order: the first entry covers
    /// the uniform run before it plus its own height, and each subsequent
    /// entry adds the uniform gap since the previous override plus its own
    /// height. O(k); never scans the full strip.
    #[must_use]
    pub fn build(model: &HeightModel<S>) -> Self {
        let common = model.common_height();
        let mut entries = SmallVec::new();
        let mut prev: Option<PrefixEntry<S>> = None;
        for exception in model.overrides_sorted() {
            let cumulative = match prev {
                None => S::from_usize(exception.index) * common + exception.height,
                Some(p) => {
                    let gap = S::from_usize(exception.index - p.index - 1) * common;
                    p.cumulative + gap + exception.height
                }
            };
            let entry = PrefixEntry {
                index: exception.index,
                cumulative,
            };
            entries.push(entry);
            prev = Some(entry);
        }
        Self {
            common_height: model.common_height(),
            entries,
            revision: model.revision(),
        }
    }

    /// Returns `true` if this index was built from the model's current
    /// revision.
    ///
    /// Only meaningful against the model instance this index was built from;
    /// two distinct models can share a revision number. Callers that allow
    /// swapping the model out entirely must invalidate on their own (see
    /// [`VirtualWindow`](crate::VirtualWindow)).
    #[must_use]
    pub fn is_current(&self, model: &HeightModel<S>) -> bool {
        self.revision == model.revision()
    }

    /// The common height this index was built with.
    #[must_use]
    pub fn common_height(&self) -> S {
        self.common_height
    }

    /// The prefix entries, ascending by index.
    #[must_use]
    pub fn entries(&self) -> &[PrefixEntry<S>] {
        &self.entries
    }

    /// Cumulative pixel height of items `[0, target_index)`.
    ///
    /// Finds the last entry strictly before `target_index` and fills the
    /// remaining gap at the common height. Never fails and never clamps:
    /// a `target_index` past the end of the strip extrapolates at the common
    /// height, and it is the window selector's job to stay in bounds.
    #[must_use]
    pub fn height_before(&self, target_index: usize) -> S {
        let pos = self.entries.partition_point(|e| e.index < target_index);
        if pos == 0 {
            S::from_usize(target_index) * self.common_height
        } else {
            let lower = self.entries[pos - 1];
            lower.cumulative + S::from_usize(target_index - lower.index - 1) * self.common_height
        }
    }

    /// Index of the item occupying pixel position `offset`.
    ///
    /// The returned index `i` satisfies
    /// `height_before(i) <= offset < height_before(i + 1)`; an offset landing
    /// exactly on an item boundary resolves to the item that starts there.
    /// Negative offsets are clamped to zero. Offsets past the content
    /// extrapolate at the common height (again, clamping to the strip is the
    /// window selector's job).
    #[must_use]
    pub fn index_at_offset(&self, offset: S) -> usize {
        let offset = offset.clamp_non_negative();
        let pos = self.entries.partition_point(|e| e.cumulative <= offset);
        let candidate = if pos == 0 {
            // No override lies wholly before `offset`; the run so far is
            // uniform.
            uniform_steps(offset, self.common_height)
        } else {
            let lower = self.entries[pos - 1];
            lower.index + 1 + uniform_steps(offset - lower.cumulative, self.common_height)
        };
        match self.entries.get(pos) {
            // `offset` may land inside the next overridden item, which is
            // taller than the uniform estimate assumes.
            Some(upper) => candidate.min(upper.index),
            None => candidate,
        }
    }
}

/// How many whole common-height items fit in `extent`.
fn uniform_steps<S: Scalar>(extent: S, common_height: S) -> usize {
    (extent / common_height).floor_to_isize().max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::PrefixIndex;
    use crate::{HeightException, HeightModel};

    fn spec_model() -> HeightModel<f64> {
        HeightModel::with_overrides(
            200.0,
            100,
            [
                HeightException {
                    index: 2,
                    height: 1000.0,
                },
                HeightException {
                    index: 10,
                    height: 30.0,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn build_accumulates_gaps_and_overrides() {
        let index = PrefixIndex::build(&spec_model());
        let entries = index.entries();
        assert_eq!(entries.len(), 2);
        // 2 * 200 + 1000.
        assert_eq!(entries[0].index, 2);
        assert_eq!(entries[0].cumulative, 1400.0);
        // 1400 + 7 * 200 + 30.
        assert_eq!(entries[1].index, 10);
        assert_eq!(entries[1].cumulative, 2830.0);
    }

    #[test]
    fn build_on_empty_overrides_is_empty() {
        let model = HeightModel::new(33.0_f64, 50).unwrap();
        let index = PrefixIndex::build(&model);
        assert!(index.entries().is_empty());
        assert_eq!(index.height_before(7), 7.0 * 33.0);
        assert_eq!(index.index_at_offset(100.0), 3);
    }

    #[test]
    fn height_before_covers_all_branches() {
        let index = PrefixIndex::build(&spec_model());
        // Before any override: uniform.
        assert_eq!(index.height_before(0), 0.0);
        assert_eq!(index.height_before(2), 400.0);
        // Just past the first override.
        assert_eq!(index.height_before(3), 1400.0);
        // In the gap between overrides.
        assert_eq!(index.height_before(5), 1400.0 + 2.0 * 200.0);
        // Past the last override.
        assert_eq!(index.height_before(11), 2830.0);
        assert_eq!(index.height_before(12), 3030.0);
    }

    #[test]
    fn index_at_offset_resolves_boundaries_to_the_starting_item() {
        let index = PrefixIndex::build(&spec_model());
        assert_eq!(index.index_at_offset(0.0), 0);
        assert_eq!(index.index_at_offset(199.0), 0);
        assert_eq!(index.index_at_offset(200.0), 1);
        // 1400 is exactly where item 3 starts.
        assert_eq!(index.index_at_offset(1400.0), 3);
    }

    #[test]
    fn index_at_offset_lands_inside_a_tall_override() {
        let index = PrefixIndex::build(&spec_model());
        // Item 2 spans [400, 1400).
        assert_eq!(index.index_at_offset(400.0), 2);
        assert_eq!(index.index_at_offset(900.0), 2);
        assert_eq!(index.index_at_offset(1399.9), 2);
    }

    #[test]
    fn index_at_offset_lands_inside_a_short_override() {
        let index = PrefixIndex::build(&spec_model());
        // Item 10 spans [2800, 2830).
        assert_eq!(index.index_at_offset(2800.0), 10);
        assert_eq!(index.index_at_offset(2829.0), 10);
        assert_eq!(index.index_at_offset(2830.0), 11);
    }

    #[test]
    fn index_at_offset_clamps_negative_input() {
        let index = PrefixIndex::build(&spec_model());
        assert_eq!(index.index_at_offset(-50.0), 0);
    }

    #[test]
    fn is_current_tracks_model_revision() {
        let mut model = spec_model();
        let index = PrefixIndex::build(&model);
        assert!(index.is_current(&model));

        model.set_override(20, 75.0).unwrap();
        assert!(!index.is_current(&model));

        let rebuilt = PrefixIndex::build(&model);
        assert!(rebuilt.is_current(&model));
        assert_eq!(rebuilt.entries().len(), 3);
    }
}
