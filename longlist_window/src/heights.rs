// Copyright 2026 the Longlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height model: one common item height plus sparse per-index overrides.
//!
//! [`HeightModel`] is the validated input to the indexing side of the crate.
//! It describes a strip of `len` items where every item is `common_height`
//! pixels tall unless an override says otherwise. Overrides are expected to be
//! sparse relative to `len`; all derived queries are O(k) in the number of
//! overrides and never walk the full strip.
//!
//! The model carries a monotonically increasing revision counter that bumps on
//! every effective mutation. Derived caches (see
//! [`PrefixIndex`](crate::PrefixIndex)) record the revision they were built
//! against and use it to decide when a rebuild is due.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::Scalar;

/// A sparse height override: item `index` is `height` pixels tall instead of
/// the model's common height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightException<S: Scalar> {
    /// Index of the item whose height is overridden.
    pub index: usize,
    /// Overridden height in pixels. Must be positive and finite.
    pub height: S,
}

/// Error raised when a [`HeightModel`] is constructed or mutated with
/// semantically invalid input.
///
/// The model never silently clamps invalid configuration; only index/offset
/// *query results* are clamped, and that happens in the window selector, not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightModelError {
    /// The common height was zero, negative, or not finite.
    NonPositiveCommonHeight,
    /// An override height was zero, negative, or not finite.
    NonPositiveOverride {
        /// Index the invalid override was aimed at.
        index: usize,
    },
    /// An override referred to an index at or past the end of the strip.
    ///
    /// Also raised when shrinking the strip below an existing override.
    OverrideOutOfBounds {
        /// The offending override index.
        index: usize,
        /// The strip length the index was checked against.
        len: usize,
    },
}

impl fmt::Display for HeightModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCommonHeight => {
                write!(f, "common height must be positive and finite")
            }
            Self::NonPositiveOverride { index } => {
                write!(f, "override height at index {index} must be positive and finite")
            }
            Self::OverrideOutOfBounds { index, len } => {
                write!(f, "override index {index} is out of bounds for strip of length {len}")
            }
        }
    }
}

impl core::error::Error for HeightModelError {}

/// A strip of `len` items with one common height and sparse overrides.
///
/// All mutators validate their input and bump an internal revision counter
/// only when the model actually changes.
#[derive(Debug, Clone)]
pub struct HeightModel<S: Scalar> {
    common_height: S,
    len: usize,
    overrides: HashMap<usize, S>,
    revision: u64,
}

impl<S: Scalar> HeightModel<S> {
    /// Creates a model with no overrides.
    pub fn new(common_height: S, len: usize) -> Result<Self, HeightModelError> {
        if !common_height.is_positive_finite() {
            return Err(HeightModelError::NonPositiveCommonHeight);
        }
        Ok(Self {
            common_height,
            len,
            overrides: HashMap::new(),
            revision: 0,
        })
    }

    /// Creates a model with the given overrides.
    ///
    /// Every override must name an in-bounds index and a positive, finite
    /// height. If the same index appears more than once, the last entry wins.
    pub fn with_overrides(
        common_height: S,
        len: usize,
        overrides: impl IntoIterator<Item = HeightException<S>>,
    ) -> Result<Self, HeightModelError> {
        let mut model = Self::new(common_height, len)?;
        for exception in overrides {
            model.insert_override(exception.index, exception.height)?;
        }
        Ok(model)
    }

    /// Number of items in the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The height applied to items without an override.
    #[must_use]
    pub fn common_height(&self) -> S {
        self.common_height
    }

    /// Height of the item at `index`: its override if present, otherwise the
    /// common height.
    #[must_use]
    pub fn height_of(&self, index: usize) -> S {
        self.overrides
            .get(&index)
            .copied()
            .unwrap_or(self.common_height)
    }

    /// Number of overridden items.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is a monotonically increasing counter local to this model.
    /// It bumps exactly when an effective mutation happens, so derived caches
    /// can compare revisions instead of deep-comparing the override set.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All overrides, sorted ascending by index.
    ///
    /// This is the access order the prefix-index build requires; the backing
    /// map itself is unordered.
    #[must_use]
    pub fn overrides_sorted(&self) -> Vec<HeightException<S>> {
        let mut out: Vec<_> = self
            .overrides
            .iter()
            .map(|(&index, &height)| HeightException { index, height })
            .collect();
        out.sort_unstable_by_key(|e| e.index);
        out
    }

    /// Total pixel height of the whole strip.
    ///
    /// `(len - override_count) * common_height` plus the sum of override
    /// heights; O(k) in the number of overrides. Used to size the scroll
    /// spacer, never to locate items.
    #[must_use]
    pub fn total_extent(&self) -> S {
        let uniform = S::from_usize(self.len - self.overrides.len()) * self.common_height;
        self.overrides
            .values()
            .fold(uniform, |acc, &height| acc + height)
    }

    /// Replaces the common height.
    pub fn set_common_height(&mut self, common_height: S) -> Result<(), HeightModelError> {
        if !common_height.is_positive_finite() {
            return Err(HeightModelError::NonPositiveCommonHeight);
        }
        if common_height != self.common_height {
            self.common_height = common_height;
            self.bump_revision();
        }
        Ok(())
    }

    /// Resizes the strip.
    ///
    /// Growing is always valid. Shrinking below an existing override index is
    /// rejected; callers must clear the override first.
    pub fn set_len(&mut self, len: usize) -> Result<(), HeightModelError> {
        if len < self.len {
            if let Some(&index) = self.overrides.keys().find(|&&index| index >= len) {
                return Err(HeightModelError::OverrideOutOfBounds { index, len });
            }
        }
        if len != self.len {
            self.len = len;
            self.bump_revision();
        }
        Ok(())
    }

    /// Sets or replaces the override for `index`.
    pub fn set_override(&mut self, index: usize, height: S) -> Result<(), HeightModelError> {
        self.insert_override(index, height)
    }

    /// Removes the override for `index`, returning `true` if one existed.
    pub fn clear_override(&mut self, index: usize) -> bool {
        let removed = self.overrides.remove(&index).is_some();
        if removed {
            self.bump_revision();
        }
        removed
    }

    fn insert_override(&mut self, index: usize, height: S) -> Result<(), HeightModelError> {
        if index >= self.len {
            return Err(HeightModelError::OverrideOutOfBounds {
                index,
                len: self.len,
            });
        }
        if !height.is_positive_finite() {
            return Err(HeightModelError::NonPositiveOverride { index });
        }
        if self.overrides.get(&index) != Some(&height) {
            self.overrides.insert(index, height);
            self.bump_revision();
        }
        Ok(())
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
