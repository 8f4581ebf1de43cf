// Copyright 2026 the Longlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Longlist Load More: near-bottom detection with an at-most-one-in-flight
//! guard, for infinite scroll.
//!
//! [`LoadMoreTrigger`] watches scroll metrics and decides when a "load more"
//! action should start. It fires when the scrolled-through percentage of the
//! container crosses a configured threshold, and it guarantees that at most
//! one action is outstanding per trigger instance no matter how many
//! qualifying scroll events arrive in the meantime.
//!
//! The trigger does not run the action itself and never blocks; it is the
//! explicit-state rendition of an async throttle. The host owns the action:
//!
//! 1. On every scroll event, call [`LoadMoreTrigger::on_scroll`] with the
//!    current [`ScrollMetrics`].
//! 2. When it returns `true`, start the load-more action (fetch, append to
//!    the collection, grow the height model).
//! 3. When the action resolves, success or failure alike, call
//!    [`LoadMoreTrigger::complete`] to re-arm the trigger. The trigger does
//!    not interpret the outcome; reporting a failure is the host's job.
//!
//! [`LoadMoreTrigger::disable`] stops future firings but does not cancel an
//! action already in flight; it takes effect on the next scroll event.
//!
//! ## Usage
//!
//! ```rust
//! use longlist_load_more::{LoadMoreTrigger, ScrollMetrics};
//!
//! let mut trigger = LoadMoreTrigger::default(); // fires at 90%
//!
//! // 600px viewport, 1000px content, scrolled to 350px: (350 + 600) / 1000
//! // is 95%, past the threshold.
//! let metrics = ScrollMetrics {
//!     scroll_top: 350.0,
//!     scroll_height: 1000.0,
//!     client_height: 600.0,
//! };
//! assert!(trigger.on_scroll(metrics));
//!
//! // Still loading: further qualifying events are swallowed.
//! assert!(!trigger.on_scroll(metrics));
//!
//! // The fetch resolved; the next qualifying event fires again.
//! trigger.complete();
//! assert!(trigger.on_scroll(metrics));
//! ```
//!
//! This crate is `no_std`; it holds no allocations at all.

#![no_std]

use core::fmt;

/// Threshold used by [`LoadMoreTrigger::default`], in percent.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 90.0;

/// Live scroll metrics of a container, in pixel units.
///
/// All three values are expected to be finite and non-negative, supplied on
/// every scroll event and once at initial mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the content.
    pub scroll_top: f64,
    /// Total height of the scrollable content.
    pub scroll_height: f64,
    /// Height of the visible viewport.
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the content the viewport has scrolled through:
    /// `(scroll_top + client_height) * 100 / scroll_height`.
    ///
    /// A non-positive `scroll_height` reads as fully scrolled: an
    /// unscrollable container is always at the bottom, so content shorter
    /// than the viewport keeps a threshold trigger satisfied.
    #[must_use]
    pub fn percent_scrolled(&self) -> f64 {
        if self.scroll_height <= 0.0 {
            return 100.0;
        }
        (self.scroll_top + self.client_height) * 100.0 / self.scroll_height
    }
}

/// Error raised when a [`LoadMoreTrigger`] is configured with an invalid
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadMoreError {
    /// The threshold was outside `[0, 100]` or not finite.
    ThresholdOutOfRange {
        /// The rejected value.
        percent: f64,
    },
}

impl fmt::Display for LoadMoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdOutOfRange { percent } => {
                write!(f, "threshold percent {percent} must be within [0, 100]")
            }
        }
    }
}

impl core::error::Error for LoadMoreError {}

/// Decides when a load-more action should start, with an
/// at-most-one-in-flight guard.
///
/// The `in_flight` flag is the one piece of mutable state here. It has a
/// single logical writer per scroll container; all mutation happens
/// synchronously inside the host's event handling, so no locking is needed.
/// Concurrent hosts must serialize access per trigger instance.
#[derive(Debug, Clone)]
pub struct LoadMoreTrigger {
    threshold_percent: f64,
    enabled: bool,
    in_flight: bool,
}

impl Default for LoadMoreTrigger {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            enabled: true,
            in_flight: false,
        }
    }
}

impl LoadMoreTrigger {
    /// Creates a trigger firing at `threshold_percent` of scrollable
    /// distance.
    ///
    /// The threshold must be finite and within `[0, 100]`; anything else is
    /// rejected rather than clamped.
    pub fn new(threshold_percent: f64) -> Result<Self, LoadMoreError> {
        if !threshold_percent.is_finite() || !(0.0..=100.0).contains(&threshold_percent) {
            return Err(LoadMoreError::ThresholdOutOfRange {
                percent: threshold_percent,
            });
        }
        Ok(Self {
            threshold_percent,
            ..Self::default()
        })
    }

    /// The configured threshold, in percent.
    #[must_use]
    pub fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }

    /// Returns `true` if the trigger reacts to scroll events.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` while a load-more action is outstanding.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Stops future firings. Takes effect on the next scroll event; an
    /// action already in flight is not cancelled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Re-allows firing on the next qualifying scroll event.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Feeds one scroll event to the trigger.
    ///
    /// Returns `true` exactly when the host should start the load-more
    /// action: the trigger is enabled, nothing is in flight, and the metrics
    /// are at or past the threshold. A `true` return marks the action as in
    /// flight; the host must call [`complete`](Self::complete) once it
    /// resolves.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if !self.enabled || self.in_flight {
            return false;
        }
        if metrics.percent_scrolled() < self.threshold_percent {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Marks the outstanding load-more action as resolved.
    ///
    /// Must be called whether the action succeeded or failed; the trigger
    /// only observes completion. Calling it with nothing in flight is a
    /// no-op.
    pub fn complete(&mut self) {
        self.in_flight = false;
    }
}
