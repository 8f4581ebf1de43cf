// Copyright 2026 the Longlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used by the height model and resolvers.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for item heights, pixel offsets, and scroll positions.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal and geared toward floating-point pixel coordinates.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is negative, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Clamps negative values to zero.
    fn clamp_non_negative(self) -> Self {
        if self.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }

    /// Returns `true` if the value is a usable height or offset: finite and
    /// strictly positive.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }

    /// Floors the value and converts it to `isize`.
    ///
    /// Implementations may clamp or truncate as needed; callers are expected
    /// to clamp the result to a valid index range afterwards.
    fn floor_to_isize(self) -> isize;
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        {
            // `as isize` truncates toward zero, which is the floor for the
            // non-negative values the resolvers feed in.
            self as isize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        {
            self as isize
        }
    }
}
