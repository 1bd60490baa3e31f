//! # Traits
//!
//! The simplex method is defined over the ordered fields, but this crate works with finite
//! representations of the reals. All comparisons that decide what the algorithm does next are made
//! against a tolerance rather than exactly, see the methods of the `Real` trait.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, NumCast};

/// The number type all algorithms in this crate are defined over.
///
/// Automatically implemented for all types satisfying the trait's bounds; in practice `f64` and
/// `f32`.
pub trait Real: Float + Debug + Display + Sum + Send + Sync + 'static {
    /// Convert a floating point literal into this type.
    ///
    /// Values that are not representable become `NaN` instead of being silently clamped.
    fn cast(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Whether the value is equal to zero, up to the tolerance.
    fn is_zero_within(self, epsilon: Self) -> bool {
        self.abs() <= epsilon
    }

    /// Whether the value is larger than zero by more than the tolerance.
    fn is_positive_beyond(self, epsilon: Self) -> bool {
        self > epsilon
    }

    /// Whether the value is smaller than zero by more than the tolerance.
    fn is_negative_beyond(self, epsilon: Self) -> bool {
        self < -epsilon
    }

    /// Whether two values differ by at most the tolerance.
    fn is_close_to(self, other: Self, epsilon: Self) -> bool {
        (self - other).abs() <= epsilon
    }
}

impl<T> Real for T
where
    T: Float + Debug + Display + Sum + Send + Sync + 'static,
{
}
