//! Scalar element trait.

use std::fmt::Debug;
use std::ops::Neg;

use num_traits::Num;

/// An element type that matrices can hold.
///
/// Any copyable numeric type with negation qualifies; in practice this is
/// `f64` or `f32`.
pub trait Scalar: Num + Neg<Output = Self> + Copy + Debug {}

impl<T> Scalar for T where T: Num + Neg<Output = T> + Copy + Debug {}
