//! Absolute value of scalars and Euclidean norm of vectors.

use crate::types::Scalar;
use crate::value::Value;
use nalgebra::DVectorView;
use num_traits::Float;

/// Magnitude of a value.
///
/// A scalar gives `|a|`. A vector gives its L2 norm, `sqrt(sum(a_i^2))`.
/// The result is never negative.
///
/// # Example
///
/// ```
/// use numops::prelude::*;
///
/// assert_eq!(absolute(&Value::scalar(-1.0_f64)), 1.0);
/// assert_eq!(absolute(&Value::<f64>::from([-4.0, -3.0])), 5.0);
/// ```
pub fn absolute<T: Scalar>(a: &Value<T>) -> T {
    match a {
        Value::Scalar(x) => Float::abs(*x),
        Value::Vector(v) => v.norm(),
    }
}

/// Euclidean norm of a slice. Zero for an empty slice.
pub fn l2_norm<T: Scalar>(a: &[T]) -> T {
    DVectorView::from_slice(a, a.len()).norm()
}
