//! Scalar and element-wise addition.

use crate::error::{NumericError, Result};
use crate::types::Scalar;
use crate::value::Value;

/// Add two values of the same shape.
///
/// Two scalars give their sum. Two vectors of equal length give the
/// element-wise sum, with the same length as the inputs.
///
/// # Errors
///
/// - [`NumericError::KindMismatch`] if a scalar is combined with a vector.
/// - [`NumericError::DimensionMismatch`] if the vectors differ in length.
///
/// # Example
///
/// ```
/// use numops::prelude::*;
///
/// let a: Value<f64> = Value::from([1.0, 2.0, 3.0]);
/// let b: Value<f64> = Value::from([4.0, 5.0, 6.0]);
/// let c = sum_values(&a, &b).unwrap();
/// assert_eq!(c.as_vector().unwrap().as_slice(), &[5.0, 7.0, 9.0]);
/// ```
pub fn sum_values<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>> {
    match (a, b) {
        (Value::Scalar(x), Value::Scalar(y)) => Ok(Value::Scalar(*x + *y)),
        (Value::Vector(u), Value::Vector(v)) => {
            if u.len() != v.len() {
                tracing::debug!(left = u.len(), right = v.len(), "vector length mismatch");
                return Err(NumericError::dimension_mismatch(u.len(), v.len()));
            }
            Ok(Value::Vector(u + v))
        }
        _ => {
            tracing::debug!(left = %a.kind(), right = %b.kind(), "value kind mismatch");
            Err(NumericError::kind_mismatch(a.kind(), b.kind()))
        }
    }
}

/// Element-wise sum of two slices of equal length.
pub fn add_slices<T: Scalar>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    if a.len() != b.len() {
        tracing::debug!(left = a.len(), right = b.len(), "slice length mismatch");
        return Err(NumericError::dimension_mismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| x + y).collect())
}
