//! Scalar-or-vector values.
//!
//! [`Value`] is the single input type accepted by the operations in
//! [`crate::ops`]. Each operation matches on the variant and dispatches to
//! the scalar or vector kernel.

use crate::config::Quantifier;
use crate::error::{NumericError, Result};
use crate::ops;
use crate::types::{DVector, SVector, Scalar};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two shapes a [`Value`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    /// A single real number.
    Scalar,
    /// A fixed-length sequence of real numbers.
    Vector,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Vector => f.write_str("vector"),
        }
    }
}

/// A scalar or a vector of scalars.
///
/// Vectors built through [`Value::vector`], [`Value::from_slice`],
/// `TryFrom<Vec<T>>`, the array conversions or deserialization always hold
/// at least one element. A `Vector` built directly from an empty `DVector`
/// is still accepted by every operation.
///
/// # Example
///
/// ```
/// use numops::prelude::*;
///
/// let v: Value<f64> = Value::from([4.0, 3.0]);
/// assert_eq!(v.absolute(), 5.0);
/// assert!(Value::scalar(2.0).is_positive());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "serde", serde(try_from = "ValueRepr<T>"))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Scalar + Serialize",
        deserialize = "T: Scalar + Deserialize<'de>"
    ))
)]
pub enum Value<T: Scalar> {
    /// A single real number.
    Scalar(T),
    /// An ordered sequence of real numbers.
    Vector(DVector<T>),
}

/// Wire form of [`Value`], checked for empty vectors before conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
#[serde(bound(deserialize = "T: Scalar + Deserialize<'de>"))]
enum ValueRepr<T: Scalar> {
    Scalar(T),
    Vector(DVector<T>),
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<ValueRepr<T>> for Value<T> {
    type Error = NumericError;

    fn try_from(repr: ValueRepr<T>) -> Result<Self> {
        match repr {
            ValueRepr::Scalar(x) => Ok(Self::Scalar(x)),
            ValueRepr::Vector(v) if v.is_empty() => {
                tracing::debug!("rejected empty vector during deserialization");
                Err(NumericError::EmptyVector)
            }
            ValueRepr::Vector(v) => Ok(Self::Vector(v)),
        }
    }
}

impl<T: Scalar> Value<T> {
    /// Wrap a single number.
    pub const fn scalar(x: T) -> Self {
        Self::Scalar(x)
    }

    /// Build a vector from its elements.
    ///
    /// Fails with [`NumericError::EmptyVector`] if `items` yields nothing.
    pub fn vector<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<T> = items.into_iter().collect();
        if data.is_empty() {
            tracing::debug!("rejected empty vector");
            return Err(NumericError::EmptyVector);
        }
        Ok(Self::Vector(DVector::from_vec(data)))
    }

    /// Build a vector by copying a slice.
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::vector(data.iter().copied())
    }

    /// Shape of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Vector(_) => ValueKind::Vector,
        }
    }

    /// Number of elements; a scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(v) => v.len(),
        }
    }

    /// True only for a vector with no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for [`Value::Scalar`].
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// True for [`Value::Vector`].
    pub const fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    /// The wrapped number, if this is a scalar.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Self::Scalar(x) => Some(*x),
            Self::Vector(_) => None,
        }
    }

    /// The wrapped elements, if this is a vector.
    pub fn as_vector(&self) -> Option<&DVector<T>> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(v) => Some(v),
        }
    }

    /// See [`ops::sum_values`].
    pub fn sum(&self, other: &Self) -> Result<Self> {
        ops::sum_values(self, other)
    }

    /// See [`ops::is_positive`].
    pub fn is_positive(&self) -> bool {
        ops::is_positive(self)
    }

    /// See [`ops::is_positive_by`].
    pub fn is_positive_by(&self, quantifier: Quantifier) -> bool {
        ops::is_positive_by(self, quantifier)
    }

    /// See [`ops::absolute`].
    pub fn absolute(&self) -> T {
        ops::absolute(self)
    }
}

impl<T: Scalar> From<T> for Value<T> {
    fn from(x: T) -> Self {
        Self::Scalar(x)
    }
}

impl<T: Scalar> From<DVector<T>> for Value<T> {
    fn from(v: DVector<T>) -> Self {
        Self::Vector(v)
    }
}

/// Zero-length vectors are rejected at compile time.
///
/// ```compile_fail
/// use numops::prelude::*;
///
/// let _: Value<f64> = Value::from(SVector::<f64, 0>::zeros());
/// ```
impl<T: Scalar, const N: usize> From<SVector<T, N>> for Value<T> {
    fn from(v: SVector<T, N>) -> Self {
        const { assert!(N > 0, "vector must have at least one element") };
        Self::Vector(DVector::from_column_slice(v.as_slice()))
    }
}

/// Zero-length arrays are rejected at compile time.
///
/// ```compile_fail
/// use numops::prelude::*;
///
/// let _: Value<f64> = Value::from([0.0_f64; 0]);
/// ```
impl<T: Scalar, const N: usize> From<[T; N]> for Value<T> {
    fn from(data: [T; N]) -> Self {
        const { assert!(N > 0, "array must have at least one element") };
        Self::Vector(DVector::from_column_slice(&data))
    }
}

impl<T: Scalar> TryFrom<Vec<T>> for Value<T> {
    type Error = NumericError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::vector(data)
    }
}
