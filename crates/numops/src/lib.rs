//! Addition, sign and magnitude over scalars and vectors.
//!
//! Every operation accepts a [`Value`], which is either a single real
//! number or a fixed-length vector of them, and dispatches on the variant.
//!
//! # Operations
//!
//! - [`sum_values`]: scalar sum, or element-wise sum of two equal-length vectors
//! - [`is_positive`]: strict positivity; for vectors, true if **any** element is positive
//! - [`absolute`]: `|a|` for scalars, the Euclidean norm for vectors
//!
//! # Modules
//!
//! - [`config`]: quantifier selection for vector predicates
//! - [`error`]: error types for malformed input
//! - [`ops`]: the operations and their slice kernels
//! - [`types`]: the `Scalar` trait and vector aliases
//! - [`value`]: the scalar-or-vector value type

pub mod config;
pub mod error;
pub mod ops;
pub mod types;
pub mod value;

pub use config::Quantifier;
pub use error::{NumericError, Result};
pub use ops::{absolute, is_positive, is_positive_by, sum_values};
pub use value::{Value, ValueKind};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use numops::prelude::*;
///
/// let sum = sum_values(&Value::scalar(2.0), &Value::scalar(3.0)).unwrap();
/// assert_eq!(sum, Value::Scalar(5.0));
/// ```
pub mod prelude {
    pub use crate::config::Quantifier;
    pub use crate::error::{NumericError, Result};
    pub use crate::ops::{
        absolute, add_slices, all_positive, any_positive, is_positive, is_positive_by, l2_norm,
        sum_values,
    };
    pub use crate::types::{DVector, SVector, Scalar};
    pub use crate::value::{Value, ValueKind};
}
