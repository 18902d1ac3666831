//! Strict positivity of scalars and vectors.
//!
//! For vectors, [`is_positive`] is true when **any** element is strictly
//! positive. A vector with one positive element and the rest negative is
//! positive. Callers that need every element positive must pass
//! [`Quantifier::All`] to [`is_positive_by`].

use crate::config::Quantifier;
use crate::types::Scalar;
use crate::value::Value;

/// Whether a value is strictly positive.
///
/// A scalar is positive iff it is `> 0`; zero is not positive. A vector is
/// positive iff at least one element is `> 0`.
///
/// # Example
///
/// ```
/// use numops::prelude::*;
///
/// assert!(is_positive(&Value::<f64>::from([1.0, -2.0, -3.0])));
/// assert!(!is_positive(&Value::<f64>::from([-1.0, -2.0, -3.0])));
/// assert!(!is_positive(&Value::scalar(0.0)));
/// ```
pub fn is_positive<T: Scalar>(a: &Value<T>) -> bool {
    is_positive_by(a, Quantifier::Any)
}

/// Whether a value is strictly positive, folding vector elements with `quantifier`.
///
/// Scalars ignore the quantifier.
pub fn is_positive_by<T: Scalar>(a: &Value<T>, quantifier: Quantifier) -> bool {
    match a {
        Value::Scalar(x) => *x > T::zero(),
        Value::Vector(v) => quantifier.apply(v.iter(), |&x| x > T::zero()),
    }
}

/// True if at least one element is strictly positive.
pub fn any_positive<T: Scalar>(a: &[T]) -> bool {
    Quantifier::Any.apply(a, |&x| x > T::zero())
}

/// True if every element is strictly positive. Vacuously true for an empty slice.
pub fn all_positive<T: Scalar>(a: &[T]) -> bool {
    Quantifier::All.apply(a, |&x| x > T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DVector;

    #[test]
    fn test_scalar_sign() {
        assert!(is_positive(&Value::scalar(1e-300_f64)));
        assert!(!is_positive(&Value::scalar(0.0_f64)));
        assert!(!is_positive(&Value::scalar(-0.0_f64)));
        assert!(!is_positive(&Value::scalar(-2.5_f32)));
        assert!(!is_positive(&Value::scalar(f64::NAN)));
    }

    #[test]
    fn test_vector_any() {
        assert!(is_positive(&Value::<f64>::from([1.0, 2.0, 3.0])));
        assert!(!is_positive(&Value::<f64>::from([-1.0, -2.0, -3.0])));
        assert!(is_positive(&Value::<f64>::from([1.0, -2.0, -3.0])));
        assert!(!is_positive(&Value::<f64>::from([0.0, 0.0])));
    }

    #[test]
    fn test_vector_all() {
        let mixed = Value::<f64>::from([1.0, -2.0, -3.0]);
        assert!(!is_positive_by(&mixed, Quantifier::All));
        assert!(is_positive_by(&mixed, Quantifier::Any));
        assert!(is_positive_by(
            &Value::<f64>::from([1.0, 2.0, 3.0]),
            Quantifier::All
        ));
        assert!(!is_positive_by(&Value::<f64>::from([1.0, 0.0]), Quantifier::All));
    }

    #[test]
    fn test_quantifier_ignored_for_scalars() {
        for q in [Quantifier::Any, Quantifier::All] {
            assert!(is_positive_by(&Value::scalar(3.0_f64), q));
            assert!(!is_positive_by(&Value::scalar(-3.0_f64), q));
        }
    }

    #[test]
    fn test_empty_vector() {
        let empty = Value::Vector(DVector::<f64>::zeros(0));
        assert!(!is_positive(&empty));
        assert!(!is_positive_by(&empty, Quantifier::Any));
        assert!(is_positive_by(&empty, Quantifier::All));
    }

    #[test]
    fn test_slice_kernels() {
        assert!(any_positive(&[-1.0_f64, 0.5]));
        assert!(!any_positive::<f64>(&[]));
        assert!(all_positive(&[1.0_f32, 0.5]));
        assert!(!all_positive(&[1.0_f32, -0.5]));
        assert!(all_positive::<f32>(&[]));
    }
}
