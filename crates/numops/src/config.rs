//! Quantifier selection for element-wise predicates over vectors.
//!
//! `is_positive` on a vector answers "is any element positive" by default.
//! The stricter "every element positive" reading is available through
//! [`Quantifier::All`], but only when a caller asks for it explicitly.

use crate::error::{NumericError, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a per-element predicate is folded over a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Quantifier {
    /// True if at least one element satisfies the predicate.
    #[default]
    Any,
    /// True only if every element satisfies the predicate.
    All,
}

impl Quantifier {
    /// Evaluate `predicate` over `items` under this quantifier.
    ///
    /// `Any` over an empty sequence is false, `All` over an empty sequence is true.
    pub fn apply<I, F>(self, items: I, predicate: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> bool,
    {
        let mut items = items.into_iter();
        match self {
            Self::Any => items.any(predicate),
            Self::All => items.all(predicate),
        }
    }

    /// Lowercase name of the quantifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quantifier {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "all" => Ok(Self::All),
            _ => Err(NumericError::invalid_quantifier(s)),
        }
    }
}
