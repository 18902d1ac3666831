//! The three value operations: addition, sign and magnitude.
//!
//! Each operation takes a [`Value`](crate::value::Value), matches on its
//! variant and forwards to a slice or nalgebra kernel. Nothing here mutates
//! its inputs or keeps state between calls.

pub mod magnitude;
pub mod sign;
pub mod sum;

pub use magnitude::{absolute, l2_norm};
pub use sign::{all_positive, any_positive, is_positive, is_positive_by};
pub use sum::{add_slices, sum_values};
