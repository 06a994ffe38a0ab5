//! Valguard - user-attributable validation errors with retryable classification.
//!
//! This library provides [`ValidationError`], an error type for failures the
//! user can act on: wrong flag usage, bad configuration fields, or invalid
//! input discovered during execution. Every error carries a `retryable` flag
//! fixed at construction and propagated one level through causal wrapping,
//! so callers at any point in a chain can decide whether the failed
//! operation is worth attempting again.
//!
//! The [`check_condition`] function and [`check_condition!`] macro are the
//! guard entry points that produce these errors from failed preconditions.

pub mod error;

pub use error::{check_condition, ValidationError, ValidationResult};
