//! Validation error handling module.
//!
//! This module provides the [`ValidationError`] type for failures
//! attributable to the user rather than the system, and the
//! [`check_condition`] guard that produces it. Errors are classified as
//! retryable or not at construction, and the flag propagates one level
//! through causal wrapping so callers can make retry decisions at any
//! point in a call chain.

pub mod validation;

// Re-export main types for convenient access
pub use validation::{check_condition, ValidationError, ValidationResult};
