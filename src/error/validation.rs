//! User-attributable validation errors with retryable classification.
//!
//! A [`ValidationError`] indicates that configuration is wrong or that some
//! error attributable to the user happened: wrong flag usage, bad field
//! values, or problems discovered during execution. Each error carries a
//! `retryable` flag, fixed at construction, telling callers whether the
//! failed operation may succeed if attempted again with the same inputs.

use std::error::Error as StdError;

use thiserror::Error;

/// Result type for validation guard operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// An error attributable to the user rather than the system.
///
/// Carries a human-readable message, an optional wrapped cause (exposed
/// through [`std::error::Error::source`]), and a `retryable` flag. The flag
/// is write-once: it is set at construction, either explicitly via
/// [`retriable`](ValidationError::retriable) or by propagation from a wrapped
/// retryable `ValidationError`, and never mutated afterwards.
///
/// This type never retries anything itself. Callers that receive one decide
/// whether to retry, log, or terminate by checking
/// [`is_retryable`](ValidationError::is_retryable).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable description of the violated condition.
    message: String,
    /// The underlying error that triggered this one, if any.
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync>>,
    /// Whether the operation that failed may succeed on retry.
    retryable: bool,
}

impl ValidationError {
    /// Creates a non-retryable error with the given message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
            retryable: false,
        }
    }

    /// Creates an error wrapping an underlying cause.
    ///
    /// The new error is retryable if and only if `cause` is itself a
    /// `ValidationError` with the flag set. Only the direct cause is
    /// inspected; the source chain is never walked.
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let cause = cause.into();
        let retryable = cause
            .downcast_ref::<ValidationError>()
            .is_some_and(|inner| inner.retryable);
        Self {
            message: message.into(),
            cause: Some(cause),
            retryable,
        }
    }

    /// Creates a retryable error with the given message and no cause.
    ///
    /// For failures the caller knows to be transient, for example a network
    /// hiccup during a validation-adjacent lookup.
    pub fn retriable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
            retryable: true,
        }
    }

    /// Returns true if the operation that produced this error may succeed
    /// when attempted again with the same inputs.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// Returns the message describing the violated condition.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Checks a condition, returning a non-retryable [`ValidationError`] if it
/// does not hold.
///
/// A true condition is a no-op. When the message needs format interpolation,
/// use the [`check_condition!`](crate::check_condition!) macro instead; it
/// formats only on the failure path.
pub fn check_condition(condition: bool, message: impl Into<String>) -> ValidationResult<()> {
    if condition {
        Ok(())
    } else {
        let message = message.into();
        tracing::debug!(%message, "validation check failed");
        Err(ValidationError::new(message))
    }
}

/// Checks a condition, producing a [`ValidationError`](crate::ValidationError)
/// with a formatted message if it does not hold.
///
/// The format string and arguments follow [`format!`] semantics and are
/// evaluated only when the condition is false. Expands to a
/// `ValidationResult<()>`, so the usual call site ends in `?`.
///
/// ```
/// fn validate(port: u16) -> valguard::ValidationResult<()> {
///     valguard::check_condition!(port >= 1024, "reserved port: {port}")?;
///     Ok(())
/// }
///
/// assert!(validate(8080).is_ok());
/// assert!(validate(80).is_err());
/// ```
#[macro_export]
macro_rules! check_condition {
    ($condition:expr, $($arg:tt)+) => {
        if $condition {
            ::core::result::Result::Ok(())
        } else {
            $crate::check_condition(false, ::std::format!($($arg)+))
        }
    };
}
