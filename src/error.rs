//! Error taxonomy for wheel operations.
//!
//! Every failure is detected before any enumeration work begins and surfaced
//! to the caller as one of three kinds. There are no retries and no partial
//! results: an `Err` means no pool or selection was produced for that call.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The universe is empty, too small, or contains out-of-bound numbers.
    #[error("insufficient input: {reason}")]
    InsufficientInput { reason: String },

    /// A caller-supplied parameter lies outside its allowed set.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// The generated pool size does not match the closed-form expectation.
    ///
    /// This signals a defect in the generator itself, never bad user input.
    #[error("integrity check failed: expected {expected} combinations, generated {actual}")]
    Integrity { expected: String, actual: usize },
}

impl Error {
    pub(crate) fn insufficient(reason: impl Into<String>) -> Self {
        Error::InsufficientInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            reason: reason.into(),
        }
    }
}
