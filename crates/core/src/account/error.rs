//! Error types for account code operations.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while generating or resolving account codes.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Code generation exceeded the retry ceiling without finding a free
    /// code.
    ///
    /// Indicates either too short a code length or a near-saturated code
    /// space; callers should not silently retry with the same length.
    #[error("unable to find an unused account code of length {code_length} after {attempts} attempts")]
    CodeSpaceExhausted {
        /// Requested code length in characters.
        code_length: usize,
        /// Number of candidates tried before giving up.
        attempts: u64,
    },

    /// More than one account matched a single code.
    ///
    /// This is a data-integrity failure, not a user error. The message
    /// deliberately carries no code value: account codes double as PINs.
    #[error("multiple financial accounts share one account code")]
    AmbiguousCode,

    /// The persistence collaborator failed; propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccountError {
    /// Returns the error code for machine-readable reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CodeSpaceExhausted { .. } => "CODE_SPACE_EXHAUSTED",
            Self::AmbiguousCode => "AMBIGUOUS_ACCOUNT_CODE",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}
