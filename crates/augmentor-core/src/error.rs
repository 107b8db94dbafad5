//! Augmentation error types.

use thiserror::Error;

/// Errors that can occur while registering providers or augmenting objects.
#[derive(Debug, Error)]
pub enum AugmentError {
    /// A registration call or constructor received an unusable argument.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The offending argument.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A provider failed to build its capability implementation.
    #[error("provider '{provider}' failed: {message}")]
    Provider {
        /// Name of the failing provider.
        provider: String,
        /// Error message.
        message: String,
    },

    /// A command forwarded to the remote instance failed.
    #[error("remote command failed: {0}")]
    Remote(String),

    /// A remote response could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AugmentError {
    /// Create an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create a provider error.
    #[must_use]
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AugmentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result type for augmentation operations.
pub type AugmentResult<T> = Result<T, AugmentError>;
