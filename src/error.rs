//! Error types surfaced by the storefront binary.

use thiserror::Error;

use crate::tui::components::ReviewTemplateError;

/// Errors surfaced while configuring or running the storefront.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorefrontError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal user interface failed to start or crashed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail reported by the TUI runtime.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<ReviewTemplateError> for StorefrontError {
    fn from(error: ReviewTemplateError) -> Self {
        Self::Configuration {
            message: error.to_string(),
        }
    }
}
