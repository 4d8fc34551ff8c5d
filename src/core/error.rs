// Centralized error handling for the directory viewer

use thiserror::Error;

/// Errors from a single directory fetch attempt
///
/// `Display` is the exact text surfaced to the user. The transport variant
/// keeps the underlying cause out of that text; it is logged instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Error: {code}")]
    HttpStatus { code: u16 },

    #[error("Network error")]
    Transport { detail: String },
}

impl FetchError {
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        FetchError::Transport {
            detail: cause.to_string(),
        }
    }

    /// Diagnostic description for logging, including the cause the user
    /// message omits
    pub fn diagnostic(&self) -> String {
        match self {
            FetchError::HttpStatus { code } => format!("non-success status {code}"),
            FetchError::Transport { detail } => detail.clone(),
        }
    }
}
