//! Error types for the gender inference client.

use thiserror::Error;

/// Errors that can occur while fetching a gender guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service answered with a non-2xx status.
    #[error("Failed to fetch gender")]
    Unsuccessful { status: u16 },

    /// The request never completed or the body could not be read/parsed.
    #[error("Error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}
