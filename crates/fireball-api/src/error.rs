use thiserror::Error;

/// Errors returned by the Fireball API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status. `message` is the API's own
    /// explanation when the body carries one.
    #[error("Fireball API returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The body is not the expected `fields` / `data` table.
    #[error("unexpected response format from {context}: {reason}")]
    Format { context: String, reason: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// `true` when the request never produced a usable HTTP exchange: network
    /// failure, timeout or a non-success status.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }
}
