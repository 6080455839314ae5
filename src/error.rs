//! Error types for the smoke-test runner
//!
//! This module provides the error type hierarchy using `thiserror` for
//! proper error handling across all components.

use thiserror::Error;

/// The main error type for smoke-run operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser lifecycle errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Capture errors (screenshots)
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    /// Artifact store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Browser lifecycle and control errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),
}

/// Navigation errors
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Navigation timeout
    #[error("Navigation timed out after {0}ms")]
    Timeout(u64),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),

    /// Element interaction failed (fill/click target missing or unresponsive)
    #[error("Element interaction failed for {selector}: {message}")]
    InteractionFailed {
        /// Selector that was targeted
        selector: String,
        /// Underlying failure
        message: String,
    },
}

/// Capture errors (screenshots)
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Screenshot failed
    #[error("Screenshot capture failed: {0}")]
    ScreenshotFailed(String),
}

/// Artifact store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to persist a value under a key
    #[error("Failed to write artifact {key}: {message}")]
    WriteFailed {
        /// Store key being written
        key: String,
        /// Underlying failure
        message: String,
    },

    /// Failed to serialize a record for persistence
    #[error("Failed to serialize record: {0}")]
    Serialize(String),
}

/// Result type alias for smoke-run operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Browser(BrowserError::LaunchFailed("no chrome".to_string()));
        assert!(err.to_string().contains("Failed to launch browser"));
        assert!(err.to_string().contains("no chrome"));
    }

    #[test]
    fn test_navigation_timeout() {
        let err = NavigationError::Timeout(10000);
        assert_eq!(err.to_string(), "Navigation timed out after 10000ms");
    }

    #[test]
    fn test_interaction_failed() {
        let err = NavigationError::InteractionFailed {
            selector: "button[type=\"submit\"]".to_string(),
            message: "node not found".to_string(),
        };
        assert!(err.to_string().contains("button[type=\"submit\"]"));
        assert!(err.to_string().contains("node not found"));
    }

    #[test]
    fn test_store_error() {
        let err = StoreError::WriteFailed {
            key: "home.png".to_string(),
            message: "disk full".to_string(),
        };
        assert!(err.to_string().contains("home.png"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
