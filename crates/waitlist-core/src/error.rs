//! Error types for the waitlist core library
//!
//! Field validation never produces an error: it always returns a verdict.
//! The types here cover the submission side of the form flow, using
//! thiserror for the definitions and anyhow for ad-hoc source chains.

use thiserror::Error;

/// Main error type for waitlist operations
#[derive(Error, Debug)]
pub enum Error {
    /// The submission collaborator rejected or failed to accept the form
    #[error("Submission failed: {message}")]
    Submission {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// HTTP/Network related errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Submission did not complete within the configured bound
    #[error("Submission timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a submission error without an underlying cause
    pub fn submission(message: impl Into<String>) -> Self {
        Error::Submission {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error without an underlying cause
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http {
            message: err.to_string(),
            status_code: err.status().map(|s| s.as_u16()),
            source: Some(anyhow::Error::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::submission("backend unavailable");
        assert_eq!(err.to_string(), "Submission failed: backend unavailable");
    }

    #[test]
    fn test_timeout_display() {
        let err = Error::Timeout { timeout_ms: 1500 };
        assert_eq!(err.to_string(), "Submission timed out after 1500ms");
    }

    #[test]
    fn test_configuration_keeps_source() {
        use std::error::Error as _;

        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = Error::Configuration {
            message: "Invalid submission endpoint".to_string(),
            source: Some(anyhow::Error::new(parse_err)),
        };
        assert_eq!(err.to_string(), "Configuration error: Invalid submission endpoint");
        assert!(err.source().is_some());
        assert!(Error::configuration("no source").source().is_none());
    }
}
