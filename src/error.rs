// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Variants carry plain strings so errors stay `Clone` and can travel inside
/// UI messages. Every failure degrades to a notification; nothing here is
/// fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport-level failure: connection refused, DNS, timeout.
    Http(String),
    /// The server answered with a non-2xx status. The message is taken from
    /// the response body when one is present.
    Api { status: u16, message: String },
    /// Response body could not be decoded into the expected shape.
    Decode(String),
    /// Image decode, resize, or re-encode failure.
    Image(String),
    /// Configuration file could not be read or written.
    Config(String),
    /// Client-side validation rejected the input before any network call.
    Validation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "Network error: {e}"),
            Error::Api { status, message } => {
                if message.is_empty() {
                    write!(f, "Server error (HTTP {status})")
                } else {
                    write!(f, "{message} (HTTP {status})")
                }
            }
            Error::Decode(e) => write!(f, "Unexpected server response: {e}"),
            Error::Image(e) => write!(f, "Image error: {e}"),
            Error::Config(e) => write!(f, "Config error: {e}"),
            Error::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{err}"), "Network error: connection refused");
    }

    #[test]
    fn api_error_with_message_includes_status() {
        let err = Error::Api {
            status: 413,
            message: "File too large".to_string(),
        };
        assert_eq!(format!("{err}"), "File too large (HTTP 413)");
    }

    #[test]
    fn api_error_without_message_falls_back_to_status() {
        let err = Error::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(format!("{err}"), "Server error (HTTP 500)");
    }

    #[test]
    fn validation_error_displays_bare_message() {
        let err = Error::Validation("Title is required".to_string());
        assert_eq!(format!("{err}"), "Title is required");
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        assert!(matches!(err, Error::Config(message) if message.contains("boom")));
    }
}
