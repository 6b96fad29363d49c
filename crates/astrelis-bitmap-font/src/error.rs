//! Error types for loading and saving font configurations.

use std::fmt;

/// Errors that can occur while loading or saving a [`FontConfig`](crate::FontConfig).
#[derive(Debug)]
pub enum FontConfigError {
    /// The underlying stream could not be read from or written to.
    IoError(std::io::Error),

    /// The bytes are not a font configuration document of the expected shape.
    MalformedDocument(serde_json::Error),

    /// The configuration could not be encoded.
    SerializationError(serde_json::Error),
}

impl fmt::Display for FontConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontConfigError::IoError(err) => write!(f, "IO error: {}", err),
            FontConfigError::MalformedDocument(err) => {
                write!(f, "Malformed font config document: {}", err)
            }
            FontConfigError::SerializationError(err) => {
                write!(f, "Failed to serialize font config: {}", err)
            }
        }
    }
}

impl std::error::Error for FontConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontConfigError::IoError(err) => Some(err),
            FontConfigError::MalformedDocument(err) => Some(err),
            FontConfigError::SerializationError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for FontConfigError {
    fn from(err: std::io::Error) -> Self {
        FontConfigError::IoError(err)
    }
}

/// Result type for font configuration operations.
pub type FontConfigResult<T> = Result<T, FontConfigError>;
