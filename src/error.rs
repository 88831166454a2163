//! Error types for encoding, decoding and spatial queries.

use std::fmt;
use thiserror::Error;

/// Discriminant of a [`DigipinError`], stable across messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLatitude,
    InvalidLongitude,
    InvalidFormat,
    InvalidCharacter,
    InvalidLength,
    InvalidBounds,
    OutOfBounds,
    NegativeRadius,
    InvalidPrecision,
    InvalidConfig,
    EmptyInput,
    GenerationFailed,
    DecodeFailed,
    Serialization,
}

impl ErrorKind {
    /// Upper snake case name, as used by the C interface and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidLatitude => "INVALID_LATITUDE",
            Self::InvalidLongitude => "INVALID_LONGITUDE",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidCharacter => "INVALID_CHARACTER",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::InvalidBounds => "INVALID_BOUNDS",
            Self::OutOfBounds => "OUT_OF_BOUNDS",
            Self::NegativeRadius => "NEGATIVE_RADIUS",
            Self::InvalidPrecision => "INVALID_PRECISION",
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::EmptyInput => "EMPTY_INPUT",
            Self::GenerationFailed => "GENERATION_FAILED",
            Self::DecodeFailed => "DECODE_FAILED",
            Self::Serialization => "SERIALIZATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by every fallible operation in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigipinError {
    #[error("{0}")]
    InvalidLatitude(String),

    #[error("{0}")]
    InvalidLongitude(String),

    /// Blank input or otherwise malformed code.
    #[error("{0}")]
    InvalidFormat(String),

    /// Code contains symbols outside the alphabet.
    #[error("{0}")]
    InvalidCharacter(String),

    #[error("{0}")]
    InvalidLength(String),

    /// Southwest corner lies north or east of the northeast corner.
    #[error("{0}")]
    InvalidBounds(String),

    /// Coordinate is valid but outside the codec's domain.
    #[error("{0}")]
    OutOfBounds(String),

    #[error("{0}")]
    NegativeRadius(String),

    #[error("{0}")]
    InvalidPrecision(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    EmptyInput(String),

    #[error("Failed to generate DIGIPIN: {0}")]
    GenerationFailed(String),

    #[error("Failed to decode DIGIPIN: {0}")]
    DecodeFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DigipinError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLatitude(_) => ErrorKind::InvalidLatitude,
            Self::InvalidLongitude(_) => ErrorKind::InvalidLongitude,
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            Self::InvalidLength(_) => ErrorKind::InvalidLength,
            Self::InvalidBounds(_) => ErrorKind::InvalidBounds,
            Self::OutOfBounds(_) => ErrorKind::OutOfBounds,
            Self::NegativeRadius(_) => ErrorKind::NegativeRadius,
            Self::InvalidPrecision(_) => ErrorKind::InvalidPrecision,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::EmptyInput(_) => ErrorKind::EmptyInput,
            Self::GenerationFailed(_) => ErrorKind::GenerationFailed,
            Self::DecodeFailed(_) => ErrorKind::DecodeFailed,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// The human readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidLatitude(m)
            | Self::InvalidLongitude(m)
            | Self::InvalidFormat(m)
            | Self::InvalidCharacter(m)
            | Self::InvalidLength(m)
            | Self::InvalidBounds(m)
            | Self::OutOfBounds(m)
            | Self::NegativeRadius(m)
            | Self::InvalidPrecision(m)
            | Self::InvalidConfig(m)
            | Self::EmptyInput(m)
            | Self::GenerationFailed(m)
            | Self::DecodeFailed(m)
            | Self::Serialization(m) => m,
        }
    }
}

impl From<serde_json::Error> for DigipinError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result type for DIGIPIN operations.
pub type Result<T> = std::result::Result<T, DigipinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_message() {
        let err = DigipinError::OutOfBounds("Coordinate (0, 0) is outside the domain".into());
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(err.message(), "Coordinate (0, 0) is outside the domain");
        assert_eq!(err.kind().to_string(), "OUT_OF_BOUNDS");
    }

    #[test]
    fn test_wrapped_failures_keep_cause() {
        let err = DigipinError::DecodeFailed("non-finite rectangle".into());
        assert_eq!(err.to_string(), "Failed to decode DIGIPIN: non-finite rectangle");
        assert_eq!(err.message(), "non-finite rectangle");
    }
}
