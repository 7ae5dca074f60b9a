//! Error handling for bitsquat

use thiserror::Error;

/// Main error type for bitsquat
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsquatError {
    #[error("Invalid bit length: expected {expected} bits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Failed to split URL '{url}' into domain name and extension: {message}")]
    Split { url: String, message: String },

    #[error("Cannot encode character {character:?} at position {position} of '{label}': code point exceeds 255")]
    Encoding {
        label: String,
        character: char,
        position: usize,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BitsquatError {
    /// Create an invalid length error
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    /// Create a URL split error
    pub fn split(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Split {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(label: impl Into<String>, character: char, position: usize) -> Self {
        Self::Encoding {
            label: label.into(),
            character,
            position,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidLength { expected, actual } => {
                format!("❌ Bit string has {} bits, expected {}\n💡 This is a bug, please report it", actual, expected)
            }
            Self::Split { url, message } => {
                format!("❌ Failed to split URL: {} into domain name and extension ({})\n💡 Expected something like example.com or https://example.com/path", url, message)
            }
            Self::Encoding { label, character, .. } => {
                format!("❌ '{}' contains {:?}, which is not a single-byte character\n💡 Internationalized domains are not supported, use the ASCII form", label, character)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or BITSQUAT_* environment variables", message)
            }
            Self::Serialization { message } => {
                format!("❌ Could not serialize report: {}", message)
            }
            Self::Io { message } => {
                format!("❌ Output error: {}", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<serde_json::Error> for BitsquatError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for BitsquatError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<regex::Error> for BitsquatError {
    fn from(err: regex::Error) -> Self {
        Self::internal(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BitsquatError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::BitsquatError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::BitsquatError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::BitsquatError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::BitsquatError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! split_error {
    ($url:expr, $msg:expr) => {
        $crate::error::BitsquatError::split($url, $msg)
    };
    ($url:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::error::BitsquatError::split($url, format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BitsquatError::invalid_length(16, 15);
        assert_eq!(err.to_string(), "Invalid bit length: expected 16 bits, got 15");

        let err = BitsquatError::split("nodot", "missing '.' separator");
        assert!(err.to_string().contains("nodot"));
        assert!(err.to_string().contains("missing '.' separator"));

        let err = BitsquatError::encoding("caf\u{0100}", '\u{0100}', 3);
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn test_user_message_has_hint() {
        let err = config_error!("bad value {}", 42);
        assert!(err.user_message().contains("bad value 42"));
        assert!(err.user_message().contains("BITSQUAT_"));

        let err = split_error!("x", "empty");
        assert!(err.user_message().contains("Failed to split URL: x"));
    }

    #[test]
    fn test_conversions() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert!(matches!(BitsquatError::from(io), BitsquatError::Io { .. }));

        let json = serde_json::from_str::<u8>("nope").unwrap_err();
        assert!(matches!(
            BitsquatError::from(json),
            BitsquatError::Serialization { .. }
        ));
    }
}
