//! Error types for the hexhsl library

use thiserror::Error;

use crate::color::Channel;

/// Result type alias for hexhsl operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised while converting or configuring colors
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex string is not exactly six hex digits after an optional `#`
    #[error("Invalid hex color format {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// An RGB channel lies outside 0..=255
    #[error("RGB values must be between 0 and 255: {channel} = {value}")]
    OutOfRange { channel: Channel, value: i32 },

    /// Converter configuration could not be read, parsed or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create an invalid format error for `input`
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error was caused by the caller's color input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidFormat { .. } | ColorError::OutOfRange { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidFormat { .. } => {
                "Colors must be written as six hex digits, for example #3366cc.".to_string()
            }
            ColorError::OutOfRange { channel, value } => {
                format!(
                    "The {} channel is {}, but RGB channels must be between 0 and 255.",
                    channel.name(),
                    value
                )
            }
            ColorError::Config { .. } => {
                "Could not load the converter settings. Please check the config file.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = ColorError::OutOfRange {
            channel: Channel::Red,
            value: 256,
        };
        assert_eq!(
            err.to_string(),
            "RGB values must be between 0 and 255: r = 256"
        );
        assert!(err.is_input_error());
        assert!(err.user_message().contains("red channel is 256"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ColorError::invalid_format("#fff", "expected 6 hex digits, got 3");
        assert_eq!(
            err.to_string(),
            "Invalid hex color format \"#fff\": expected 6 hex digits, got 3"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_config_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ColorError::config("Failed to read converter.json", io);

        assert!(!err.is_input_error());
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("missing"));
    }
}
