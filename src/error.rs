//! Error types for the style_scan library

use thiserror::Error;

/// Result type alias for style_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for color and style analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input value rejected by validation (channel range, empty samples, bad hex...)
    #[error("Invalid input: {parameter} = {value}")]
    InvalidInput { parameter: String, value: String },

    /// Key not present in one of the static reference tables
    #[error("Unknown key '{key}' in {table} table")]
    UnknownLookupKey { table: String, key: String },

    /// Image file could not be read or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an input validation error
    pub fn invalid_input(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a lookup error for a missing table key
    pub fn unknown_key(table: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownLookupKey {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the caller can recover by substituting a default value.
    ///
    /// Sampling and lookup failures are soft: the boundary falls back to the
    /// default color or style. IO and configuration failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidInput { .. } | AnalysisError::UnknownLookupKey { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidInput { parameter, .. } if parameter == "file_type" => {
                "Please upload an image file (JPEG, PNG, etc.)".to_string()
            }
            AnalysisError::InvalidInput { parameter, .. } if parameter == "file_size" => {
                "Please upload an image smaller than 5MB".to_string()
            }
            AnalysisError::InvalidInput { parameter, .. } if parameter == "samples" => {
                "Could not read any color from the image. Please try a different photo.".to_string()
            }
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            _ => "Style analysis failed. Please try with a different image.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = AnalysisError::invalid_input("red", 300);
        assert_eq!(err.to_string(), "Invalid input: red = 300");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_image_load_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AnalysisError::image_load("cannot open photo.jpg", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_user_messages() {
        let err = AnalysisError::invalid_input("file_size", 6_000_000);
        assert_eq!(err.user_message(), "Please upload an image smaller than 5MB");

        let err = AnalysisError::invalid_input("file_type", "notes.txt");
        assert_eq!(err.user_message(), "Please upload an image file (JPEG, PNG, etc.)");

        let err = AnalysisError::unknown_key("style", "goth");
        assert_eq!(err.to_string(), "Unknown key 'goth' in style table");
    }
}
