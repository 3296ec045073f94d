//! Error types for the Shift Time Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report.

use thiserror::Error;

/// The main error type for the Shift Time Engine.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     argument: "shift".to_string(),
///     message: "unknown shift 'graveyard'".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid argument 'shift': unknown shift 'graveyard'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An argument was outside its documented domain.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured timezone is not a known IANA zone name.
    #[error("Unknown timezone: {name}")]
    InvalidTimezone {
        /// The timezone name as written in the configuration.
        name: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_argument_and_message() {
        let error = EngineError::invalid_argument("break_minutes", "must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid argument 'break_minutes': must not be negative"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/policy.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/policy.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_timezone_displays_name() {
        let error = EngineError::InvalidTimezone {
            name: "Mars/Olympus".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown timezone: Mars/Olympus");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid() -> EngineResult<()> {
            Err(EngineError::invalid_argument("shift", "empty"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
