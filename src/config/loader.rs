//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! policy from a YAML file.

use chrono_tz::Tz;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyFile, ShiftPolicy};

/// Loads and provides access to the shift policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Timezone, minute policy, progress basis
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Business timezone: {}", loader.policy().timezone);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: ShiftPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `policy.yaml` is missing
    /// - the file contains invalid YAML or unknown policy values
    /// - the timezone is not a known IANA zone name
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let file = Self::load_yaml::<PolicyFile>(&policy_path)?;
        Self::from_policy_file(file)
    }

    /// Builds a loader from YAML text that has already been read.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let file: PolicyFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_policy_file(file)
    }

    fn from_policy_file(file: PolicyFile) -> EngineResult<Self> {
        let timezone = parse_timezone(&file.timezone)?;
        Ok(Self {
            policy: ShiftPolicy {
                timezone,
                minute_policy: file.minute_policy,
                progress_basis: file.progress_basis,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &ShiftPolicy {
        &self.policy
    }
}

fn parse_timezone(name: &str) -> EngineResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| EngineError::InvalidTimezone {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MinutePolicy, ProgressBasis};

    fn write_policy(dir: &Path, content: &str) {
        fs::write(dir.join("policy.yaml"), content).unwrap();
    }

    #[test]
    fn test_load_bundled_default_configuration() {
        let loader = ConfigLoader::load("./config/default");
        assert!(loader.is_ok(), "Failed to load config: {:?}", loader.err());

        let policy = loader.unwrap().policy().to_owned();
        assert_eq!(policy.timezone, chrono_tz::Asia::Karachi);
        assert_eq!(policy.minute_policy, MinutePolicy::Clamp);
        assert_eq!(policy.progress_basis, ProgressBasis::FixedShiftLength);
    }

    #[test]
    fn test_load_strict_policy() {
        let dir = tempfile::tempdir().unwrap();
        write_policy(
            dir.path(),
            "timezone: Europe/Berlin\nminute_policy: strict\nprogress_basis: shift_window\n",
        );

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.policy().timezone, chrono_tz::Europe::Berlin);
        assert_eq!(loader.policy().minute_policy, MinutePolicy::Strict);
        assert_eq!(loader.policy().progress_basis, ProgressBasis::ShiftWindow);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_policy(dir.path(), "minute_policy: [unterminated");

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_minute_policy_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("minute_policy: lenient\n");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_unknown_timezone_returns_error() {
        match ConfigLoader::from_yaml_str("timezone: Mars/Olympus\n") {
            Err(EngineError::InvalidTimezone { name }) => assert_eq!(name, "Mars/Olympus"),
            other => panic!("Expected InvalidTimezone, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("{}").unwrap();
        assert_eq!(loader.policy(), &ShiftPolicy::default());
    }
}
