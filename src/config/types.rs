//! Configuration types for shift calculations.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from the YAML policy file.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// How malformed break or prayer minute counts are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinutePolicy {
    /// Negative, NaN or infinite counts are treated as zero.
    #[default]
    Clamp,
    /// Negative, NaN or infinite counts are rejected as invalid arguments.
    Strict,
}

/// The denominator used when computing night-shift progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBasis {
    /// A fixed 480-minute shift length, regardless of check-in time.
    #[default]
    FixedShiftLength,
    /// The span from check-in to the computed shift end.
    ShiftWindow,
}

/// Policy file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// IANA timezone name used for all wall-clock rules.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Handling of malformed minute counts.
    #[serde(default)]
    pub minute_policy: MinutePolicy,
    /// Denominator for night-shift progress.
    #[serde(default)]
    pub progress_basis: ProgressBasis,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// The resolved policy a [`ShiftTimeCalculator`](crate::ShiftTimeCalculator) runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPolicy {
    /// Business timezone in which shift boundaries are evaluated.
    pub timezone: Tz,
    /// Handling of malformed minute counts.
    pub minute_policy: MinutePolicy,
    /// Denominator for night-shift progress.
    pub progress_basis: ProgressBasis,
}

impl ShiftPolicy {
    /// Creates a policy for `timezone` with default handling rules.
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            ..Self::default()
        }
    }
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            minute_policy: MinutePolicy::default(),
            progress_basis: ProgressBasis::default(),
        }
    }
}
