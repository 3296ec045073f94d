//! Shift kind model and nominal shift windows.
//!
//! This module defines the closed set of shifts an attendance session can be
//! recorded against, together with the wall-clock window each one covers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The named work window a session is recorded against.
///
/// Every fixed shift maps to a wall-clock window (see [`ShiftKind::window`]);
/// [`ShiftKind::Flexible`] is an intentional "no window" case, not a fallback
/// for unrecognised labels. Unknown labels are rejected when parsing.
///
/// # Example
///
/// ```
/// use shift_engine::models::ShiftKind;
///
/// let shift: ShiftKind = "night".parse().unwrap();
/// assert_eq!(shift, ShiftKind::Night);
/// assert!("graveyard".parse::<ShiftKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ShiftKind {
    /// 08:00 to 16:00.
    Morning,
    /// 16:00 to 24:00.
    Evening,
    /// 00:00 to 08:00, usually entered the evening before.
    Night,
    /// No fixed window; the session is always in progress.
    Flexible,
}

/// A nominal wall-clock window expressed in whole hours.
///
/// `end_hour` may be 24 to denote the end of the calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Hour of day the window opens (0-23).
    pub start_hour: u32,
    /// Hour of day the window closes (1-24).
    pub end_hour: u32,
}

impl ShiftWindow {
    /// Length of the window in minutes, negative if `start_hour > end_hour`.
    pub fn minutes(&self) -> i64 {
        (i64::from(self.end_hour) - i64::from(self.start_hour)) * 60
    }
}

impl ShiftKind {
    /// All shift kinds, in schedule order.
    pub const ALL: [ShiftKind; 4] = [
        ShiftKind::Morning,
        ShiftKind::Evening,
        ShiftKind::Night,
        ShiftKind::Flexible,
    ];

    /// Returns the nominal wall-clock window, or `None` for flexible shifts.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::ShiftKind;
    ///
    /// let window = ShiftKind::Morning.window().unwrap();
    /// assert_eq!((window.start_hour, window.end_hour), (8, 16));
    /// assert!(ShiftKind::Flexible.window().is_none());
    /// ```
    pub fn window(&self) -> Option<ShiftWindow> {
        let (start_hour, end_hour) = match self {
            ShiftKind::Morning => (8, 16),
            ShiftKind::Evening => (16, 24),
            ShiftKind::Night => (0, 8),
            ShiftKind::Flexible => return None,
        };
        Some(ShiftWindow {
            start_hour,
            end_hour,
        })
    }

    /// The label used in attendance records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Evening => "evening",
            ShiftKind::Night => "night",
            ShiftKind::Flexible => "flexible",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftKind {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(ShiftKind::Morning),
            "evening" => Ok(ShiftKind::Evening),
            "night" => Ok(ShiftKind::Night),
            "flexible" => Ok(ShiftKind::Flexible),
            _ => Err(EngineError::invalid_argument(
                "shift",
                format!("unknown shift '{}'", s),
            )),
        }
    }
}

impl TryFrom<String> for ShiftKind {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}
