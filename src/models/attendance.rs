//! Attendance record input and summary output.
//!
//! [`AttendanceRecord`] mirrors the attendance entry the dashboard fetches
//! from its backend; [`AttendanceSummary`] is everything the attendance
//! widget displays for that entry at a given instant.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ShiftKind, ShiftProgress};

/// An attendance entry as stored by the backend.
///
/// The shift is kept as its raw label so that an unknown value surfaces as
/// an `InvalidArgument` error from the calculator rather than a JSON error.
/// Missing or `null` minute counts are read as zero.
///
/// # Example
///
/// ```
/// use shift_engine::models::AttendanceRecord;
///
/// let record: AttendanceRecord = serde_json::from_str(r#"{
///     "check_in": "2026-01-15T22:00:00Z",
///     "check_out": null,
///     "shift": "night",
///     "namaz_minutes": 15
/// }"#).unwrap();
///
/// assert!(record.check_out.is_none());
/// assert_eq!(record.break_minutes, None);
/// assert_eq!(record.namaz_minutes, Some(15.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// When the employee checked in.
    #[serde(alias = "checkIn")]
    pub check_in: DateTime<Utc>,
    /// When the employee checked out, absent while the session is open.
    #[serde(default, alias = "checkOut")]
    pub check_out: Option<DateTime<Utc>>,
    /// The shift label (`morning`, `evening`, `night` or `flexible`).
    pub shift: String,
    /// Accumulated break minutes.
    #[serde(default, alias = "breakMinutes")]
    pub break_minutes: Option<f64>,
    /// Accumulated prayer minutes.
    #[serde(default, alias = "namazMinutes")]
    pub namaz_minutes: Option<f64>,
}

/// The computed view of one attendance session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "DateTime<Tz>: Serialize"))]
pub struct AttendanceSummary<Tz: TimeZone> {
    /// The parsed shift.
    pub shift: ShiftKind,
    /// Whether the session is still open.
    pub is_open: bool,
    /// Net worked hours.
    pub worked_hours: Decimal,
    /// The instant the worked-hours total runs up to.
    pub effective_end: DateTime<Tz>,
    /// The nominal end of the shift.
    pub shift_end: DateTime<Tz>,
    /// Live progress, present only for open night-shift sessions.
    pub progress: Option<ShiftProgress<Tz>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_closed_record() {
        let json = r#"{
            "check_in": "2026-01-15T09:00:00Z",
            "check_out": "2026-01-15T17:30:00Z",
            "shift": "morning",
            "break_minutes": 30,
            "namaz_minutes": 0
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.shift, "morning");
        assert!(record.check_out.is_some());
        assert_eq!(record.break_minutes, Some(30.0));
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "checkIn": "2026-01-15T22:00:00Z",
            "shift": "night",
            "breakMinutes": 10,
            "namazMinutes": null
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.check_out.is_none());
        assert_eq!(record.break_minutes, Some(10.0));
        assert_eq!(record.namaz_minutes, None);
    }

    #[test]
    fn test_deserialize_missing_check_in_fails() {
        let json = r#"{ "shift": "night" }"#;
        let result = serde_json::from_str::<AttendanceRecord>(json);
        assert!(result.unwrap_err().to_string().contains("check_in"));
    }
}
