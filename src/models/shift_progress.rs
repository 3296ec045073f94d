//! Live night-shift progress.

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;
use serde::Serialize;

/// Progress of an open night-shift session toward its nominal end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "DateTime<Tz>: Serialize"))]
pub struct ShiftProgress<Tz: TimeZone> {
    /// Percentage of the shift completed, clamped to `[0, 100]`.
    pub progress_percent: Decimal,
    /// Minutes left until the shift is complete, never negative.
    pub minutes_remaining: Decimal,
    /// The nominal end of the shift.
    pub shift_end: DateTime<Tz>,
}
