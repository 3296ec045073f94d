//! Work interval model.
//!
//! A [`WorkInterval`] is one attendance session: a check-in, an optional
//! check-out, the shift it was recorded against and the break and prayer
//! minutes already taken. Minute counts are sanitised on construction so that
//! every calculation downstream can rely on them being non-negative.

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::warn;

use crate::config::MinutePolicy;
use crate::error::{EngineError, EngineResult};

use super::ShiftKind;

/// A single attendance session.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use shift_engine::models::{ShiftKind, WorkInterval};
///
/// let check_in = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// let interval = WorkInterval::new(check_in, None, ShiftKind::Morning, -5.0, 10.0);
///
/// assert!(interval.is_open());
/// assert_eq!(interval.break_minutes(), Decimal::ZERO); // negative input clamped
/// assert_eq!(interval.deducted_minutes(), Decimal::from(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorkInterval<Tz: TimeZone> {
    check_in: DateTime<Tz>,
    check_out: Option<DateTime<Tz>>,
    shift: ShiftKind,
    break_minutes: Decimal,
    prayer_minutes: Decimal,
}

impl<Tz: TimeZone> WorkInterval<Tz> {
    /// Creates an interval, clamping negative or NaN minute counts to zero.
    ///
    /// Counts too large for a `Decimal`, including `+inf`, saturate at
    /// `Decimal::MAX` so that they still consume the whole session.
    pub fn new(
        check_in: DateTime<Tz>,
        check_out: Option<DateTime<Tz>>,
        shift: ShiftKind,
        break_minutes: f64,
        prayer_minutes: f64,
    ) -> Self {
        Self {
            check_in,
            check_out,
            shift,
            break_minutes: clamp_minutes("break_minutes", break_minutes),
            prayer_minutes: clamp_minutes("prayer_minutes", prayer_minutes),
        }
    }

    /// Creates an interval, sanitising minute counts according to `policy`.
    ///
    /// Under [`MinutePolicy::Strict`] a negative, NaN or infinite minute count
    /// is rejected with [`EngineError::InvalidArgument`]; finite counts too
    /// large for a `Decimal` saturate as in [`WorkInterval::new`].
    pub fn with_policy(
        check_in: DateTime<Tz>,
        check_out: Option<DateTime<Tz>>,
        shift: ShiftKind,
        break_minutes: f64,
        prayer_minutes: f64,
        policy: MinutePolicy,
    ) -> EngineResult<Self> {
        match policy {
            MinutePolicy::Clamp => Ok(Self::new(
                check_in,
                check_out,
                shift,
                break_minutes,
                prayer_minutes,
            )),
            MinutePolicy::Strict => Ok(Self {
                check_in,
                check_out,
                shift,
                break_minutes: strict_minutes("break_minutes", break_minutes)?,
                prayer_minutes: strict_minutes("prayer_minutes", prayer_minutes)?,
            }),
        }
    }

    /// The check-in instant.
    pub fn check_in(&self) -> &DateTime<Tz> {
        &self.check_in
    }

    /// The check-out instant, if the session has been closed.
    pub fn check_out(&self) -> Option<&DateTime<Tz>> {
        self.check_out.as_ref()
    }

    /// The shift the session was recorded against.
    pub fn shift(&self) -> ShiftKind {
        self.shift
    }

    /// Break minutes taken, never negative.
    pub fn break_minutes(&self) -> Decimal {
        self.break_minutes
    }

    /// Prayer (namaz) minutes taken, never negative.
    pub fn prayer_minutes(&self) -> Decimal {
        self.prayer_minutes
    }

    /// Total non-working minutes to subtract from the gross duration.
    ///
    /// Saturates at `Decimal::MAX`.
    pub fn deducted_minutes(&self) -> Decimal {
        self.break_minutes.saturating_add(self.prayer_minutes)
    }

    /// Whether the session is still open (no check-out yet).
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}

fn clamp_minutes(argument: &str, value: f64) -> Decimal {
    match to_decimal_minutes(value) {
        Some(minutes) => minutes,
        None => {
            warn!(argument, value, "Malformed minute count clamped to zero");
            Decimal::ZERO
        }
    }
}

fn strict_minutes(argument: &str, value: f64) -> EngineResult<Decimal> {
    if value.is_infinite() {
        return Err(EngineError::invalid_argument(
            argument,
            format!("expected a finite minute count, got {}", value),
        ));
    }
    to_decimal_minutes(value).ok_or_else(|| {
        EngineError::invalid_argument(
            argument,
            format!("expected a non-negative minute count, got {}", value),
        )
    })
}

/// Returns `None` for negative or NaN values; saturates anything too large.
fn to_decimal_minutes(value: f64) -> Option<Decimal> {
    if value.is_nan() || value < 0.0 {
        return None;
    }
    Some(Decimal::from_f64(value).unwrap_or(Decimal::MAX))
}
