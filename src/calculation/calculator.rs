//! Policy-bound calculator facade.
//!
//! [`ShiftTimeCalculator`] holds a [`ShiftPolicy`] and accepts UTC instants,
//! converting them into the business timezone before applying the shift
//! rules. It is the entry point the attendance widget calls on every refresh.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{ConfigLoader, ShiftPolicy};
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceSummary, ShiftKind, ShiftProgress, WorkInterval};

use super::shift_end::shift_end_time;
use super::shift_progress::shift_progress;
use super::worked_hours::{effective_end, worked_hours};

/// Computes shift boundaries, worked hours and progress under a policy.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use shift_engine::ShiftTimeCalculator;
/// use shift_engine::config::ShiftPolicy;
/// use shift_engine::models::ShiftKind;
///
/// let calculator = ShiftTimeCalculator::new(ShiftPolicy::default());
/// let check_in = Utc.with_ymd_and_hms(2026, 1, 15, 20, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2026, 1, 16, 12, 0, 0).unwrap();
///
/// let hours = calculator
///     .worked_hours(check_in, None, ShiftKind::Night, 0.0, 0.0, now)
///     .unwrap();
/// assert_eq!(hours, Decimal::from(12));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftTimeCalculator {
    policy: ShiftPolicy,
}

impl ShiftTimeCalculator {
    /// Creates a calculator bound to `policy`.
    pub fn new(policy: ShiftPolicy) -> Self {
        Self { policy }
    }

    /// Creates a calculator from a loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(*config.policy())
    }

    /// Returns the policy this calculator runs with.
    pub fn policy(&self) -> &ShiftPolicy {
        &self.policy
    }

    /// Converts a UTC instant into the business timezone.
    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.policy.timezone)
    }

    /// Nominal end of the shift for `check_in`. See [`shift_end_time`].
    pub fn shift_end_time(
        &self,
        check_in: DateTime<Utc>,
        shift: ShiftKind,
        now: DateTime<Utc>,
    ) -> DateTime<Tz> {
        shift_end_time(&self.local(check_in), shift, &self.local(now))
    }

    /// Builds a [`WorkInterval`] in the business timezone, applying the minute policy.
    pub fn interval(
        &self,
        check_in: DateTime<Utc>,
        check_out: Option<DateTime<Utc>>,
        shift: ShiftKind,
        break_minutes: f64,
        prayer_minutes: f64,
    ) -> EngineResult<WorkInterval<Tz>> {
        WorkInterval::with_policy(
            self.local(check_in),
            check_out.map(|out| self.local(out)),
            shift,
            break_minutes,
            prayer_minutes,
            self.policy.minute_policy,
        )
    }

    /// Net worked hours for a session. See [`worked_hours`].
    ///
    /// Fails only under a strict minute policy with malformed minute counts.
    pub fn worked_hours(
        &self,
        check_in: DateTime<Utc>,
        check_out: Option<DateTime<Utc>>,
        shift: ShiftKind,
        break_minutes: f64,
        prayer_minutes: f64,
        now: DateTime<Utc>,
    ) -> EngineResult<Decimal> {
        let interval = self.interval(check_in, check_out, shift, break_minutes, prayer_minutes)?;
        Ok(worked_hours(&interval, &self.local(now)))
    }

    /// Live night-shift progress, using the policy's progress basis. See [`shift_progress`].
    pub fn shift_progress(
        &self,
        check_in: DateTime<Utc>,
        shift: ShiftKind,
        now: DateTime<Utc>,
    ) -> Option<ShiftProgress<Tz>> {
        shift_progress(
            &self.local(check_in),
            shift,
            &self.local(now),
            self.policy.progress_basis,
        )
    }

    /// Computes everything the attendance widget shows for `record` at `now`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the record's shift label is unknown, or if
    /// the minute policy is strict and a minute count is malformed.
    pub fn summarize(
        &self,
        record: &AttendanceRecord,
        now: DateTime<Utc>,
    ) -> EngineResult<AttendanceSummary<Tz>> {
        let shift: ShiftKind = record.shift.parse()?;
        let interval = self.interval(
            record.check_in,
            record.check_out,
            shift,
            record.break_minutes.unwrap_or(0.0),
            record.namaz_minutes.unwrap_or(0.0),
        )?;
        let now = self.local(now);

        let progress = if interval.is_open() {
            shift_progress(interval.check_in(), shift, &now, self.policy.progress_basis)
        } else {
            None
        };

        let summary = AttendanceSummary {
            shift,
            is_open: interval.is_open(),
            worked_hours: worked_hours(&interval, &now),
            effective_end: effective_end(&interval, &now),
            shift_end: shift_end_time(interval.check_in(), shift, &now),
            progress,
        };

        debug!(
            shift = %summary.shift,
            is_open = summary.is_open,
            worked_hours = %summary.worked_hours,
            "Attendance summary computed"
        );

        Ok(summary)
    }
}
