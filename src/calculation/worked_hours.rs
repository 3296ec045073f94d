//! Net worked hours calculation.
//!
//! This module computes worked hours for closed and open attendance sessions.
//! For an open session the running total is capped at the nominal shift
//! boundary so that a forgotten check-out does not keep inflating the total.

use chrono::{DateTime, TimeZone, Timelike};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{ShiftKind, WorkInterval};

use super::shift_end::{
    NIGHT_SHIFT_END_HOUR, NIGHT_SHIFT_EVENING_START_HOUR, at_local, night_shift_end,
    shift_end_time,
};

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Returns the instant the worked-hours total runs up to.
///
/// - Closed session: the check-out instant.
/// - Open night shift: `now`, unless it is between 08:00 and 18:00 and the
///   check-in was at or after 18:00, in which case the clock is frozen at
///   08:00 on `now`'s day.
/// - Open morning or evening shift: the earlier of `now` and the shift end.
/// - Open flexible shift: `now`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shift_engine::calculation::effective_end;
/// use shift_engine::models::{ShiftKind, WorkInterval};
///
/// let check_in = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2026, 1, 15, 19, 0, 0).unwrap();
/// let interval = WorkInterval::new(check_in, None, ShiftKind::Morning, 0.0, 0.0);
///
/// // Morning shift is capped at 16:00.
/// assert_eq!(
///     effective_end(&interval, &now),
///     Utc.with_ymd_and_hms(2026, 1, 15, 16, 0, 0).unwrap()
/// );
/// ```
pub fn effective_end<Tz: TimeZone>(interval: &WorkInterval<Tz>, now: &DateTime<Tz>) -> DateTime<Tz> {
    if let Some(check_out) = interval.check_out() {
        return check_out.clone();
    }

    let check_in = interval.check_in();
    match interval.shift() {
        ShiftKind::Night => {
            let daytime = (NIGHT_SHIFT_END_HOUR..NIGHT_SHIFT_EVENING_START_HOUR).contains(&now.hour());
            if daytime && check_in.hour() >= NIGHT_SHIFT_EVENING_START_HOUR {
                let frozen = at_local(&now.timezone(), now.date_naive(), night_shift_end());
                debug!(
                    check_in = %check_in.naive_local(),
                    frozen_at = %frozen.naive_local(),
                    "Open night shift past its end, freezing worked-hours clock"
                );
                frozen
            } else {
                now.clone()
            }
        }
        ShiftKind::Flexible => now.clone(),
        shift @ (ShiftKind::Morning | ShiftKind::Evening) => {
            let shift_end = shift_end_time(check_in, shift, now);
            if *now <= shift_end {
                now.clone()
            } else {
                debug!(
                    shift = %shift,
                    shift_end = %shift_end.naive_local(),
                    "Open session past shift end, capping worked-hours clock"
                );
                shift_end
            }
        }
    }
}

/// Calculates net worked hours for a session.
///
/// Net minutes are the span from check-in to the [`effective_end`] minus
/// break and prayer minutes, floored at zero. The result is never negative.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use shift_engine::calculation::worked_hours;
/// use shift_engine::models::{ShiftKind, WorkInterval};
///
/// let check_in = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// let check_out = Utc.with_ymd_and_hms(2026, 1, 15, 17, 30, 0).unwrap();
/// let interval = WorkInterval::new(check_in, Some(check_out), ShiftKind::Morning, 30.0, 0.0);
///
/// assert_eq!(worked_hours(&interval, &check_out), Decimal::from(8));
/// ```
pub fn worked_hours<Tz: TimeZone>(interval: &WorkInterval<Tz>, now: &DateTime<Tz>) -> Decimal {
    let end = effective_end(interval, now);
    net_hours(interval, &end)
}

/// Net hours from check-in to `end`, less deductions, floored at zero.
///
/// A deduction too large to express in milliseconds exceeds any real span,
/// so overflow yields zero.
fn net_hours<Tz: TimeZone>(interval: &WorkInterval<Tz>, end: &DateTime<Tz>) -> Decimal {
    let gross_millis = Decimal::from(
        end.clone()
            .signed_duration_since(interval.check_in().clone())
            .num_milliseconds(),
    );
    let net_millis = interval
        .deducted_minutes()
        .checked_mul(Decimal::from(MILLIS_PER_MINUTE))
        .and_then(|deducted_millis| gross_millis.checked_sub(deducted_millis))
        .map_or(Decimal::ZERO, |net| net.max(Decimal::ZERO));
    net_millis / Decimal::from(MILLIS_PER_HOUR)
}

/// Whole and fractional minutes between two instants (negative if `to` precedes `from`).
pub(crate) fn minutes_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> Decimal {
    let millis = to.clone().signed_duration_since(from.clone()).num_milliseconds();
    Decimal::from(millis) / Decimal::from(MILLIS_PER_MINUTE)
}
