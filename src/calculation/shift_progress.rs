//! Live progress for open night-shift sessions.

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;

use crate::config::ProgressBasis;
use crate::models::{ShiftKind, ShiftProgress};

use super::shift_end::shift_end_time;
use super::worked_hours::minutes_between;

/// Nominal length of a night shift in minutes.
pub const NIGHT_SHIFT_MINUTES: i64 = 480;

/// Computes progress toward the end of an open night shift.
///
/// Returns `None` for every shift other than [`ShiftKind::Night`]. The caller
/// only invokes this for sessions without a check-out.
///
/// With [`ProgressBasis::FixedShiftLength`] the denominator is always
/// [`NIGHT_SHIFT_MINUTES`]; with [`ProgressBasis::ShiftWindow`] it is the span
/// from check-in to the computed shift end.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use shift_engine::calculation::shift_progress;
/// use shift_engine::config::ProgressBasis;
/// use shift_engine::models::ShiftKind;
///
/// let check_in = Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2026, 1, 15, 23, 0, 0).unwrap();
///
/// let progress = shift_progress(&check_in, ShiftKind::Night, &now, ProgressBasis::FixedShiftLength)
///     .unwrap();
/// assert_eq!(progress.progress_percent, Decimal::new(125, 1)); // 12.5%
/// assert_eq!(progress.minutes_remaining, Decimal::from(420));
/// ```
pub fn shift_progress<Tz: TimeZone>(
    check_in: &DateTime<Tz>,
    shift: ShiftKind,
    now: &DateTime<Tz>,
    basis: ProgressBasis,
) -> Option<ShiftProgress<Tz>> {
    if shift != ShiftKind::Night {
        return None;
    }

    let shift_end = shift_end_time(check_in, shift, now);
    let total_minutes = match basis {
        ProgressBasis::FixedShiftLength => Decimal::from(NIGHT_SHIFT_MINUTES),
        ProgressBasis::ShiftWindow => minutes_between(check_in, &shift_end),
    };
    let worked_minutes = minutes_between(check_in, now);

    let hundred = Decimal::ONE_HUNDRED;
    let progress_percent = if total_minutes > Decimal::ZERO {
        (worked_minutes / total_minutes * hundred).clamp(Decimal::ZERO, hundred)
    } else {
        hundred
    };
    let minutes_remaining = (total_minutes - worked_minutes).max(Decimal::ZERO);

    Some(ShiftProgress {
        progress_percent,
        minutes_remaining,
        shift_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, day, hour, min, 0).unwrap()
    }

    fn fixed(check_in: DateTime<Utc>, now: DateTime<Utc>) -> ShiftProgress<Utc> {
        shift_progress(&check_in, ShiftKind::Night, &now, ProgressBasis::FixedShiftLength)
            .unwrap()
    }

    #[test]
    fn test_non_night_shifts_have_no_progress() {
        let check_in = utc(15, 9, 0);
        let now = utc(15, 10, 0);
        for shift in [ShiftKind::Morning, ShiftKind::Evening, ShiftKind::Flexible] {
            assert!(
                shift_progress(&check_in, shift, &now, ProgressBasis::FixedShiftLength).is_none()
            );
            assert!(shift_progress(&check_in, shift, &now, ProgressBasis::ShiftWindow).is_none());
        }
    }

    #[test]
    fn test_one_hour_into_evening_check_in() {
        let progress = fixed(utc(15, 22, 0), utc(15, 23, 0));
        assert_eq!(progress.progress_percent, Decimal::new(125, 1));
        assert_eq!(progress.minutes_remaining, Decimal::from(420));
        assert_eq!(progress.shift_end, utc(16, 8, 0));
    }

    #[test]
    fn test_progress_clamps_at_100_far_past_end() {
        let progress = fixed(utc(15, 22, 0), utc(17, 12, 0));
        assert_eq!(progress.progress_percent, Decimal::ONE_HUNDRED);
        assert_eq!(progress.minutes_remaining, Decimal::ZERO);
    }

    #[test]
    fn test_progress_clamps_at_0_before_check_in() {
        let progress = fixed(utc(15, 22, 0), utc(15, 21, 0));
        assert_eq!(progress.progress_percent, Decimal::ZERO);
        assert_eq!(progress.minutes_remaining, Decimal::from(540));
    }

    #[test]
    fn test_progress_at_check_in_is_zero() {
        let progress = fixed(utc(15, 22, 0), utc(15, 22, 0));
        assert_eq!(progress.progress_percent, Decimal::ZERO);
        assert_eq!(progress.minutes_remaining, Decimal::from(NIGHT_SHIFT_MINUTES));
    }

    #[test]
    fn test_after_midnight_check_in_ends_same_morning() {
        let progress = fixed(utc(16, 2, 0), utc(16, 6, 0));
        assert_eq!(progress.progress_percent, Decimal::from(50));
        assert_eq!(progress.minutes_remaining, Decimal::from(240));
        assert_eq!(progress.shift_end, utc(16, 8, 0));
    }

    #[test]
    fn test_shift_window_basis_uses_actual_window() {
        // 22:00 to 08:00 is a 600 minute window.
        let progress = shift_progress(
            &utc(15, 22, 0),
            ShiftKind::Night,
            &utc(15, 23, 0),
            ProgressBasis::ShiftWindow,
        )
        .unwrap();
        assert_eq!(progress.progress_percent, Decimal::from(10));
        assert_eq!(progress.minutes_remaining, Decimal::from(540));
    }

    #[test]
    fn test_shift_window_basis_for_daytime_check_in() {
        // 12:00 check-in projects to 08:00 next day: a 1200 minute window.
        let progress = shift_progress(
            &utc(15, 12, 0),
            ShiftKind::Night,
            &utc(15, 18, 0),
            ProgressBasis::ShiftWindow,
        )
        .unwrap();
        assert_eq!(progress.progress_percent, Decimal::from(30));
        assert_eq!(progress.minutes_remaining, Decimal::from(840));

        // The fixed basis reports the same session as 75% done.
        let fixed = fixed(utc(15, 12, 0), utc(15, 18, 0));
        assert_eq!(fixed.progress_percent, Decimal::from(75));
    }
}
