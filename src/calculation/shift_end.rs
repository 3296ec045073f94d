//! Nominal shift end calculation.
//!
//! Shift boundaries are wall-clock times in the timezone carried by the
//! check-in instant, not a fixed duration after check-in. A night-shift
//! worker who checks in early or late is still bounded by the 08:00 cutoff.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Timelike};

use crate::models::ShiftKind;

/// Hour at which the night shift ends.
pub const NIGHT_SHIFT_END_HOUR: u32 = 8;

/// Check-in hour from which a night shift is considered to start the evening before.
pub const NIGHT_SHIFT_EVENING_START_HOUR: u32 = 18;

/// Determines the nominal end-of-shift instant for a check-in.
///
/// - Morning: 16:00:00.000 on the check-in day.
/// - Evening: 23:59:59.999 on the check-in day.
/// - Night: 08:00:00.000 on the check-in day when checked in before 08:00,
///   otherwise 08:00:00.000 on the following day.
/// - Flexible: `now`, since the shift has no fixed end.
///
/// For a night shift the result is always strictly after `check_in`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shift_engine::calculation::shift_end_time;
/// use shift_engine::models::ShiftKind;
///
/// let check_in = Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap();
/// let end = shift_end_time(&check_in, ShiftKind::Night, &check_in);
/// assert_eq!(end, Utc.with_ymd_and_hms(2026, 1, 16, 8, 0, 0).unwrap());
/// ```
pub fn shift_end_time<Tz: TimeZone>(
    check_in: &DateTime<Tz>,
    shift: ShiftKind,
    now: &DateTime<Tz>,
) -> DateTime<Tz> {
    let tz = check_in.timezone();
    let day = check_in.date_naive();

    match shift {
        ShiftKind::Morning => at_local(&tz, day, wall_clock(16, 0, 0, 0)),
        ShiftKind::Evening => at_local(&tz, day, wall_clock(23, 59, 59, 999)),
        ShiftKind::Night => {
            let end_day = if check_in.hour() < NIGHT_SHIFT_END_HOUR {
                day
            } else {
                // Evening check-in, or an atypical daytime one: project to next morning.
                day + Duration::days(1)
            };
            at_local(&tz, end_day, night_shift_end())
        }
        ShiftKind::Flexible => now.clone(),
    }
}

/// 08:00:00.000, the end of the night shift.
pub(crate) fn night_shift_end() -> NaiveTime {
    wall_clock(NIGHT_SHIFT_END_HOUR, 0, 0, 0)
}

fn wall_clock(hour: u32, min: u32, sec: u32, milli: u32) -> NaiveTime {
    NaiveTime::from_hms_milli_opt(hour, min, sec, milli).expect("Valid wall-clock time")
}

/// Resolves a local date and time in `tz`.
///
/// Ambiguous times (DST fold) resolve to the earlier instant. Times inside a
/// DST gap do not exist locally and fall back to interpreting them as UTC.
pub(crate) fn at_local<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    let naive = date.and_time(time);
    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}
