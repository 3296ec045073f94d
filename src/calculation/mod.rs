//! Calculation logic for the Shift Time Engine.
//!
//! This module contains the pure shift arithmetic: the nominal end of a shift
//! (including night shifts that cross midnight), net worked hours for closed
//! and open sessions, and live progress for open night shifts. The functions
//! are generic over [`chrono::TimeZone`]; [`ShiftTimeCalculator`] binds them to
//! a configured business timezone.

mod calculator;
mod shift_end;
mod shift_progress;
mod worked_hours;

pub use calculator::ShiftTimeCalculator;
pub use shift_end::{NIGHT_SHIFT_END_HOUR, NIGHT_SHIFT_EVENING_START_HOUR, shift_end_time};
pub use shift_progress::{NIGHT_SHIFT_MINUTES, shift_progress};
pub use worked_hours::{effective_end, worked_hours};
