//! Core data models for the Shift Time Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod shift;
mod shift_progress;
mod work_interval;

pub use attendance::{AttendanceRecord, AttendanceSummary};
pub use shift::{ShiftKind, ShiftWindow};
pub use shift_progress::ShiftProgress;
pub use work_interval::WorkInterval;
