//! Shift Time Engine
//!
//! This crate computes shift boundaries, net worked hours and live night-shift
//! progress for attendance sessions. All wall-clock rules are evaluated in an
//! explicitly supplied timezone and against an explicitly supplied `now`.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::ShiftTimeCalculator;
