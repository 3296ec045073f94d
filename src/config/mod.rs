//! Configuration loading and management for the Shift Time Engine.
//!
//! This module loads the shift policy (business timezone, handling of
//! malformed minute counts, and the night-shift progress basis) from YAML.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Timezone: {}", config.policy().timezone);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MinutePolicy, PolicyFile, ProgressBasis, ShiftPolicy};
