//!
//! Logger of the order connector.
//!

pub mod config;
pub mod setup;
mod types;

pub use setup::{setup, TelemetryGuard};
pub use tracing::{debug, error, event, info, instrument, warn};

pub use self::types::*;
