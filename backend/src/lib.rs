//! Rental application backend library modules.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;

/// Settings loaded from CLI arguments, environment, and config files.
pub use config::RentalSettings;
