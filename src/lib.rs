pub mod config;
pub mod error;
pub mod suggestions;
pub mod telemetry;
