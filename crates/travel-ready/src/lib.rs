pub mod config;
pub mod error;
pub mod history;
pub mod patterns;
pub mod readiness;
pub mod telemetry;
