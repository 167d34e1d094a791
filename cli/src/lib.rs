//! Weight Predictor command-line library
//!
//! Loads scenarios, runs the engine and renders reports. Exposed as a
//! library so the integration tests can drive it without spawning the binary.

pub mod config;
pub mod error;
pub mod report;
pub mod scenario;
