//! Infrastructure layer - Adapters for the application ports
//!
//! Provides configuration loading and the system clock adapter.

pub mod clock;
pub mod config;

pub use clock::SystemClock;
pub use config::{AppConfig, Environment, ServerConfig};
