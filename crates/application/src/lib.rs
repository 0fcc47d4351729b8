//! Application layer - Use cases and orchestration
//!
//! Composes the domain validator and calculator with the clock port.
//! Adapters in the infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::ClockPort;
pub use services::AgeService;
