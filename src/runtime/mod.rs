//! Runtime orchestration, configuration and observability.
//!
//! - [`ComandaSystem`] - Starts the desk actor and shuts it down cleanly
//! - [`ComandaConfig`] - Ticket numbering and payment rules
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod comanda_system;
pub mod config;
pub mod tracing;

pub use comanda_system::*;
pub use config::*;
pub use self::tracing::*;
