//! Startup and shutdown: configuration, tracing, and the [`AppSystem`] that wires
//! store actors to controllers.

pub mod app_system;
pub mod config;
pub mod tracing;

pub use app_system::AppSystem;
pub use config::{AppConfig, ConfigError, CONFIG_ENV};
pub use self::tracing::setup_tracing;
