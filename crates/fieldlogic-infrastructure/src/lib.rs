//! # Infrastructure Layer
//!
//! Cross-cutting concerns shared by the library and the command-line tool:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: `tracing` subscriber setup
//! - [`error_ext`]: context helpers mapping foreign errors into the domain
//!   error type

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
