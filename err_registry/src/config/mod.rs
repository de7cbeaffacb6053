//! Configuration module for the error registry
//!
//! Compile-time constants live in [`constants`]; runtime preferences are
//! loaded from the environment or a TOML document in [`runtime`].

pub mod constants;
pub mod error;
pub mod runtime;

pub use constants::compile_time;
pub use error::{ConfigError, ConfigResult};
pub use runtime::{env_vars, MissPolicy, RegistryPreferences};
