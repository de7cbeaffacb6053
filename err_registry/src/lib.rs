// Internal modules
pub mod config;
pub mod global;
pub mod logging;
#[macro_use]
pub mod macros;
pub mod notify;
pub mod registry;

// Re-export key types for library consumers
pub use config::{ConfigError, RegistryPreferences};
pub use global::GlobalError;
pub use logging::{DevEvent, DevLog};
pub use notify::{Notification, Notifier};
pub use registry::{
    ErrorCode, ErrorDefinition, ErrorRegistry, MissPolicy, RegistryBuilder, RegistryError,
};
