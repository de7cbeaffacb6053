//! Developer logging for triggered errors
//!
//! While the registry is in dev mode every trigger is turned into a
//! [`DevEvent`] and handed to a [`DevLog`] sink instead of the user.

pub mod events;
pub mod service;

// Re-export main types
pub use events::DevEvent;
#[cfg(feature = "logging")]
pub use service::LogFacadeDevLog;
pub use service::{
    create_configured_dev_log, ConsoleDevLog, DevLog, MemoryDevLog, MultiDevLog, StructuredDevLog,
};
