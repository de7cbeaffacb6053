//! User notification collaborator
//!
//! The registry never talks to a presentation toolkit directly. Critical
//! errors outside dev mode are handed to a [`Notifier`], which may show a
//! dialog, print to a console or forward to any other channel.

pub mod sinks;

#[cfg(feature = "logging")]
pub use sinks::LogNotifier;
pub use sinks::{ConsoleNotifier, MemoryNotifier, SilentNotifier};

use serde::{Deserialize, Serialize};

/// Capability used to surface a user-facing error
pub trait Notifier: Send + Sync {
    fn notify_user(&self, title: &str, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn notify_user(&self, title: &str, message: &str) {
        self(title, message)
    }
}

/// A single notification as seen by a recording notifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}
