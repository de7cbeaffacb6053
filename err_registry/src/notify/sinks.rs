//! Stock notifier implementations

use super::{Notification, Notifier};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Prints a framed message on stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    pub fn render(title: &str, message: &str) -> String {
        let width = message
            .lines()
            .chain(std::iter::once(title))
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let rule = "=".repeat(width);

        let mut output = format!("{}\n{}\n{}", rule, title, rule);
        for line in message.lines() {
            output.push('\n');
            output.push_str(line);
        }
        output.push('\n');
        output.push_str(&rule);
        output
    }
}

impl Notifier for ConsoleNotifier {
    fn notify_user(&self, title: &str, message: &str) {
        eprintln!("{}", Self::render(title, message));
    }
}

/// Discards every notification
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify_user(&self, _title: &str, _message: &str) {}
}

/// Routes notifications into the `log` facade at error level
#[cfg(feature = "logging")]
#[derive(Debug, Default)]
pub struct LogNotifier;

#[cfg(feature = "logging")]
impl Notifier for LogNotifier {
    fn notify_user(&self, title: &str, message: &str) {
        log::error!(target: "err_registry::user", "{}: {}", title, message.replace('\n', " | "));
    }
}

/// Memory notifier for testing
pub struct MemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn notification_count(&self) -> usize {
        self.lock().len()
    }

    pub fn last(&self) -> Option<Notification> {
        self.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for MemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for MemoryNotifier {
    fn notify_user(&self, title: &str, message: &str) {
        self.lock().push(Notification::new(title, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_console_render() {
        let rendered = ConsoleNotifier::render("Error", "first line\n2: longer second line");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "=".repeat("2: longer second line".len()));
        assert_eq!(lines[1], "Error");
        assert_eq!(lines[3], "first line");
        assert_eq!(lines[5], lines[0]);
    }

    #[test]
    fn test_console_notifier() {
        // Should not panic
        ConsoleNotifier::new().notify_user("Error", "something happened");
    }

    #[test]
    fn test_silent_notifier() {
        SilentNotifier.notify_user("Error", "dropped");
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_log_notifier() {
        // No logger installed: the facade discards the record.
        LogNotifier.notify_user("Error", "line one\nline two");
    }

    #[test]
    fn test_memory_notifier() {
        let notifier = MemoryNotifier::new();
        notifier.notify_user("Error", "one");
        notifier.notify_user("Error", "two");

        assert_eq!(notifier.notification_count(), 2);
        assert_eq!(notifier.last(), Some(Notification::new("Error", "two")));

        notifier.clear();
        assert_eq!(notifier.notification_count(), 0);
        assert!(notifier.last().is_none());
    }

    #[test]
    fn test_closure_notifier() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let notifier = {
            let seen = seen.clone();
            move |title: &str, message: &str| {
                seen.lock().unwrap().push(format!("{}|{}", title, message))
            }
        };

        notifier.notify_user("Error", "closure");
        assert_eq!(*seen.lock().unwrap(), vec!["Error|closure".to_string()]);
    }
}
