//! Developer log collaborator and its stock implementations

use super::events::DevEvent;
use crate::config::RegistryPreferences;
use crate::registry::ErrorCode;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Developer-facing sink used while the registry is in dev mode
pub trait DevLog: Send + Sync {
    fn log_dev(&self, event: &DevEvent);
}

impl<F> DevLog for F
where
    F: Fn(&DevEvent) + Send + Sync,
{
    fn log_dev(&self, event: &DevEvent) {
        self(event)
    }
}

/// Plain text developer log on stderr
#[derive(Debug, Default)]
pub struct ConsoleDevLog;

impl ConsoleDevLog {
    pub fn new() -> Self {
        Self
    }
}

impl DevLog for ConsoleDevLog {
    fn log_dev(&self, event: &DevEvent) {
        eprintln!("{}", event.format());
    }
}

/// Structured logger for JSON output and better tooling integration
#[derive(Debug, Default)]
pub struct StructuredDevLog;

impl StructuredDevLog {
    pub fn new() -> Self {
        Self
    }
}

impl DevLog for StructuredDevLog {
    fn log_dev(&self, event: &DevEvent) {
        match event.format_json() {
            Ok(json) => eprintln!("{}", json),
            // Fallback to regular format if JSON serialization fails
            Err(_) => eprintln!("{}", event.format()),
        }
    }
}

/// Bridges developer events into the `log` facade
#[cfg(feature = "logging")]
#[derive(Debug)]
pub struct LogFacadeDevLog {
    target: &'static str,
}

#[cfg(feature = "logging")]
impl LogFacadeDevLog {
    pub fn new() -> Self {
        Self {
            target: "err_registry",
        }
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }
}

#[cfg(feature = "logging")]
impl Default for LogFacadeDevLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "logging")]
impl DevLog for LogFacadeDevLog {
    fn log_dev(&self, event: &DevEvent) {
        if event.is_internal() {
            log::warn!(target: self.target, "{}", event.format());
        } else {
            log::error!(target: self.target, "{}", event.format());
        }
    }
}

/// Memory logger for testing
pub struct MemoryDevLog {
    events: Mutex<Vec<DevEvent>>,
}

impl MemoryDevLog {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DevEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_events(&self) -> Vec<DevEvent> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn event_count(&self) -> usize {
        self.lock().len()
    }

    pub fn get_events_with_code(&self, code: ErrorCode) -> Vec<DevEvent> {
        self.lock()
            .iter()
            .filter(|e| e.code == code)
            .cloned()
            .collect()
    }

    pub fn has_event_with_code(&self, code: ErrorCode) -> bool {
        self.lock().iter().any(|e| e.code == code)
    }

    /// Rendered lines, in the order they were logged
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(DevEvent::format).collect()
    }
}

impl Default for MemoryDevLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DevLog for MemoryDevLog {
    fn log_dev(&self, event: &DevEvent) {
        self.lock().push(event.clone());
    }
}

/// Multi-target logger that can log to multiple destinations
#[derive(Default)]
pub struct MultiDevLog {
    sinks: Vec<Arc<dyn DevLog>>,
}

impl MultiDevLog {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add_sink(&mut self, sink: Arc<dyn DevLog>) {
        self.sinks.push(sink);
    }

    pub fn with_console(mut self) -> Self {
        self.add_sink(Arc::new(ConsoleDevLog::new()));
        self
    }

    pub fn with_structured_console(mut self) -> Self {
        self.add_sink(Arc::new(StructuredDevLog::new()));
        self
    }

    pub fn with_memory(mut self) -> (Self, Arc<MemoryDevLog>) {
        let memory = Arc::new(MemoryDevLog::new());
        self.add_sink(memory.clone());
        (self, memory)
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl DevLog for MultiDevLog {
    fn log_dev(&self, event: &DevEvent) {
        for sink in &self.sinks {
            sink.log_dev(event);
        }
    }
}

// ============================================================================
// CONFIGURATION-AWARE FACTORY FUNCTIONS
// ============================================================================

/// Create the stderr developer log matching the preferences
pub fn create_configured_dev_log(preferences: &RegistryPreferences) -> Arc<dyn DevLog> {
    if preferences.structured_dev_log {
        Arc::new(StructuredDevLog::new())
    } else {
        Arc::new(ConsoleDevLog::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_dev_log() {
        let log = ConsoleDevLog::new();
        // Should not panic
        log.log_dev(&DevEvent::new(ErrorCode::new(4), "Test message"));
    }

    #[test]
    fn test_structured_dev_log() {
        let log = StructuredDevLog::new();
        log.log_dev(&DevEvent::new(ErrorCode::new(4), "Test message").with_context("k", "v"));
    }

    #[test]
    fn test_memory_dev_log() {
        let log = MemoryDevLog::new();

        log.log_dev(&DevEvent::new(ErrorCode::new(2), "first"));
        log.log_dev(&DevEvent::new(ErrorCode::new(3), "second"));
        log.log_dev(&DevEvent::new(ErrorCode::new(2), "third"));

        assert_eq!(log.event_count(), 3);
        assert!(log.has_event_with_code(ErrorCode::new(3)));
        assert!(!log.has_event_with_code(ErrorCode::new(9)));
        assert_eq!(log.get_events_with_code(ErrorCode::new(2)).len(), 2);
        assert!(log.lines()[1].starts_with("3: second"));

        log.clear();
        assert_eq!(log.event_count(), 0);
    }

    #[test]
    fn test_multi_dev_log() {
        let multi = MultiDevLog::new();
        let (multi, first) = multi.with_memory();
        let (multi, second) = multi.with_memory();
        let multi = multi.with_console().with_structured_console();

        assert_eq!(multi.len(), 4);
        assert!(!multi.is_empty());
        multi.log_dev(&DevEvent::new(ErrorCode::new(5), "fan out"));

        assert_eq!(first.event_count(), 1);
        assert_eq!(second.event_count(), 1);
    }

    #[test]
    fn test_closure_dev_log() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = seen.clone();
            move |event: &DevEvent| seen.lock().unwrap().push(event.code)
        };

        sink.log_dev(&DevEvent::new(ErrorCode::new(8), "closure"));
        assert_eq!(*seen.lock().unwrap(), vec![ErrorCode::new(8)]);
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_log_facade_dev_log() {
        LogFacadeDevLog::new().log_dev(&DevEvent::new(ErrorCode::new(2), "facade"));
        LogFacadeDevLog::with_target("custom")
            .log_dev(&DevEvent::new(ErrorCode::RESERVED_NO_CODE, "internal"));
    }

    #[test]
    fn test_configured_dev_log() {
        let mut prefs = RegistryPreferences::builtin();
        prefs.structured_dev_log = true;

        let log = create_configured_dev_log(&prefs);
        log.log_dev(&DevEvent::new(ErrorCode::new(2), "structured"));
    }
}
