//! Developer-facing events emitted when an error is triggered in dev mode

use crate::config::compile_time::messages;
use crate::registry::ErrorCode;
use std::collections::HashMap;
use std::time::SystemTime;

/// Core developer event structure
#[derive(Debug, Clone)]
pub struct DevEvent {
    pub timestamp: SystemTime,
    pub code: ErrorCode,
    pub message: String,
    pub context: HashMap<String, String>,
}

impl DevEvent {
    /// Create a new event for a triggered code
    pub fn new(code: ErrorCode, message: &str) -> Self {
        Self {
            timestamp: SystemTime::now(),
            code,
            message: message.to_string(),
            context: HashMap::new(),
        }
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    /// Whether the event came from one of the reserved internal definitions
    pub fn is_internal(&self) -> bool {
        self.code.is_reserved()
    }

    /// Format for display
    pub fn format(&self) -> String {
        format!(
            "{}: {} {}",
            self.code,
            self.message,
            messages::DEV_MESSAGE_SUFFIX
        )
    }

    /// Format with context lines appended
    pub fn format_detailed(&self) -> String {
        let mut output = self.format();

        if !self.context.is_empty() {
            let mut keys: Vec<&String> = self.context.keys().collect();
            keys.sort();

            output.push_str("\n  Context:");
            for key in keys {
                output.push_str(&format!("\n    {}: {}", key, self.context[key]));
            }
        }

        output
    }

    /// Format as JSON for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let timestamp = self
            .timestamp
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let mut json = serde_json::json!({
            "timestamp": timestamp,
            "code": self.code.value(),
            "message": self.message,
            "internal": self.is_internal(),
        });

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_formatting() {
        let event = DevEvent::new(ErrorCode::new(7), "disk full in Storage::flush");
        let formatted = event.format();

        assert!(formatted.starts_with("7: disk full in Storage::flush"));
        assert!(formatted.ends_with("(Error triggered by ErrorRegistry)."));
    }

    #[test]
    fn test_event_with_context() {
        let event = DevEvent::new(ErrorCode::new(3), "bad input")
            .with_context("critical", "true")
            .with_context("attempt", "2");

        assert_eq!(event.context.get("critical"), Some(&"true".to_string()));

        let detailed = event.format_detailed();
        let attempt = detailed.find("attempt: 2").unwrap();
        let critical = detailed.find("critical: true").unwrap();
        assert!(attempt < critical);
    }

    #[test]
    fn test_internal_detection() {
        assert!(DevEvent::new(ErrorCode::RESERVED_NO_CODE, "x").is_internal());
        assert!(DevEvent::new(ErrorCode::RESERVED_CODE_NOT_FOUND, "x").is_internal());
        assert!(!DevEvent::new(ErrorCode::new(2), "x").is_internal());
    }

    #[test]
    fn test_json_formatting() {
        let event = DevEvent::new(ErrorCode::new(12), "socket closed").with_context("peer", "db");

        let json = event.format_json().unwrap();
        assert!(json.contains("\"code\":12"));
        assert!(json.contains("\"message\":\"socket closed\""));
        assert!(json.contains("\"internal\":false"));
        assert!(json.contains("\"peer\":\"db\""));
    }
}
