//! Error codes and the definitions they identify

use crate::config::compile_time::codes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle returned by registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Sentinel for "registration produced no code"
    pub const NONE: ErrorCode = ErrorCode(codes::NO_CODE);

    /// Reserved definition reporting a collision with a reserved code
    pub const RESERVED_NO_CODE: ErrorCode = ErrorCode(codes::RESERVED_NO_CODE);

    /// Reserved definition reporting a trigger of an unknown code
    pub const RESERVED_CODE_NOT_FOUND: ErrorCode = ErrorCode(codes::RESERVED_CODE_NOT_FOUND);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_reserved(self) -> bool {
        self == Self::RESERVED_NO_CODE || self == Self::RESERVED_CODE_NOT_FOUND
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// A registered error. Immutable once stored; callers only see clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDefinition {
    code: ErrorCode,
    dev_message: String,
    user_message: String,
    critical: bool,
}

impl ErrorDefinition {
    pub(crate) fn new(code: ErrorCode, dev_message: &str, user_message: &str, critical: bool) -> Self {
        Self {
            code,
            dev_message: dev_message.to_string(),
            user_message: user_message.to_string(),
            critical,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message for developers (may name types, modules, line numbers)
    pub fn dev_message(&self) -> &str {
        &self.dev_message
    }

    /// Message for end users, in plain language
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// Whether triggering outside dev mode should notify the user
    pub fn is_critical(&self) -> bool {
        self.critical
    }
}

impl fmt::Display for ErrorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (user: {:?}, critical: {})",
            self.code, self.dev_message, self.user_message, self.critical
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_codes() {
        assert_eq!(ErrorCode::RESERVED_NO_CODE.value(), 0);
        assert_eq!(ErrorCode::RESERVED_CODE_NOT_FOUND.value(), 1);
        assert!(ErrorCode::RESERVED_NO_CODE.is_reserved());
        assert!(ErrorCode::RESERVED_CODE_NOT_FOUND.is_reserved());
        assert!(!ErrorCode::new(2).is_reserved());
        assert!(!ErrorCode::NONE.is_reserved());
    }

    #[test]
    fn test_none_sentinel() {
        assert!(ErrorCode::NONE.is_none());
        assert_eq!(i32::from(ErrorCode::NONE), -1);
        assert!(!ErrorCode::new(0).is_none());
    }

    #[test]
    fn test_definition_display() {
        let definition = ErrorDefinition::new(ErrorCode::new(4), "disk full", "Your disk is full", true);
        assert_eq!(
            definition.to_string(),
            "4: disk full (user: \"Your disk is full\", critical: true)"
        );
    }

    #[test]
    fn test_definition_serializes_code_as_integer() {
        let definition = ErrorDefinition::new(ErrorCode::new(9), "dev", "user", false);
        let json = serde_json::to_string(&definition).unwrap();
        assert!(json.contains("\"code\":9"));
        assert!(json.contains("\"critical\":false"));
    }
}
