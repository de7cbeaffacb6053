//! The error registry
//!
//! Callers register error definitions and receive an [`ErrorCode`]. Triggering
//! a code later either writes the developer message to a [`DevLog`] (dev mode)
//! or shows the user message through a [`Notifier`] (critical errors only).
//!
//! Codes 0 and 1 are reserved for the registry's own failures and are
//! pre-registered at construction. Registration never panics or returns an
//! error: a failure is reported by triggering the matching reserved
//! definition, and the caller receives [`ErrorCode::NONE`].

pub mod builder;
pub mod definition;
pub mod error;
pub mod report;

pub use crate::config::MissPolicy;
pub use builder::RegistryBuilder;
pub use definition::{ErrorCode, ErrorDefinition};
pub use error::{RegistryError, RegistryResult};

use crate::config::compile_time::messages;
use crate::config::{ConfigResult, RegistryPreferences};
use crate::logging::{DevEvent, DevLog};
use crate::notify::Notifier;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What a trigger resolved to, computed under the lock and executed after it
enum Dispatch {
    Developer(DevEvent),
    User(String),
    Nothing,
}

struct RegistryState {
    // Ordered by code; codes only increase, so this is registration order.
    definitions: BTreeMap<ErrorCode, ErrorDefinition>,
    // None once the i32 code space is used up
    next_code: Option<i32>,
    dev_mode: bool,
    user_pre_text: String,
    user_post_text: String,
    miss_policy: MissPolicy,
}

impl RegistryState {
    fn new(preferences: &RegistryPreferences) -> Self {
        let mut definitions = BTreeMap::new();
        for (code, dev_message) in [
            (ErrorCode::RESERVED_NO_CODE, messages::RESERVED_NO_CODE_DEV),
            (
                ErrorCode::RESERVED_CODE_NOT_FOUND,
                messages::RESERVED_CODE_NOT_FOUND_DEV,
            ),
        ] {
            definitions.insert(
                code,
                ErrorDefinition::new(code, dev_message, messages::RESERVED_USER_MESSAGE, false),
            );
        }

        Self {
            definitions,
            next_code: Some(preferences.first_code),
            dev_mode: preferences.dev_mode,
            user_pre_text: preferences.user_pre_text.clone(),
            user_post_text: preferences.user_post_text.clone(),
            miss_policy: preferences.miss_policy,
        }
    }

    fn format_user_message(&self, definition: &ErrorDefinition) -> String {
        format!(
            "{}\n{}: {}\n{}",
            self.user_pre_text,
            definition.code(),
            definition.user_message(),
            self.user_post_text
        )
    }

    fn plan(&self, code: ErrorCode) -> RegistryResult<Dispatch> {
        let definition = self
            .definitions
            .get(&code)
            .ok_or(RegistryError::UnknownCode { code })?;

        let dispatch = if self.dev_mode {
            Dispatch::Developer(
                DevEvent::new(code, definition.dev_message())
                    .with_context("critical", &definition.is_critical().to_string()),
            )
        } else if definition.is_critical() {
            Dispatch::User(self.format_user_message(definition))
        } else {
            Dispatch::Nothing
        };

        Ok(dispatch)
    }
}

/// Thread-safe table of error definitions plus trigger configuration
pub struct ErrorRegistry {
    state: Mutex<RegistryState>,
    notifier: Arc<dyn Notifier>,
    dev_log: Arc<dyn DevLog>,
}

impl ErrorRegistry {
    /// Create a registry with built-in defaults (first code 2, dev mode off)
    pub fn new(notifier: Arc<dyn Notifier>, dev_log: Arc<dyn DevLog>) -> Self {
        Self::from_parts(&RegistryPreferences::builtin(), notifier, dev_log)
    }

    /// Create a registry from validated preferences
    pub fn with_preferences(
        preferences: &RegistryPreferences,
        notifier: Arc<dyn Notifier>,
        dev_log: Arc<dyn DevLog>,
    ) -> ConfigResult<Self> {
        preferences.validate()?;
        Ok(Self::from_parts(preferences, notifier, dev_log))
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(
        preferences: &RegistryPreferences,
        notifier: Arc<dyn Notifier>,
        dev_log: Arc<dyn DevLog>,
    ) -> Self {
        Self {
            state: Mutex::new(RegistryState::new(preferences)),
            notifier,
            dev_log,
        }
    }

    // Every mutation is a single insert or field store, so a poisoned
    // state is still consistent.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    /// Register a definition and return its code.
    ///
    /// Returns [`ErrorCode::NONE`] if the allocation counter sits on a
    /// reserved code or the code space is exhausted; the failure is reported
    /// by triggering [`ErrorCode::RESERVED_NO_CODE`].
    pub fn register(&self, dev_message: &str, user_message: &str, critical: bool) -> ErrorCode {
        match self.try_register(dev_message, user_message, critical) {
            Ok(code) => code,
            Err(err) => {
                self.trigger(err.reserved_code());
                ErrorCode::NONE
            }
        }
    }

    /// Register a critical definition with separate developer and user messages
    pub fn register_pair(&self, dev_message: &str, user_message: &str) -> ErrorCode {
        self.register(dev_message, user_message, true)
    }

    /// Register `message` as both developer and user message, critical
    pub fn register_message(&self, message: &str) -> ErrorCode {
        self.register(message, message, true)
    }

    /// Register `message` as both developer and user message
    pub fn register_message_with(&self, message: &str, critical: bool) -> ErrorCode {
        self.register(message, message, critical)
    }

    /// Fallible registration; nothing is triggered on failure
    pub fn try_register(
        &self,
        dev_message: &str,
        user_message: &str,
        critical: bool,
    ) -> RegistryResult<ErrorCode> {
        let mut state = self.lock();

        let next = state.next_code.ok_or(RegistryError::CodesExhausted)?;
        let code = ErrorCode::new(next);
        if code.is_reserved() {
            return Err(RegistryError::ReservedCodeCollision { code });
        }

        state.definitions.insert(
            code,
            ErrorDefinition::new(code, dev_message, user_message, critical),
        );
        state.next_code = next.checked_add(1);

        Ok(code)
    }

    // ========================================================================
    // TRIGGERING
    // ========================================================================

    /// Trigger a registered error.
    ///
    /// Unknown codes follow the configured [`MissPolicy`].
    pub fn trigger(&self, code: ErrorCode) {
        let (outcome, miss_policy) = {
            let state = self.lock();
            (state.plan(code), state.miss_policy)
        };

        match outcome {
            Ok(dispatch) => self.dispatch(dispatch),
            Err(err) => {
                if miss_policy == MissPolicy::ReportInternal {
                    // Reserved definitions are always present, so this cannot miss again.
                    self.trigger(err.reserved_code());
                }
            }
        }
    }

    /// Trigger a registered error, reporting unknown codes to the caller
    /// instead of applying the miss policy
    pub fn try_trigger(&self, code: ErrorCode) -> RegistryResult<()> {
        let dispatch = self.lock().plan(code)?;
        self.dispatch(dispatch);
        Ok(())
    }

    fn dispatch(&self, dispatch: Dispatch) {
        match dispatch {
            Dispatch::Developer(event) => self.dev_log.log_dev(&event),
            Dispatch::User(message) => self
                .notifier
                .notify_user(messages::NOTIFICATION_TITLE, &message),
            Dispatch::Nothing => {}
        }
    }

    // ========================================================================
    // DIAGNOSTICS
    // ========================================================================

    /// Multi-line report of every definition, reserved ones included
    pub fn list_registered(&self) -> String {
        let state = self.lock();
        report::render_report(state.definitions.values(), &chrono::Local::now())
    }

    /// Clone of a stored definition
    pub fn definition(&self, code: ErrorCode) -> Option<ErrorDefinition> {
        self.lock().definitions.get(&code).cloned()
    }

    /// Snapshot of all definitions in registration order
    pub fn definitions(&self) -> Vec<ErrorDefinition> {
        self.lock().definitions.values().cloned().collect()
    }

    pub fn contains(&self, code: ErrorCode) -> bool {
        self.lock().definitions.contains_key(&code)
    }

    /// Number of stored definitions, including the two reserved ones
    pub fn definition_count(&self) -> usize {
        self.lock().definitions.len()
    }

    /// The code the next successful registration would receive
    pub fn next_code(&self) -> Option<ErrorCode> {
        self.lock().next_code.map(ErrorCode::new)
    }

    /// The message a critical trigger of `definition` would show the user
    pub fn format_user_message(&self, definition: &ErrorDefinition) -> String {
        self.lock().format_user_message(definition)
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    pub fn is_dev_mode(&self) -> bool {
        self.lock().dev_mode
    }

    pub fn set_dev_mode(&self, dev_mode: bool) {
        self.lock().dev_mode = dev_mode;
    }

    pub fn user_pre_text(&self) -> String {
        self.lock().user_pre_text.clone()
    }

    pub fn set_user_pre_text(&self, text: &str) {
        self.lock().user_pre_text = text.to_string();
    }

    pub fn user_post_text(&self) -> String {
        self.lock().user_post_text.clone()
    }

    pub fn set_user_post_text(&self, text: &str) {
        self.lock().user_post_text = text.to_string();
    }

    pub fn miss_policy(&self) -> MissPolicy {
        self.lock().miss_policy
    }

    pub fn set_miss_policy(&self, policy: MissPolicy) {
        self.lock().miss_policy = policy;
    }
}

impl fmt::Debug for ErrorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ErrorRegistry")
            .field("definitions", &state.definitions.len())
            .field("next_code", &state.next_code)
            .field("dev_mode", &state.dev_mode)
            .field("miss_policy", &state.miss_policy)
            .finish_non_exhaustive()
    }
}
