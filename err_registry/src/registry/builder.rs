//! Builder for [`ErrorRegistry`]

use super::{ErrorRegistry, MissPolicy};
use crate::config::{ConfigResult, RegistryPreferences};
use crate::logging::{create_configured_dev_log, DevLog};
use crate::notify::{ConsoleNotifier, Notifier};
use std::sync::Arc;

/// Assembles a registry from preferences and collaborators.
///
/// Starts from the compile-time defaults; call [`RegistryBuilder::from_env`]
/// to start from the environment instead. Unset collaborators default to a
/// [`ConsoleNotifier`] and the stderr developer log selected by the
/// preferences.
pub struct RegistryBuilder {
    preferences: RegistryPreferences,
    notifier: Option<Arc<dyn Notifier>>,
    dev_log: Option<Arc<dyn DevLog>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            preferences: RegistryPreferences::builtin(),
            notifier: None,
            dev_log: None,
        }
    }

    pub fn from_env() -> Self {
        Self::new().preferences(RegistryPreferences::default())
    }

    pub fn preferences(mut self, preferences: RegistryPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.preferences.dev_mode = dev_mode;
        self
    }

    pub fn user_pre_text(mut self, text: &str) -> Self {
        self.preferences.user_pre_text = text.to_string();
        self
    }

    pub fn user_post_text(mut self, text: &str) -> Self {
        self.preferences.user_post_text = text.to_string();
        self
    }

    pub fn first_code(mut self, code: i32) -> Self {
        self.preferences.first_code = code;
        self
    }

    pub fn miss_policy(mut self, policy: MissPolicy) -> Self {
        self.preferences.miss_policy = policy;
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn dev_log(mut self, dev_log: Arc<dyn DevLog>) -> Self {
        self.dev_log = Some(dev_log);
        self
    }

    pub fn build(self) -> ConfigResult<ErrorRegistry> {
        self.preferences.validate()?;

        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(ConsoleNotifier::new()) as Arc<dyn Notifier>);
        let dev_log = self
            .dev_log
            .unwrap_or_else(|| create_configured_dev_log(&self.preferences));

        Ok(ErrorRegistry::from_parts(&self.preferences, notifier, dev_log))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
