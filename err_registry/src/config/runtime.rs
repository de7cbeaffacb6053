// RUNTIME PREFERENCES (User Experience)

use super::constants::compile_time::{codes, messages};
use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// What `trigger` does when handed a code that was never registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Silently do nothing
    #[default]
    Ignore,
    /// Trigger the reserved "code not found" definition
    ReportInternal,
}

impl MissPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissPolicy::Ignore => "ignore",
            MissPolicy::ReportInternal => "report_internal",
        }
    }
}

impl FromStr for MissPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "ignore" | "silent" => Ok(MissPolicy::Ignore),
            "report_internal" | "report" => Ok(MissPolicy::ReportInternal),
            _ => Err(ConfigError::InvalidMissPolicy {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryPreferences {
    /// Route every trigger to the developer log instead of the user
    pub dev_mode: bool,

    /// Text shown before the user-facing message
    pub user_pre_text: String,

    /// Text shown after the user-facing message
    pub user_post_text: String,

    /// First code handed out by `register`
    pub first_code: i32,

    /// Behavior of `trigger` on unknown codes
    pub miss_policy: MissPolicy,

    /// Whether stock developer logs should emit JSON lines
    pub structured_dev_log: bool,
}

impl Default for RegistryPreferences {
    fn default() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }
}

impl RegistryPreferences {
    /// Compile-time defaults, ignoring the environment
    pub fn builtin() -> Self {
        Self::from_lookup(|_| None)
    }

    /// Build preferences from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            dev_mode: lookup(env_vars::DEV_MODE)
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            user_pre_text: lookup(env_vars::USER_PRE_TEXT)
                .unwrap_or_else(|| messages::DEFAULT_USER_PRE_TEXT.to_string()),
            user_post_text: lookup(env_vars::USER_POST_TEXT)
                .unwrap_or_else(|| messages::DEFAULT_USER_POST_TEXT.to_string()),
            first_code: lookup(env_vars::FIRST_CODE)
                .and_then(|v| v.parse().ok())
                .unwrap_or(codes::DEFAULT_FIRST_CODE),
            miss_policy: lookup(env_vars::MISS_POLICY)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            structured_dev_log: lookup(env_vars::STRUCTURED_DEV_LOG)
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Parse preferences from a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let preferences: Self = toml::from_str(source)?;
        preferences.validate()?;
        Ok(preferences)
    }

    /// Load preferences from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Validate preferences against the reserved code layout
    pub fn validate(&self) -> ConfigResult<()> {
        if self.first_code < 0 {
            return Err(ConfigError::InvalidFirstCode {
                code: self.first_code,
            });
        }
        Ok(())
    }

    /// Get configuration summary for diagnostics
    pub fn summary(&self) -> String {
        format!(
            "Registry Configuration:\n\
             - Dev mode: {}\n\
             - First code: {}\n\
             - Miss policy: {}\n\
             - Structured dev log: {}\n\
             - User pre text: {:?}\n\
             - User post text: {:?}",
            self.dev_mode,
            self.first_code,
            self.miss_policy.as_str(),
            self.structured_dev_log,
            self.user_pre_text,
            self.user_post_text,
        )
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const DEV_MODE: &str = "ERR_REGISTRY_DEV_MODE";
    pub const USER_PRE_TEXT: &str = "ERR_REGISTRY_USER_PRE_TEXT";
    pub const USER_POST_TEXT: &str = "ERR_REGISTRY_USER_POST_TEXT";
    pub const FIRST_CODE: &str = "ERR_REGISTRY_FIRST_CODE";
    pub const MISS_POLICY: &str = "ERR_REGISTRY_MISS_POLICY";
    pub const STRUCTURED_DEV_LOG: &str = "ERR_REGISTRY_STRUCTURED_DEV_LOG";
}
