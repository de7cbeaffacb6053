//! # err-registry CLI
//!
//! Registers messages given on the command line, triggers codes and prints
//! the registered-errors report.

use clap::Parser;
use err_registry::logging::{DevLog, LogFacadeDevLog, StructuredDevLog};
use err_registry::notify::{ConsoleNotifier, LogNotifier, Notifier};
use err_registry::{ErrorCode, ErrorRegistry, MissPolicy, RegistryPreferences};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "err-registry", version, about = "Register and trigger errors")]
struct Cli {
    /// Load preferences from a TOML file instead of the environment
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Route triggers to the developer log
    #[arg(long)]
    dev_mode: bool,

    /// Text shown before user-facing messages
    #[arg(long, value_name = "TEXT")]
    pre_text: Option<String>,

    /// Text shown after user-facing messages
    #[arg(long, value_name = "TEXT")]
    post_text: Option<String>,

    /// Register a critical error (repeatable)
    #[arg(long = "register", value_name = "MSG")]
    critical: Vec<String>,

    /// Register a non-critical error (repeatable)
    #[arg(long = "optional", value_name = "MSG")]
    optional: Vec<String>,

    /// Trigger a code after registration (repeatable)
    #[arg(long = "trigger", value_name = "CODE", allow_negative_numbers = true)]
    trigger: Vec<i32>,

    /// Report unknown codes through the reserved "not found" definition
    #[arg(long)]
    report_unknown: bool,

    /// Print the registered-errors report
    #[arg(long)]
    list: bool,

    /// Send user notifications to the log instead of the console
    #[arg(long)]
    notify_log: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let preferences = load_preferences(&cli)?;
    log::debug!("{}", preferences.summary());

    let dev_log: Arc<dyn DevLog> = if preferences.structured_dev_log {
        Arc::new(StructuredDevLog::new())
    } else {
        Arc::new(LogFacadeDevLog::new())
    };
    let notifier: Arc<dyn Notifier> = if cli.notify_log {
        Arc::new(LogNotifier)
    } else {
        Arc::new(ConsoleNotifier::new())
    };
    let registry = ErrorRegistry::with_preferences(&preferences, notifier, dev_log)?;

    register_all(&registry, &cli.critical, true);
    register_all(&registry, &cli.optional, false);

    for &code in &cli.trigger {
        log::info!("Triggering code {}", code);
        registry.trigger(ErrorCode::new(code));
    }

    if cli.list {
        println!("{}", registry.list_registered());
    }

    Ok(())
}

fn load_preferences(cli: &Cli) -> Result<RegistryPreferences, Box<dyn std::error::Error>> {
    let mut preferences = match &cli.config {
        Some(path) => RegistryPreferences::load(path)?,
        None => RegistryPreferences::default(),
    };

    if cli.dev_mode {
        preferences.dev_mode = true;
    }
    if let Some(text) = &cli.pre_text {
        preferences.user_pre_text = text.clone();
    }
    if let Some(text) = &cli.post_text {
        preferences.user_post_text = text.clone();
    }
    if cli.report_unknown {
        preferences.miss_policy = MissPolicy::ReportInternal;
    }

    Ok(preferences)
}

fn register_all(registry: &ErrorRegistry, messages: &[String], critical: bool) {
    for message in messages {
        let code = registry.register_message_with(message, critical);
        if code.is_none() {
            log::warn!("No code produced for '{}'", message);
        } else {
            println!("{}\t{}", code, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "err-registry",
            "--dev-mode",
            "--register",
            "disk full",
            "--optional",
            "cache miss",
            "--trigger",
            "2",
            "--trigger",
            "-1",
            "--list",
            "--notify-log",
        ]);

        assert!(cli.dev_mode);
        assert_eq!(cli.critical, vec!["disk full".to_string()]);
        assert_eq!(cli.optional, vec!["cache miss".to_string()]);
        assert_eq!(cli.trigger, vec![2, -1]);
        assert!(cli.list);
        assert!(cli.notify_log);
    }

    #[test]
    fn test_cli_overrides_preferences() {
        let cli = Cli::parse_from([
            "err-registry",
            "--pre-text",
            "Oh no:",
            "--report-unknown",
        ]);
        let preferences = load_preferences(&cli).unwrap();

        assert_eq!(preferences.user_pre_text, "Oh no:");
        assert_eq!(preferences.miss_policy, MissPolicy::ReportInternal);
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
