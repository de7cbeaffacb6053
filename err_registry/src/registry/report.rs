//! Human-readable listing of registered errors

use super::definition::ErrorDefinition;
use crate::config::compile_time::report::{HEADER_PREFIX, TIMESTAMP_FORMAT};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Render the registered-errors report for a given generation time
pub fn render_report<'a, Tz, I>(definitions: I, generated: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
    I: IntoIterator<Item = &'a ErrorDefinition>,
{
    let mut report = format!("{}{}):", HEADER_PREFIX, generated.format(TIMESTAMP_FORMAT));

    for definition in definitions {
        report.push_str(&format!(
            "\n- {}: {}",
            definition.code(),
            definition.dev_message()
        ));
    }

    report
}
