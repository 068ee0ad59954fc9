//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use readonly_mode::{FormId, Verdict};
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print one verdict row
pub fn print_verdict(form_id: &FormId, verdict: Verdict) {
    let label = match verdict {
        Verdict::FullAccess => verdict.as_str().green(),
        Verdict::ViewOnly => verdict.as_str().yellow(),
        Verdict::Rejected => verdict.as_str().red(),
    };
    println!("{:<40} {}", form_id.as_str(), label);
}

/// Print a titled list of forms
pub fn print_forms<'a>(title: &str, forms: impl Iterator<Item = &'a FormId>) {
    println!("{}", title.bold());
    let mut empty = true;
    for form in forms {
        empty = false;
        println!("  {}", form);
    }
    if empty {
        println!("  {}", "(none)".dimmed());
    }
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}
