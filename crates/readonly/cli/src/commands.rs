//! Command implementations

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};
use readonly_mode::{ReadOnlyGate, VerdictCard};

/// Print the verdict for each form
pub fn check(gate: &ReadOnlyGate, forms: &[String], format: OutputFormat) -> CliResult<()> {
    if forms.is_empty() {
        return Err(CliError::InvalidInput("no form ids given".into()));
    }

    let scope = gate.begin_anonymous_request();
    let cards: Vec<VerdictCard> = forms.iter().map(|form| scope.evaluate(form)).collect();

    match format {
        OutputFormat::Text => {
            let mode = if gate.is_read_only() { "read-only" } else { "normal" };
            output::print_info(&format!("Mode: {}", mode));
            for card in &cards {
                output::print_verdict(&card.form_id, card.verdict);
            }
            Ok(())
        }
        OutputFormat::Json => output::print_json(&cards),
    }
}

/// Print the built allow and view-only lists
pub fn lists(gate: &ReadOnlyGate, format: OutputFormat) -> CliResult<()> {
    let scope = gate.begin_anonymous_request();
    let lists = scope.filter().lists();

    match format {
        OutputFormat::Text => {
            output::print_forms("Allowed:", lists.allowed.iter());
            output::print_forms("View-only:", lists.view_only.iter());
            Ok(())
        }
        OutputFormat::Json => output::print_json(lists),
    }
}

/// Print the effective settings
pub fn config(gate: &ReadOnlyGate, format: OutputFormat) -> CliResult<()> {
    let settings = gate.settings();
    match format {
        OutputFormat::Text => {
            print!("{}", toml::to_string_pretty(settings)?);
            Ok(())
        }
        OutputFormat::Json => output::print_json(settings),
    }
}
