use std::io;

use console::{Term, style};
use tracing::debug;

use crate::proknow::renaming::error::SyncError;
use crate::proknow::renaming::model::Rule;
use crate::proknow::renaming::reconcile::ChangeSummary;

/// Operator-facing status output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    /// Announces the start of a processing step.
    pub fn section(&self, text: &str) {
        println!("{}", style(text).magenta());
    }

    pub fn success(&self, message: &str) {
        println!(" {}", style(message).green());
    }

    pub fn warning(&self, message: &str) {
        println!(" {}", style(message).yellow());
    }

    pub fn detail(&self, message: &str) {
        println!("  {message}");
    }

    /// Announces pending changes before they are confirmed.
    pub fn changes(&self, changes: &ChangeSummary) {
        self.warning(&describe_changes(changes));
    }

    /// Prints the failure and rings the terminal bell.
    pub fn failure(&self, error: &SyncError) {
        eprintln!("{}", style(error.headline()).red());
        if let Some(detail) = error.detail() {
            eprintln!("{}", style(detail).yellow());
        }
        if let Err(error) = self.beep() {
            debug!(%error, "terminal bell failed");
        }
    }

    /// Lists remote rules that the workbook does not declare.
    pub fn unknown_rules(&self, rules: &[Rule]) {
        if rules.is_empty() {
            return;
        }
        self.section("Identifying Unknown Renaming Rules...");
        self.warning(&format!(
            "Found {} renaming rule(s) not defined in workbook:",
            rules.len()
        ));
        for rule in rules {
            self.detail(&describe_rule(rule));
        }
    }

    fn beep(&self) -> io::Result<()> {
        Term::stderr().write_str("\x07")
    }
}

pub fn describe_changes(changes: &ChangeSummary) -> String {
    format!(
        "Rules have changed ({} created, {} updated)",
        changes.created, changes.updated
    )
}

pub fn describe_rule(rule: &Rule) -> String {
    format!("rename to '{}' ({})", rule.value, rule.rule_type)
}
