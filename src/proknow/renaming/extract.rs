//! Builds the desired rule set from worksheet columns.
//!
//! Every column declares one rule: the first row holds the canonical name and
//! the remaining text cells list the names that should be renamed to it. A
//! name may only be used once across the whole workbook.

use std::collections::HashMap;

use tracing::debug;

use crate::proknow::renaming::error::{Result, SyncError};
use crate::proknow::renaming::model::{Column, DesiredRuleSet, Rule};

/// Records which rule owns every name seen so far.
#[derive(Debug, Default)]
struct ValueOwners {
    owners: HashMap<String, String>,
}

impl ValueOwners {
    /// Fails when `value` already belongs to a rule.
    fn check(&self, value: &str) -> Result<()> {
        match self.owners.get(value) {
            Some(owner) => Err(SyncError::DuplicateValue {
                value: value.to_string(),
                owner: owner.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Marks the value and criteria of `rule` as used.
    fn claim(&mut self, rule: &Rule) {
        self.owners.insert(rule.value.clone(), rule.value.clone());
        for criterion in &rule.criteria {
            self.owners.insert(criterion.clone(), rule.value.clone());
        }
    }
}

/// Extracts one synonym rule per non-blank column.
pub fn extract_rules(columns: &[Column]) -> Result<DesiredRuleSet> {
    let mut rules = DesiredRuleSet::new();
    let mut owners = ValueOwners::default();

    for column in columns {
        let Some(rule) = extract_column(column, &rules, &owners)? else {
            continue;
        };
        debug!(
            column = %column.label(),
            value = %rule.value,
            criteria = rule.criteria.len(),
            "extracted rule"
        );
        owners.claim(&rule);
        rules
            .insert(rule)
            .map_err(|rule| SyncError::DuplicateRuleName { value: rule.value })?;
    }

    Ok(rules)
}

fn extract_column(
    column: &Column,
    rules: &DesiredRuleSet,
    owners: &ValueOwners,
) -> Result<Option<Rule>> {
    let mut cells = column
        .cells
        .iter()
        .enumerate()
        .filter_map(|(row, cell)| match cell {
            Some(text) if !text.is_empty() => Some((row, text)),
            _ => None,
        });

    let value = match cells.next() {
        None => return Ok(None),
        Some((0, value)) => value,
        Some((row, orphan)) => {
            return Err(SyncError::InvalidWorkbook(format!(
                "column {} has no desired structure name in row 1 but lists '{orphan}' in row {}",
                column.label(),
                row + 1
            )));
        }
    };

    if rules.contains(value) {
        return Err(SyncError::DuplicateRuleName {
            value: value.clone(),
        });
    }
    owners.check(value)?;

    let mut criteria: Vec<String> = Vec::new();
    for (_, text) in cells {
        owners.check(text)?;
        if text == value || criteria.contains(text) {
            continue;
        }
        criteria.push(text.clone());
    }

    Ok(Some(Rule::synonyms(value.clone(), criteria)))
}
