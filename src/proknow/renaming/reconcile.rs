//! Merges the rules declared in the workbook with the rules stored in ProKnow.

use tracing::debug;

use crate::proknow::renaming::model::{DesiredRuleSet, ReconciliationItem, Rule, RuleState};

/// Finds the first synonym rule named `value`.
pub fn find_synonym_rule<'a>(
    items: &'a [ReconciliationItem],
    value: &str,
) -> Option<&'a ReconciliationItem> {
    items.iter().find(|item| matches_synonym(item, value))
}

/// Mutable counterpart of [`find_synonym_rule`].
pub fn find_synonym_rule_mut<'a>(
    items: &'a mut [ReconciliationItem],
    value: &str,
) -> Option<&'a mut ReconciliationItem> {
    items.iter_mut().find(|item| matches_synonym(item, value))
}

fn matches_synonym(item: &ReconciliationItem, value: &str) -> bool {
    item.rule.is_synonyms() && item.rule.value == value
}

/// Compares type, value, and criteria. Criteria order is ignored.
pub fn rules_equal(a: &Rule, b: &Rule) -> bool {
    if a.rule_type != b.rule_type || a.value != b.value || a.criteria.len() != b.criteria.len() {
        return false;
    }
    let mut lhs: Vec<&str> = a.criteria.iter().map(String::as_str).collect();
    let mut rhs: Vec<&str> = b.criteria.iter().map(String::as_str).collect();
    lhs.sort_unstable();
    rhs.sort_unstable();
    lhs == rhs
}

/// Merged view of remote and desired rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    items: Vec<ReconciliationItem>,
}

/// Counts of each state in a [`Reconciliation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub unknown: usize,
}

impl ChangeSummary {
    /// Whether anything needs to be sent to ProKnow.
    pub fn has_changes(&self) -> bool {
        self.created + self.updated > 0
    }
}

impl Reconciliation {
    /// Classifies every remote and desired rule.
    pub fn new(desired: &DesiredRuleSet, remote: Vec<Rule>) -> Self {
        let mut items: Vec<ReconciliationItem> = remote
            .into_iter()
            .map(|rule| ReconciliationItem::new(rule, RuleState::Unknown))
            .collect();

        for rule in desired {
            match find_synonym_rule_mut(&mut items, &rule.value) {
                None => {
                    debug!(value = %rule.value, "rule will be created");
                    items.push(ReconciliationItem::new(rule.clone(), RuleState::Created));
                }
                Some(found) if rules_equal(rule, &found.rule) => {
                    found.state = RuleState::Unchanged;
                }
                Some(found) => {
                    debug!(value = %rule.value, id = ?found.rule.id, "rule will be updated");
                    found.rule.criteria = rule.criteria.clone();
                    found.state = RuleState::Updated;
                }
            }
        }

        Self { items }
    }

    pub fn items(&self) -> &[ReconciliationItem] {
        &self.items
    }

    pub fn summary(&self) -> ChangeSummary {
        self.items
            .iter()
            .fold(ChangeSummary::default(), |mut summary, item| {
                match item.state {
                    RuleState::Created => summary.created += 1,
                    RuleState::Updated => summary.updated += 1,
                    RuleState::Unchanged => summary.unchanged += 1,
                    RuleState::Unknown => summary.unknown += 1,
                }
                summary
            })
    }

    /// Remote rules that the workbook does not declare.
    pub fn unknown_rules(&self) -> Vec<Rule> {
        self.items
            .iter()
            .filter(|item| item.state == RuleState::Unknown)
            .map(|item| item.rule.clone())
            .collect()
    }

    /// Full rule collection to send to ProKnow, in merge order. Unknown
    /// rules are included unchanged since the service replaces everything.
    pub fn into_payload(self) -> Vec<Rule> {
        self.items.into_iter().map(|item| item.rule).collect()
    }
}
