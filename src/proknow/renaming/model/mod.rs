use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a rule by ProKnow. Rules read from the workbook do
/// not have one until the service stores them. The identifier is written back
/// exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleId {
    Number(i64),
    Text(String),
}

impl From<i64> for RuleId {
    fn from(value: i64) -> Self {
        RuleId::Number(value)
    }
}

impl From<String> for RuleId {
    fn from(value: String) -> Self {
        RuleId::Text(value)
    }
}

impl From<&str> for RuleId {
    fn from(value: &str) -> Self {
        RuleId::Text(value.to_string())
    }
}

/// Kind of renaming rule. Only synonym rules are produced from workbooks, but
/// any other type received from ProKnow is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    /// Maps a set of alternate names onto one canonical name.
    Synonyms,
    /// Any rule type this tool does not manage.
    Other(String),
}

impl From<String> for RuleType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "synonyms" => RuleType::Synonyms,
            _ => RuleType::Other(value),
        }
    }
}

impl From<RuleType> for String {
    fn from(value: RuleType) -> Self {
        match value {
            RuleType::Synonyms => "synonyms".to_string(),
            RuleType::Other(other) => other,
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::Synonyms => write!(f, "synonyms"),
            RuleType::Other(other) => write!(f, "{other}"),
        }
    }
}

/// A renaming rule: every name in `criteria` is renamed to `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub value: String,
    #[serde(default)]
    pub criteria: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RuleId>,
}

impl Rule {
    /// Creates a synonym rule without an identifier.
    pub fn synonyms(value: impl Into<String>, criteria: Vec<String>) -> Self {
        Self {
            rule_type: RuleType::Synonyms,
            value: value.into(),
            criteria,
            id: None,
        }
    }

    /// Assigns the server identifier.
    pub fn with_id(mut self, id: impl Into<RuleId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_synonyms(&self) -> bool {
        self.rule_type == RuleType::Synonyms
    }
}

/// Classification of a rule after comparing the workbook with ProKnow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleState {
    /// Stored in ProKnow but not declared in the workbook.
    Unknown,
    /// Declared in the workbook and missing from ProKnow.
    Created,
    /// Declared in both, with different criteria.
    Updated,
    /// Declared in both and identical.
    Unchanged,
}

/// One row of the merged view between desired and remote rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationItem {
    pub rule: Rule,
    pub state: RuleState,
}

impl ReconciliationItem {
    pub fn new(rule: Rule, state: RuleState) -> Self {
        Self { rule, state }
    }
}

/// Rules declared in the workbook, keyed by value and kept in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredRuleSet {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl DesiredRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    pub fn get(&self, value: &str) -> Option<&Rule> {
        self.index.get(value).map(|position| &self.rules[*position])
    }

    /// Adds a rule, returning it back if a rule with the same value exists.
    pub(crate) fn insert(&mut self, rule: Rule) -> std::result::Result<(), Rule> {
        if self.index.contains_key(&rule.value) {
            return Err(rule);
        }
        self.index.insert(rule.value.clone(), self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a DesiredRuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// A worksheet column. Cell 0 is the first sheet row; blank and non-textual
/// cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    /// Zero-based column position within the sheet.
    pub index: usize,
    pub cells: Vec<Option<String>>,
}

impl Column {
    pub fn new(index: usize, cells: Vec<Option<String>>) -> Self {
        Self { index, cells }
    }

    /// Spreadsheet letter for the column (`A`, `B`, ..., `AA`).
    pub fn label(&self) -> String {
        let mut label = Vec::new();
        let mut remaining = self.index + 1;
        while remaining > 0 {
            let offset = (remaining - 1) % 26;
            label.push(b'A' + offset as u8);
            remaining = (remaining - 1) / 26;
        }
        label.reverse();
        String::from_utf8_lossy(&label).into_owned()
    }
}
