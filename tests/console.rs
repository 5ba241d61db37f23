use std::io::Cursor;
use std::path::PathBuf;

use renaming_rules_sync::SyncError;
use renaming_rules_sync::model::{Rule, RuleType};
use renaming_rules_sync::prompt::{AutoConfirm, Confirm, PromptConfirm, parse_answer};
use renaming_rules_sync::reconcile::ChangeSummary;
use renaming_rules_sync::report::{describe_changes, describe_rule};

fn changes() -> ChangeSummary {
    ChangeSummary {
        created: 2,
        updated: 1,
        ..ChangeSummary::default()
    }
}

fn answer(input: &str) -> (bool, String) {
    let mut output = Vec::new();
    let accepted = PromptConfirm::new(Cursor::new(input.to_string()), &mut output)
        .confirm(&changes())
        .expect("prompt answered");
    (accepted, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn answers_are_case_insensitive() {
    assert_eq!(parse_answer("YES\n"), Some(true));
    assert_eq!(parse_answer("Ye"), Some(true));
    assert_eq!(parse_answer(" n "), Some(false));
    assert_eq!(parse_answer("No"), Some(false));
    assert_eq!(parse_answer("maybe"), None);
}

#[test]
fn empty_answer_defaults_to_yes() {
    let (accepted, output) = answer("\n");
    assert!(accepted);
    assert!(output.contains("[Y/n]"), "{output}");
}

#[test]
fn invalid_answers_are_asked_again() {
    let (accepted, output) = answer("sure\nn\n");
    assert!(!accepted);
    assert!(output.contains("Please respond with 'yes' or 'no'"), "{output}");
    assert_eq!(output.matches("[Y/n]").count(), 2);
}

#[test]
fn end_of_input_declines() {
    let (accepted, _) = answer("");
    assert!(!accepted);
}

#[test]
fn auto_confirm_accepts_without_reading_input() {
    assert!(AutoConfirm.confirm(&changes()).expect("confirmed"));
}

#[test]
fn pending_changes_are_announced_with_counts() {
    assert_eq!(
        describe_changes(&changes()),
        "Rules have changed (2 created, 1 updated)"
    );
}

#[test]
fn unknown_rules_are_described_by_value_and_type() {
    let mut rule = Rule::synonyms("Lung", vec!["Pulmonary".into()]).with_id(9_i64);
    assert_eq!(describe_rule(&rule), "rename to 'Lung' (synonyms)");

    rule.rule_type = RuleType::Other("regex".into());
    assert_eq!(describe_rule(&rule), "rename to 'Lung' (regex)");
}

#[test]
fn workbook_errors_split_into_headline_and_detail() {
    let error = SyncError::Workbook {
        path: PathBuf::from("rules.xlsx"),
        source: Box::new(SyncError::DuplicateValue {
            value: "HRT".into(),
            owner: "Heart".into(),
        }),
    };

    assert_eq!(error.headline(), "Failed to read rules in 'rules.xlsx' workbook");
    assert_eq!(
        error.detail().as_deref(),
        Some("found duplicate value 'HRT'; already used by 'Heart'")
    );
    assert_eq!(SyncError::UserAborted.headline(), "Synchronization aborted");
    assert!(SyncError::UserAborted.detail().is_none());
}
