use tracing::{info, instrument};

use crate::proknow::renaming::client::RulesService;
use crate::proknow::renaming::error::{Result, SyncError};
use crate::proknow::renaming::model::{DesiredRuleSet, Rule};
use crate::proknow::renaming::prompt::Confirm;
use crate::proknow::renaming::reconcile::{ChangeSummary, Reconciliation};

/// Outcome of a synchronisation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub summary: ChangeSummary,
    /// Whether the rule collection was sent to ProKnow.
    pub submitted: bool,
    /// Remote rules the workbook does not declare.
    pub unknown: Vec<Rule>,
}

/// Fetches the stored rules and merges them with the desired ones.
#[instrument(level = "info", skip_all, fields(desired = desired.len()))]
pub fn plan<S>(desired: &DesiredRuleSet, service: &S) -> Result<Reconciliation>
where
    S: RulesService + ?Sized,
{
    let remote = service.fetch_rules()?;
    info!(remote = remote.len(), "fetched rules from ProKnow");
    Ok(Reconciliation::new(desired, remote))
}

/// Submits the merged rules when anything was created or updated and the
/// change is confirmed. Nothing is sent when the rules are already in sync.
#[instrument(level = "info", skip_all)]
pub fn apply<S, C>(reconciliation: Reconciliation, service: &S, confirm: &mut C) -> Result<SyncReport>
where
    S: RulesService + ?Sized,
    C: Confirm + ?Sized,
{
    let summary = reconciliation.summary();
    let unknown = reconciliation.unknown_rules();
    info!(
        created = summary.created,
        updated = summary.updated,
        unchanged = summary.unchanged,
        unknown = summary.unknown,
        "rules reconciled"
    );

    if !summary.has_changes() {
        return Ok(SyncReport {
            summary,
            submitted: false,
            unknown,
        });
    }

    if !confirm.confirm(&summary)? {
        return Err(SyncError::UserAborted);
    }

    let payload = reconciliation.into_payload();
    service.replace_rules(&payload)?;
    info!(rule_count = payload.len(), "renaming rules replaced");

    Ok(SyncReport {
        summary,
        submitted: true,
        unknown,
    })
}

/// Runs [`plan`] followed by [`apply`].
pub fn synchronize<S, C>(desired: &DesiredRuleSet, service: &S, confirm: &mut C) -> Result<SyncReport>
where
    S: RulesService + ?Sized,
    C: Confirm + ?Sized,
{
    let reconciliation = plan(desired, service)?;
    apply(reconciliation, service, confirm)
}
