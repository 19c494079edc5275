use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use super::derived::derive_metrics;
use super::rules::{AlertSpec, evaluate};
use super::selector::{headline, select};
use super::tax::estimate_tax;
use super::types::{AnalysisResult, ComplianceRecord, FinancialInput, KeyFacts, PresentedInsight};

pub const ENGINE_VERSION: &str = "wealth-audit-engine@1.0.0";

pub const HIDDEN_ROADMAP_ITEMS: [&str; 2] = [
    "These observations reflect common patterns seen among high-income accumulators.",
    "A short discovery call can help determine whether any of these areas warrant deeper review.",
];

/// Runs a full audit stamped with the current time.
pub fn compute_audit(input: &FinancialInput) -> AnalysisResult {
    compute_audit_at(input, Utc::now())
}

/// Runs a full audit with an explicit generation timestamp. Two calls with the
/// same input and timestamp produce identical results.
pub fn compute_audit_at(input: &FinancialInput, generated_at: DateTime<Utc>) -> AnalysisResult {
    let derived = derive_metrics(input);
    let tax = estimate_tax(input, derived.total_comp_current);
    let triggered = evaluate(input, &derived);
    let presented = select(&triggered);

    debug!(
        triggered = triggered.len(),
        presented = presented.len(),
        "audit evaluated"
    );

    let key_facts = KeyFacts {
        total_comp: derived.total_comp_current,
        effective_tax_rate: tax.effective_rate,
        total_tax_est: tax.total_tax,
        monthly_surplus: derived.monthly_surplus,
        savings_rate: derived.annual_surplus / derived.total_comp_current.max(1.0),
        cash_runway_months: derived.cash_runway_months,
        net_worth_ex_home: input.net_worth,
    };

    AnalysisResult {
        headline: headline(&presented).to_string(),
        key_facts,
        presented_insights: presented.iter().map(|alert| to_insight(alert)).collect(),
        hidden_roadmap_items: HIDDEN_ROADMAP_ITEMS.iter().map(|s| s.to_string()).collect(),
        compliance: ComplianceRecord {
            engine_version: ENGINE_VERSION.to_string(),
            generated_at_iso: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            raw_input: input.clone(),
            derived,
            triggered_alert_ids: alert_ids(&triggered),
            presented_alert_ids: alert_ids(&presented),
        },
    }
}

fn to_insight(alert: &AlertSpec) -> PresentedInsight {
    PresentedInsight {
        title: alert.title.to_string(),
        description: alert.description.to_string(),
        status: alert.status,
    }
}

fn alert_ids(alerts: &[&AlertSpec]) -> Vec<String> {
    alerts.iter().map(|alert| alert.id.to_string()).collect()
}
