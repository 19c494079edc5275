mod derived;
mod engine;
mod rules;
mod selector;
mod tax;
mod types;

pub use derived::derive_metrics;
pub use engine::{ENGINE_VERSION, HIDDEN_ROADMAP_ITEMS, compute_audit, compute_audit_at};
pub use rules::{
    ALERT_LIBRARY, AlertSpec, BASELINE_ID, LIQUIDITY_CRITICAL_ID, SNAPSHOT_ID, Trigger,
    baseline_alert, evaluate, snapshot_alert,
};
pub use selector::{HEADLINE_COMPLETE, HEADLINE_CRITICAL, MAX_PRESENTED, headline, select};
pub use tax::estimate_tax;
pub use types::{
    AlertCategory, AlertStatus, AnalysisResult, Answer, ComplianceRecord, CpaRelationship,
    DerivedMetrics, DisabilityCoverage, EquityCompensation, EstateReview, FilingStatus,
    FinancialInput, HousingStatus, KeyFacts, LifeCoverage, PresentedInsight, RetirementSplit,
    SurplusAllocation, TaxEstimate, VolatilityTier,
};

#[cfg(test)]
pub(crate) use types::fixtures;
