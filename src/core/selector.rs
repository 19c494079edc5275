use std::cmp::Ordering;

use super::rules::{AlertSpec, LIQUIDITY_CRITICAL_ID, SNAPSHOT_ID, baseline_alert, snapshot_alert};
use super::types::AlertStatus;

pub const MAX_PRESENTED: usize = 6;

pub const HEADLINE_CRITICAL: &str = "Immediate Action Items Detected";
pub const HEADLINE_COMPLETE: &str = "Wealth Accumulation Audit Complete";

/// Reduces the triggered set to the ordered list shown to the household.
///
/// The snapshot always leads. With nothing else triggered the result is the
/// snapshot followed by the baseline entry. Otherwise the critical liquidity
/// alert, when present, is placed directly after the snapshot, and the rest
/// are appended by descending sort score (ties broken by ascending id) until
/// [`MAX_PRESENTED`] entries are reached.
pub fn select<'a>(triggered: &[&'a AlertSpec]) -> Vec<&'a AlertSpec> {
    let candidates: Vec<&'a AlertSpec> = triggered
        .iter()
        .copied()
        .filter(|alert| alert.id != SNAPSHOT_ID)
        .collect();

    if candidates.is_empty() {
        return vec![snapshot_alert(), baseline_alert()];
    }

    let mut presented = Vec::with_capacity(MAX_PRESENTED);
    presented.push(snapshot_alert());

    // Forced phase.
    if let Some(liquidity) = candidates
        .iter()
        .copied()
        .find(|alert| alert.id == LIQUIDITY_CRITICAL_ID)
    {
        presented.push(liquidity);
    }

    // Ranked phase.
    let mut pool: Vec<&'a AlertSpec> = candidates
        .into_iter()
        .filter(|alert| alert.id != LIQUIDITY_CRITICAL_ID)
        .collect();
    pool.sort_by(|a, b| rank(a, b));

    let room = MAX_PRESENTED.saturating_sub(presented.len());
    presented.extend(pool.into_iter().take(room));
    presented
}

fn rank(a: &AlertSpec, b: &AlertSpec) -> Ordering {
    b.sort_score.cmp(&a.sort_score).then_with(|| a.id.cmp(b.id))
}

pub fn headline(presented: &[&AlertSpec]) -> &'static str {
    if presented
        .iter()
        .any(|alert| alert.status == AlertStatus::Critical)
    {
        HEADLINE_CRITICAL
    } else {
        HEADLINE_COMPLETE
    }
}
