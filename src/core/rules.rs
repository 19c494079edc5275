//! The fixed alert library and the pass that evaluates it.
//!
//! Entries are ordered by severity band and then by sort score. Two entries
//! are special: the human-capital snapshot is always true and always shown
//! first, and the baseline entry never fires on its own. The selector only
//! inserts it when nothing else triggered.

use super::types::{
    AlertCategory, AlertStatus, Answer, CpaRelationship, DerivedMetrics, DisabilityCoverage,
    EquityCompensation, EstateReview, FilingStatus, FinancialInput, HousingStatus, LifeCoverage,
    RetirementSplit, VolatilityTier,
};

pub const SNAPSHOT_ID: &str = "HUMAN_CAPITAL_SNAPSHOT";
pub const LIQUIDITY_CRITICAL_ID: &str = "LIQ_CRITICAL_01";
pub const BASELINE_ID: &str = "BASELINE_OK_01";

/// Start of the 24% federal bracket, measured on gross compensation.
const HIGH_INCOME_SINGLE: f64 = 201_776.0;
const HIGH_INCOME_JOINT: f64 = 403_551.0;
const ROTH_LIMIT_SINGLE: f64 = 161_000.0;
const ROTH_LIMIT_JOINT: f64 = 240_000.0;
const TARGET_SAVINGS_RATE: f64 = 0.20;

pub type Trigger = fn(&FinancialInput, &DerivedMetrics) -> bool;

#[derive(Debug)]
pub struct AlertSpec {
    pub id: &'static str,
    pub category: AlertCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub status: AlertStatus,
    pub sort_score: u32,
    pub trigger: Trigger,
}

impl AlertSpec {
    pub fn is_triggered(&self, input: &FinancialInput, derived: &DerivedMetrics) -> bool {
        (self.trigger)(input, derived)
    }
}

pub static ALERT_LIBRARY: &[AlertSpec] = &[
    AlertSpec {
        id: SNAPSHOT_ID,
        category: AlertCategory::HumanCapital,
        title: "Human Capital Snapshot",
        description: "Based on your inputs, your future earning potential may be a meaningful financial asset alongside your current net worth. For accumulators with a large share of lifetime earnings ahead, the ability to convert income into long-term assets can materially influence flexibility over time.",
        status: AlertStatus::Info,
        sort_score: 2000,
        trigger: always,
    },
    AlertSpec {
        id: LIQUIDITY_CRITICAL_ID,
        category: AlertCategory::Liquidity,
        title: "Critical Liquidity Risk",
        description: "Based on your inputs, your liquid reserves appear lower than what is commonly maintained by households with volatile income. In periods of income disruption—such as a commission slowdown, equity timing delay, or job transition—this may increase the risk of forced financial or career decisions.",
        status: AlertStatus::Critical,
        sort_score: 1000,
        trigger: volatile_income_thin_reserves,
    },
    AlertSpec {
        id: "CF_NEG_01",
        category: AlertCategory::Liquidity,
        title: "Negative Cash Flow Pattern",
        description: "Your reported monthly spending exceeds your take-home income. Over time, patterns like this can place pressure on savings and reduce flexibility, particularly during income volatility.",
        status: AlertStatus::Critical,
        sort_score: 950,
        trigger: negative_cash_flow,
    },
    AlertSpec {
        id: "HC_CONVERSION_01",
        category: AlertCategory::HumanCapital,
        title: "Human Capital Conversion Gap",
        description: "Your projected future earnings substantially exceed your current invested assets. When a large share of lifetime earnings is still ahead, the effectiveness of converting income into long-term assets can meaningfully influence future outcomes.",
        status: AlertStatus::Critical,
        sort_score: 900,
        trigger: human_capital_conversion_gap,
    },
    AlertSpec {
        id: "INS_DIS_NONE_01",
        category: AlertCategory::Other,
        title: "Disability Coverage Gap",
        description: "You indicated no disability coverage. For working households, income is often the primary financial asset, and limited protection may increase vulnerability to unexpected disruptions.",
        status: AlertStatus::Critical,
        sort_score: 850,
        trigger: no_disability_coverage,
    },
    AlertSpec {
        id: "INS_LIFE_NONE_DEP_01",
        category: AlertCategory::Other,
        title: "Life Coverage Gap (Dependents)",
        description: "You indicated no life insurance coverage while others may rely on your income. In similar situations, households often review how income disruption could affect longer-term plans.",
        status: AlertStatus::Critical,
        sort_score: 800,
        trigger: no_life_coverage_with_dependents,
    },
    AlertSpec {
        id: "ESTATE_NONE_KIDS_01",
        category: AlertCategory::Other,
        title: "Guardianship Planning Gap",
        description: "You indicated no estate planning documents while having dependent children. In many households, this is where guardianship preferences are formally documented, which can reduce uncertainty during unexpected events.",
        status: AlertStatus::Critical,
        sort_score: 750,
        trigger: no_estate_plan_with_dependents,
    },
    AlertSpec {
        id: "RISK_CONC_01",
        category: AlertCategory::Risk,
        title: "Concentrated Position Noted",
        description: "You indicated a concentrated position in a single holding. Concentration can increase portfolio volatility, and some households evaluate a range of risk-management approaches depending on taxes, timelines, and constraints.",
        status: AlertStatus::Critical,
        sort_score: 700,
        trigger: concentrated_position,
    },
    AlertSpec {
        id: "LIQ_LOW_LOWVOL_01",
        category: AlertCategory::Liquidity,
        title: "Liquidity Below 3-Month Baseline",
        description: "Based on your inputs, your liquid reserves appear below a commonly used 3-month baseline. In some cases, this can increase sensitivity to unexpected expenses or short-term income disruption.",
        status: AlertStatus::Warning,
        sort_score: 640,
        trigger: stable_income_thin_reserves,
    },
    AlertSpec {
        id: "SAVE_RATE_01",
        category: AlertCategory::Liquidity,
        title: "Savings Rate Below Accumulator Norms",
        description: "Based on your inputs, the portion of income being saved appears lower than what is commonly seen among high-income accumulators focused on building long-term flexibility.",
        status: AlertStatus::Warning,
        sort_score: 630,
        trigger: low_positive_savings_rate,
    },
    AlertSpec {
        id: "TAX_PRETAX_01",
        category: AlertCategory::Tax,
        title: "Limited Pre-Tax Utilization at Higher Income",
        description: "At higher income levels, taxes can meaningfully affect how income converts into long-term wealth. Your inputs suggest some commonly used pre-tax strategies may not be fully utilized.",
        status: AlertStatus::Warning,
        sort_score: 620,
        trigger: high_income_not_maxing_401k,
    },
    AlertSpec {
        id: "EQ_GRANT_CONC_01",
        category: AlertCategory::Risk,
        title: "Equity Grant Concentration",
        description: "A significant portion of your compensation appears tied to equity grants. In similar situations, timing, concentration, and tax treatment can influence how reliably income translates into usable capital.",
        status: AlertStatus::Warning,
        sort_score: 610,
        trigger: equity_grant_concentration,
    },
    AlertSpec {
        id: "DATA_MISMATCH_01",
        category: AlertCategory::Other,
        title: "Potential Data Inconsistency",
        description: "Some of your entries appear directionally inconsistent (for example, monthly take-home relative to annual compensation). This may reflect taxes/benefits/withholding differences—or a data entry issue that could change the outputs.",
        status: AlertStatus::Warning,
        sort_score: 600,
        trigger: take_home_mismatch,
    },
    AlertSpec {
        id: "RET_CONC_01",
        category: AlertCategory::Risk,
        title: "Retirement-Heavy Asset Mix",
        description: "Your inputs suggest a high concentration of wealth in retirement accounts. In some cases, households evaluate how much flexibility they want in taxable or liquid accounts for goals before traditional retirement ages.",
        status: AlertStatus::Warning,
        sort_score: 590,
        trigger: retirement_heavy,
    },
    AlertSpec {
        id: "RET_ROTH_CONC_01",
        category: AlertCategory::Risk,
        title: "Roth-Heavy Retirement Mix",
        description: "You indicated a Roth-heavy retirement mix. Roth assets can be valuable for tax-free growth, though the optimal balance can vary based on expected future income, tax rates, and withdrawal timing.",
        status: AlertStatus::Warning,
        sort_score: 580,
        trigger: roth_heavy,
    },
    AlertSpec {
        id: "RET_PRETAX_CONC_01",
        category: AlertCategory::Risk,
        title: "Pre-Tax-Heavy Retirement Mix",
        description: "You indicated a pre-tax-heavy retirement mix. Pre-tax deferral can be efficient, though some households monitor future tax-rate uncertainty and withdrawal flexibility when evaluating overall balance.",
        status: AlertStatus::Warning,
        sort_score: 570,
        trigger: pretax_heavy,
    },
    AlertSpec {
        id: "VAR_INCOME_HIGH_01",
        category: AlertCategory::Liquidity,
        title: "High Variable Income Profile",
        description: "Your inputs suggest a high proportion of compensation is variable. In similar situations, households sometimes use more structured cash flow systems to reduce month-to-month volatility and avoid overcommitting during strong periods.",
        status: AlertStatus::Warning,
        sort_score: 560,
        trigger: high_variable_income,
    },
    AlertSpec {
        id: "CPA_SE_01",
        category: AlertCategory::Tax,
        title: "Self-Employment Without CPA Coordination",
        description: "You indicated self-employment income and no CPA relationship. In some cases, 1099/self-employment income can introduce additional tax and retirement-plan complexity that benefits from coordinated review.",
        status: AlertStatus::Warning,
        sort_score: 550,
        trigger: self_employed_without_cpa,
    },
    AlertSpec {
        id: "CPA_RE_01",
        category: AlertCategory::Tax,
        title: "Real Estate Investing Without CPA Coordination",
        description: "You indicated real estate investments and no CPA relationship. In some cases, real estate tax rules and reporting can affect outcomes, and households coordinate planning decisions with tax professionals.",
        status: AlertStatus::Warning,
        sort_score: 540,
        trigger: real_estate_without_cpa,
    },
    AlertSpec {
        id: "TAX_BRACKET_RE_01",
        category: AlertCategory::Tax,
        title: "High Marginal Bracket Without Real Estate Exposure",
        description: "Your inputs suggest a higher marginal bracket and no real estate investments. Some households evaluate whether real estate belongs in their plan due to potential tax characteristics, though these investments also carry additional risks and complexity.",
        status: AlertStatus::Warning,
        sort_score: 530,
        trigger: high_income_without_real_estate,
    },
    AlertSpec {
        id: "SURPLUS_UNSURE_01",
        category: AlertCategory::Liquidity,
        title: "Surplus Consistency Unclear",
        description: "You indicated uncertainty about whether you typically run a monthly surplus. In some cases, a short cash flow review can clarify recurring expenses and identify drivers of variability.",
        status: AlertStatus::Warning,
        sort_score: 520,
        trigger: surplus_unclear,
    },
    AlertSpec {
        id: "SAVE_SYSTEM_01",
        category: AlertCategory::Liquidity,
        title: "No Defined Savings System Noted",
        description: "You indicated no defined savings target or system. In similar situations, households sometimes find that a clear structure improves consistency and reduces decision fatigue.",
        status: AlertStatus::Warning,
        sort_score: 510,
        trigger: no_savings_system,
    },
    AlertSpec {
        id: "LIQ_EXCESS_01",
        category: AlertCategory::Liquidity,
        title: "Elevated Cash Holdings",
        description: "Your cash holdings appear higher than what is typically held for short-term needs. While this may be intentional, elevated cash balances can affect long-term growth if not tied to a specific purpose.",
        status: AlertStatus::Info,
        sort_score: 400,
        trigger: excess_cash,
    },
    AlertSpec {
        id: "TAX_CPA_NONE_01",
        category: AlertCategory::Tax,
        title: "Limited Tax Coordination",
        description: "You indicated that you do not currently work with a CPA. As income complexity increases, some households coordinate planning decisions more closely with tax professionals.",
        status: AlertStatus::Info,
        sort_score: 390,
        trigger: no_cpa,
    },
    AlertSpec {
        id: "WHOLE_LIFE_01",
        category: AlertCategory::Risk,
        title: "Permanent Life Policy Present",
        description: "You indicated ownership of a permanent life insurance policy. These policies can vary widely in structure and purpose and are often reviewed periodically to ensure alignment with broader goals.",
        status: AlertStatus::Info,
        sort_score: 380,
        trigger: owns_whole_life,
    },
    AlertSpec {
        id: "ADV_INVEST_01",
        category: AlertCategory::Risk,
        title: "Advanced Investment Access",
        description: "Your inputs suggest asset levels that may provide access to a broader range of investment structures. In some cases, these options can influence diversification and after-tax results.",
        status: AlertStatus::Info,
        sort_score: 370,
        trigger: advanced_investor,
    },
    AlertSpec {
        id: "BACKDOOR_ROTH_01",
        category: AlertCategory::Tax,
        title: "Potential Backdoor Roth Relevance",
        description: "Your inputs suggest income may be above commonly cited thresholds for direct Roth IRA contributions. In some cases, households evaluate alternative contribution methods depending on their tax situation.",
        status: AlertStatus::Info,
        sort_score: 360,
        trigger: above_roth_income_limit,
    },
    AlertSpec {
        id: "HOUSE_PAID_OFF_01",
        category: AlertCategory::Risk,
        title: "Paid-Off Home Noted",
        description: "You indicated a fully paid-off home. In many cases, lower fixed housing costs can increase the capacity to build liquid or investable assets over time, depending on goals and cash flow.",
        status: AlertStatus::Info,
        sort_score: 350,
        trigger: paid_off_home,
    },
    AlertSpec {
        id: "SOLO401K_01",
        category: AlertCategory::Tax,
        title: "Self-Employment Retirement Plan Opportunity",
        description: "You indicated self-employment / 1099 income. In some cases, this can open access to additional retirement-plan options that may affect tax outcomes and long-term savings capacity.",
        status: AlertStatus::Info,
        sort_score: 340,
        trigger: self_employed,
    },
    AlertSpec {
        id: "UMBRELLA_GAP_01",
        category: AlertCategory::Risk,
        title: "Umbrella Coverage Noted as Absent",
        description: "Based on your inputs, household assets and/or income may increase exposure to liability risk. Some households evaluate umbrella coverage as an additional layer of protection depending on circumstances.",
        status: AlertStatus::Info,
        sort_score: 330,
        trigger: umbrella_gap,
    },
    AlertSpec {
        id: "ESTATE_STALE_01",
        category: AlertCategory::Other,
        title: "Estate Plan Review Timing",
        description: "You indicated having estate documents, but the last review appears dated or unclear. In some cases, life events or asset changes can make periodic reviews relevant.",
        status: AlertStatus::Info,
        sort_score: 320,
        trigger: stale_estate_plan,
    },
    AlertSpec {
        id: BASELINE_ID,
        category: AlertCategory::Other,
        title: "No Major Issues Detected",
        description: "Based on the information provided, no major risk flags were identified by this rules-based scan. Many households still use a deeper review to confirm assumptions, validate inputs, and identify more nuanced planning opportunities.",
        status: AlertStatus::Info,
        sort_score: 10,
        trigger: never,
    },
];

/// The always-true snapshot entry, first in the library.
pub fn snapshot_alert() -> &'static AlertSpec {
    &ALERT_LIBRARY[0]
}

/// The no-signal fallback entry, last in the library.
pub fn baseline_alert() -> &'static AlertSpec {
    &ALERT_LIBRARY[ALERT_LIBRARY.len() - 1]
}

/// Every library entry whose trigger holds, in table order. The baseline
/// entry is never part of this pass.
pub fn evaluate(input: &FinancialInput, derived: &DerivedMetrics) -> Vec<&'static AlertSpec> {
    ALERT_LIBRARY
        .iter()
        .filter(|alert| alert.id != BASELINE_ID && alert.is_triggered(input, derived))
        .collect()
}

fn savings_ratio(derived: &DerivedMetrics) -> f64 {
    derived.annual_surplus / derived.total_comp_current.max(1.0)
}

fn is_high_income(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    match input.filing_status {
        FilingStatus::Single => derived.total_comp_current >= HIGH_INCOME_SINGLE,
        FilingStatus::MarriedFilingJointly => derived.total_comp_current >= HIGH_INCOME_JOINT,
        FilingStatus::Other => false,
    }
}

fn always(_: &FinancialInput, _: &DerivedMetrics) -> bool {
    true
}

fn never(_: &FinancialInput, _: &DerivedMetrics) -> bool {
    false
}

fn volatile_income_thin_reserves(_: &FinancialInput, derived: &DerivedMetrics) -> bool {
    matches!(
        derived.income_volatility_level,
        VolatilityTier::High | VolatilityTier::Moderate
    ) && derived.cash_runway_months < 6.0
}

fn negative_cash_flow(_: &FinancialInput, derived: &DerivedMetrics) -> bool {
    derived.monthly_surplus < 0.0
}

fn human_capital_conversion_gap(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    derived.human_capital_est > 5.0 * input.net_worth && savings_ratio(derived) < TARGET_SAVINGS_RATE
}

fn no_disability_coverage(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.disability_coverage == DisabilityCoverage::Uncovered && input.age <= 50
}

fn no_life_coverage_with_dependents(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    input.life_insurance_coverage == LifeCoverage::Uncovered && derived.has_dependents
}

fn no_estate_plan_with_dependents(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    input.has_estate_plan == Answer::No && derived.has_dependents
}

fn concentrated_position(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.has_concentrated_position
}

fn stable_income_thin_reserves(_: &FinancialInput, derived: &DerivedMetrics) -> bool {
    derived.income_volatility_level == VolatilityTier::Low && derived.cash_runway_months < 3.0
}

fn low_positive_savings_rate(_: &FinancialInput, derived: &DerivedMetrics) -> bool {
    savings_ratio(derived) < TARGET_SAVINGS_RATE && derived.monthly_surplus > 0.0
}

fn high_income_not_maxing_401k(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    is_high_income(input, derived) && input.maxing_401k == Answer::No
}

fn equity_grant_concentration(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    !input
        .equity_compensation
        .contains(&EquityCompensation::NoEquity)
        && input.equity_grant_value >= 0.30 * derived.total_comp_current
}

fn take_home_mismatch(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    let monthly_gross = derived.total_comp_current / 12.0;
    (input.monthly_take_home - monthly_gross).abs() > 0.50 * monthly_gross
}

fn retirement_heavy(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.net_worth > 0.0 && input.retirement_balance >= 0.80 * input.net_worth
}

fn roth_heavy(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.retirement_split == RetirementSplit::MostlyRoth
}

fn pretax_heavy(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.retirement_split == RetirementSplit::MostlyTraditional
}

fn high_variable_income(_: &FinancialInput, derived: &DerivedMetrics) -> bool {
    derived.income_volatility_level == VolatilityTier::High
}

fn self_employed_without_cpa(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.has_self_employment_income && input.has_cpa == CpaRelationship::No
}

fn real_estate_without_cpa(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.has_real_estate_investments && input.has_cpa == CpaRelationship::No
}

fn high_income_without_real_estate(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    is_high_income(input, derived) && !input.has_real_estate_investments
}

fn surplus_unclear(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.runs_surplus == Answer::Unsure
}

fn no_savings_system(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    !input.has_savings_system
}

fn excess_cash(_: &FinancialInput, derived: &DerivedMetrics) -> bool {
    derived.cash_runway_months > 12.0
}

fn no_cpa(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.has_cpa == CpaRelationship::No
}

fn owns_whole_life(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.has_whole_life == Answer::Yes
}

fn advanced_investor(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.net_worth >= 5_000_000.0
}

fn above_roth_income_limit(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    if input.filing_status.is_joint() {
        derived.total_comp_current > ROTH_LIMIT_JOINT
    } else {
        derived.total_comp_current > ROTH_LIMIT_SINGLE
    }
}

fn paid_off_home(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.housing_status == HousingStatus::Own
        && input.mortgage_balance == 0.0
        && input.home_value > 0.0
}

fn self_employed(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.has_self_employment_income
}

fn umbrella_gap(input: &FinancialInput, derived: &DerivedMetrics) -> bool {
    (input.net_worth > 1_000_000.0 || derived.total_comp_current > 300_000.0)
        && input.has_umbrella == Answer::No
}

fn stale_estate_plan(input: &FinancialInput, _: &DerivedMetrics) -> bool {
    input.has_estate_plan == Answer::Yes
        && matches!(
            input.estate_last_reviewed,
            EstateReview::MoreThanFiveYears | EstateReview::NeverOrUnsure
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derive_metrics;
    use crate::core::types::fixtures::quiet_input;
    use std::collections::HashSet;

    fn triggered_ids(input: &FinancialInput) -> Vec<&'static str> {
        let derived = derive_metrics(input);
        evaluate(input, &derived).into_iter().map(|a| a.id).collect()
    }

    fn triggers(input: &FinancialInput, id: &str) -> bool {
        triggered_ids(input).contains(&id)
    }

    #[test]
    fn library_ids_are_unique() {
        let ids: HashSet<_> = ALERT_LIBRARY.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ALERT_LIBRARY.len());
        assert_eq!(ALERT_LIBRARY.len(), 32);
    }

    #[test]
    fn special_entries_sit_at_library_edges() {
        assert_eq!(snapshot_alert().id, SNAPSHOT_ID);
        assert_eq!(baseline_alert().id, BASELINE_ID);
        assert_eq!(snapshot_alert().sort_score, 2000);
        assert_eq!(baseline_alert().sort_score, 10);
    }

    #[test]
    fn library_is_ordered_by_descending_score() {
        for pair in ALERT_LIBRARY.windows(2) {
            assert!(
                pair[0].sort_score > pair[1].sort_score,
                "{} should outrank {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn quiet_household_only_triggers_snapshot() {
        assert_eq!(triggered_ids(&quiet_input()), vec![SNAPSHOT_ID]);
    }

    #[test]
    fn baseline_never_triggers_even_when_nothing_else_does() {
        let input = quiet_input();
        let derived = derive_metrics(&input);
        assert!(!baseline_alert().is_triggered(&input, &derived));
        assert!(!triggered_ids(&input).contains(&BASELINE_ID));
    }

    #[test]
    fn spending_above_take_home_flags_negative_cash_flow() {
        let mut input = quiet_input();
        input.monthly_take_home = 10_000.0;
        input.monthly_spending = 12_000.0;
        assert!(triggers(&input, "CF_NEG_01"));
        assert!(!triggers(&input, "SAVE_RATE_01"));
    }

    #[test]
    fn disability_gap_applies_through_age_fifty() {
        let mut input = quiet_input();
        input.disability_coverage = DisabilityCoverage::Uncovered;
        input.age = 40;
        assert!(triggers(&input, "INS_DIS_NONE_01"));
        input.age = 50;
        assert!(triggers(&input, "INS_DIS_NONE_01"));
        input.age = 51;
        assert!(!triggers(&input, "INS_DIS_NONE_01"));
        input.age = 65;
        assert!(!triggers(&input, "INS_DIS_NONE_01"));
    }

    #[test]
    fn variable_income_with_short_runway_is_critical() {
        let mut input = quiet_input();
        input.annual_base_income = 120_000.0;
        input.annual_variable_comp = 80_000.0;
        input.monthly_take_home = 12_000.0;
        input.monthly_spending = 9_000.0;
        input.cash_holdings = 45_000.0;

        let ids = triggered_ids(&input);
        assert!(ids.contains(&LIQUIDITY_CRITICAL_ID));
        assert!(ids.contains(&"VAR_INCOME_HIGH_01"));
        assert!(!ids.contains(&"LIQ_LOW_LOWVOL_01"));

        input.cash_holdings = 54_000.0;
        assert!(!triggers(&input, LIQUIDITY_CRITICAL_ID));
    }

    #[test]
    fn stable_income_uses_three_month_baseline() {
        let mut input = quiet_input();
        input.cash_holdings = 8_000.0;
        assert!(triggers(&input, "LIQ_LOW_LOWVOL_01"));
        assert!(!triggers(&input, LIQUIDITY_CRITICAL_ID));
    }

    #[test]
    fn high_income_threshold_starts_at_twenty_four_percent_bracket() {
        let mut input = quiet_input();
        input.maxing_401k = Answer::No;
        input.monthly_take_home = 201_776.0 / 12.0;
        input.annual_base_income = 201_775.0;
        assert!(!triggers(&input, "TAX_PRETAX_01"));
        input.annual_base_income = 201_776.0;
        assert!(triggers(&input, "TAX_PRETAX_01"));
        assert!(triggers(&input, "TAX_BRACKET_RE_01"));

        input.filing_status = FilingStatus::MarriedFilingJointly;
        assert!(!triggers(&input, "TAX_PRETAX_01"));
        input.annual_base_income = 403_551.0;
        assert!(triggers(&input, "TAX_PRETAX_01"));

        input.filing_status = FilingStatus::Other;
        assert!(!triggers(&input, "TAX_PRETAX_01"));
        assert!(!triggers(&input, "TAX_BRACKET_RE_01"));
    }

    #[test]
    fn backdoor_roth_thresholds_depend_on_filing_status() {
        let mut input = quiet_input();
        input.annual_base_income = 200_000.0;
        input.monthly_take_home = 200_000.0 / 12.0;
        assert!(triggers(&input, "BACKDOOR_ROTH_01"));
        input.filing_status = FilingStatus::MarriedFilingJointly;
        assert!(!triggers(&input, "BACKDOOR_ROTH_01"));
        input.filing_status = FilingStatus::Other;
        assert!(triggers(&input, "BACKDOOR_ROTH_01"));
    }

    #[test]
    fn equity_grant_rule_ignores_households_without_equity() {
        let mut input = quiet_input();
        input.equity_grant_value = 30_000.0;
        input.equity_compensation = vec![EquityCompensation::NoEquity];
        assert!(!triggers(&input, "EQ_GRANT_CONC_01"));
        input.equity_compensation = vec![EquityCompensation::Rsu];
        assert!(triggers(&input, "EQ_GRANT_CONC_01"));
        input.equity_grant_value = 17_999.0;
        assert!(!triggers(&input, "EQ_GRANT_CONC_01"));
    }

    #[test]
    fn dependents_drive_life_and_guardianship_gaps() {
        let mut input = quiet_input();
        input.life_insurance_coverage = LifeCoverage::Uncovered;
        input.has_estate_plan = Answer::No;
        assert!(!triggers(&input, "INS_LIFE_NONE_DEP_01"));
        assert!(!triggers(&input, "ESTATE_NONE_KIDS_01"));

        input.kids_count = 2;
        assert!(triggers(&input, "INS_LIFE_NONE_DEP_01"));
        assert!(triggers(&input, "ESTATE_NONE_KIDS_01"));
    }

    #[test]
    fn cpa_rules_follow_relationship_answer() {
        let mut input = quiet_input();
        input.has_self_employment_income = true;
        input.has_real_estate_investments = true;
        assert!(triggers(&input, "SOLO401K_01"));
        assert!(!triggers(&input, "CPA_SE_01"));

        input.has_cpa = CpaRelationship::Sometimes;
        assert!(!triggers(&input, "TAX_CPA_NONE_01"));

        input.has_cpa = CpaRelationship::No;
        let ids = triggered_ids(&input);
        assert!(ids.contains(&"CPA_SE_01"));
        assert!(ids.contains(&"CPA_RE_01"));
        assert!(ids.contains(&"TAX_CPA_NONE_01"));
    }

    #[test]
    fn stale_estate_plan_requires_existing_plan() {
        let mut input = quiet_input();
        input.estate_last_reviewed = EstateReview::MoreThanFiveYears;
        assert!(triggers(&input, "ESTATE_STALE_01"));
        input.estate_last_reviewed = EstateReview::NeverOrUnsure;
        assert!(triggers(&input, "ESTATE_STALE_01"));
        input.estate_last_reviewed = EstateReview::ThreeToFiveYears;
        assert!(!triggers(&input, "ESTATE_STALE_01"));
        input.estate_last_reviewed = EstateReview::NeverOrUnsure;
        input.has_estate_plan = Answer::Unsure;
        assert!(!triggers(&input, "ESTATE_STALE_01"));
    }

    #[test]
    fn balance_sheet_rules() {
        let mut input = quiet_input();
        input.retirement_balance = 400_000.0;
        assert!(triggers(&input, "RET_CONC_01"));

        input.net_worth = 0.0;
        input.retirement_balance = 0.0;
        assert!(!triggers(&input, "RET_CONC_01"));

        input.net_worth = 5_000_000.0;
        input.has_umbrella = Answer::No;
        let ids = triggered_ids(&input);
        assert!(ids.contains(&"ADV_INVEST_01"));
        assert!(ids.contains(&"UMBRELLA_GAP_01"));
    }

    #[test]
    fn paid_off_home_needs_ownership_value_and_no_mortgage() {
        let mut input = quiet_input();
        input.housing_status = HousingStatus::Own;
        input.home_value = 750_000.0;
        assert!(triggers(&input, "HOUSE_PAID_OFF_01"));
        input.mortgage_balance = 1.0;
        assert!(!triggers(&input, "HOUSE_PAID_OFF_01"));
    }

    #[test]
    fn young_low_saver_shows_conversion_gap() {
        let mut input = quiet_input();
        input.age = 30;
        input.net_worth = 100_000.0;
        input.retirement_balance = 50_000.0;
        input.monthly_spending = 4_500.0;
        assert!(triggers(&input, "HC_CONVERSION_01"));
        assert!(triggers(&input, "SAVE_RATE_01"));
    }

    #[test]
    fn evaluation_preserves_table_order() {
        let mut input = quiet_input();
        input.has_whole_life = Answer::Yes;
        input.runs_surplus = Answer::Unsure;
        input.has_concentrated_position = true;
        assert_eq!(
            triggered_ids(&input),
            vec![
                SNAPSHOT_ID,
                "RISK_CONC_01",
                "SURPLUS_UNSURE_01",
                "WHOLE_LIFE_01"
            ]
        );
    }
}
