use super::types::{DerivedMetrics, FinancialInput, VolatilityTier};

const HIGH_VOLATILITY_SHARE: f64 = 0.40;
const MODERATE_VOLATILITY_SHARE: f64 = 0.20;
const HUMAN_CAPITAL_GROWTH: f64 = 0.03;
const HUMAN_CAPITAL_HORIZON_AGE: u32 = 60;

pub fn derive_metrics(input: &FinancialInput) -> DerivedMetrics {
    let total_comp_current = input.annual_base_income + input.annual_variable_comp;
    let variable_pct = input.annual_variable_comp / total_comp_current.max(1.0);
    let income_volatility_level = volatility_tier(variable_pct);

    let monthly_surplus = input.monthly_take_home - input.monthly_spending;
    let annual_surplus = monthly_surplus * 12.0;
    let cash_runway_months = cash_runway(input.cash_holdings, input.monthly_spending);
    let income_change_pct =
        (total_comp_current - input.last_year_total_comp) / input.last_year_total_comp.max(1.0);

    let human_capital_est = human_capital(total_comp_current, input.age);
    let human_capital_multiple = human_capital_est / input.net_worth.max(1.0);

    DerivedMetrics {
        total_comp_current,
        variable_pct,
        income_volatility_level,
        required_liquidity_months: income_volatility_level.required_liquidity_months(),
        monthly_surplus,
        annual_surplus,
        cash_runway_months,
        income_change_pct,
        has_dependents: input.kids_count >= 1,
        investable_assets_est: input.net_worth,
        human_capital_est,
        human_capital_multiple,
    }
}

fn volatility_tier(variable_pct: f64) -> VolatilityTier {
    if variable_pct >= HIGH_VOLATILITY_SHARE {
        VolatilityTier::High
    } else if variable_pct >= MODERATE_VOLATILITY_SHARE {
        VolatilityTier::Moderate
    } else {
        VolatilityTier::Low
    }
}

/// Months of spending covered by cash. Zero spending yields a runway of zero.
fn cash_runway(cash_holdings: f64, monthly_spending: f64) -> f64 {
    if monthly_spending > 0.0 {
        cash_holdings / monthly_spending
    } else {
        0.0
    }
}

/// Undiscounted sum of current compensation grown 3% a year, from this year
/// through age 60 inclusive.
fn human_capital(total_comp: f64, age: u32) -> f64 {
    let years_remaining = HUMAN_CAPITAL_HORIZON_AGE.saturating_sub(age);
    (0..=years_remaining)
        .map(|t| total_comp * (1.0 + HUMAN_CAPITAL_GROWTH).powi(t as i32))
        .sum()
}
