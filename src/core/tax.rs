use super::types::{Answer, FilingStatus, FinancialInput, TaxEstimate};

/// Upper bound and marginal rate of one federal bracket.
type Bracket = (f64, f64);

const SINGLE_BRACKETS: [Bracket; 7] = [
    (12_400.0, 0.10),
    (50_400.0, 0.12),
    (105_700.0, 0.22),
    (201_775.0, 0.24),
    (256_225.0, 0.32),
    (640_600.0, 0.35),
    (f64::INFINITY, 0.37),
];

const JOINT_BRACKETS: [Bracket; 7] = [
    (24_800.0, 0.10),
    (100_800.0, 0.12),
    (211_400.0, 0.22),
    (403_550.0, 0.24),
    (512_450.0, 0.32),
    (768_700.0, 0.35),
    (f64::INFINITY, 0.37),
];

const STANDARD_DEDUCTION_SINGLE: f64 = 16_100.0;
const STANDARD_DEDUCTION_JOINT: f64 = 32_200.0;
const ELECTIVE_DEFERRAL_LIMIT: f64 = 23_500.0;
const HSA_LIMIT_SINGLE: f64 = 4_300.0;
const HSA_LIMIT_JOINT: f64 = 8_550.0;

const SOCIAL_SECURITY_WAGE_BASE: f64 = 176_100.0;
const SOCIAL_SECURITY_RATE: f64 = 0.062;
const MEDICARE_RATE: f64 = 0.0145;
const ADDITIONAL_MEDICARE_RATE: f64 = 0.009;
const ADDITIONAL_MEDICARE_THRESHOLD_SINGLE: f64 = 200_000.0;
const ADDITIONAL_MEDICARE_THRESHOLD_JOINT: f64 = 250_000.0;

const NO_INCOME_TAX_STATES: [&str; 9] = ["TX", "FL", "NV", "WA", "TN", "NH", "SD", "WY", "AK"];
const HIGH_TAX_STATES: [&str; 6] = ["CA", "NY", "NJ", "HI", "OR", "MN"];
const HIGH_TAX_STATE_RATE: f64 = 0.09;
const DEFAULT_STATE_RATE: f64 = 0.045;

pub fn estimate_tax(input: &FinancialInput, total_comp_current: f64) -> TaxEstimate {
    let joint = input.filing_status.is_joint();

    let pretax_401k = if input.maxing_401k == Answer::Yes {
        ELECTIVE_DEFERRAL_LIMIT
    } else {
        0.0
    };
    let hsa = match (input.hsa_contributing, joint) {
        (Answer::Yes, true) => HSA_LIMIT_JOINT,
        (Answer::Yes, false) => HSA_LIMIT_SINGLE,
        _ => 0.0,
    };
    let standard_deduction = if joint {
        STANDARD_DEDUCTION_JOINT
    } else {
        STANDARD_DEDUCTION_SINGLE
    };

    let agi = (total_comp_current - pretax_401k - hsa).max(0.0);
    let taxable_income = (agi - standard_deduction).max(0.0);

    let federal = federal_income_tax(taxable_income, input.filing_status);
    let fica = payroll_tax(total_comp_current, joint);
    let state = agi * state_rate(&input.state);

    let total_tax = federal + fica + state;
    let effective_rate = if total_comp_current > 0.0 {
        total_tax / total_comp_current
    } else {
        0.0
    };

    TaxEstimate {
        total_tax,
        effective_rate,
    }
}

fn federal_income_tax(taxable_income: f64, filing_status: FilingStatus) -> f64 {
    let brackets = if filing_status.is_joint() {
        &JOINT_BRACKETS
    } else {
        &SINGLE_BRACKETS
    };
    marginal_tax(taxable_income, brackets)
}

fn marginal_tax(taxable_income: f64, brackets: &[Bracket]) -> f64 {
    let mut tax = 0.0;
    let mut previous_cap = 0.0;
    for &(cap, rate) in brackets {
        if taxable_income <= previous_cap {
            break;
        }
        tax += (taxable_income.min(cap) - previous_cap) * rate;
        previous_cap = cap;
    }
    tax
}

/// Social Security up to the wage base, Medicare on everything, and the
/// additional Medicare surtax above the filing-status threshold.
fn payroll_tax(total_comp: f64, joint: bool) -> f64 {
    let social_security = total_comp.min(SOCIAL_SECURITY_WAGE_BASE) * SOCIAL_SECURITY_RATE;
    let medicare = total_comp * MEDICARE_RATE;
    let threshold = if joint {
        ADDITIONAL_MEDICARE_THRESHOLD_JOINT
    } else {
        ADDITIONAL_MEDICARE_THRESHOLD_SINGLE
    };
    let surtax = (total_comp - threshold).max(0.0) * ADDITIONAL_MEDICARE_RATE;
    social_security + medicare + surtax
}

fn state_rate(state: &str) -> f64 {
    if NO_INCOME_TAX_STATES.contains(&state) {
        0.0
    } else if HIGH_TAX_STATES.contains(&state) {
        HIGH_TAX_STATE_RATE
    } else {
        DEFAULT_STATE_RATE
    }
}
