use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    #[serde(rename = "Married Filing Jointly")]
    MarriedFilingJointly,
    Other,
}

impl FilingStatus {
    pub fn is_joint(self) -> bool {
        self == FilingStatus::MarriedFilingJointly
    }
}

/// Three-way questionnaire answer used by most yes/no questions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unsure,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CpaRelationship {
    Yes,
    No,
    Sometimes,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum EquityCompensation {
    #[serde(rename = "RSUs")]
    Rsu,
    #[serde(rename = "ISOs")]
    Iso,
    #[serde(rename = "NSOs")]
    Nso,
    #[serde(rename = "ESPP")]
    Espp,
    Other,
    #[serde(rename = "None")]
    NoEquity,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SurplusAllocation {
    Retirement,
    Taxable,
    Cash,
    #[default]
    Varies,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum RetirementSplit {
    MostlyTraditional,
    #[serde(rename = "Roughly split")]
    RoughlySplit,
    MostlyRoth,
    #[default]
    Unsure,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingStatus {
    #[default]
    Rent,
    Own,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DisabilityCoverage {
    #[serde(rename = "None")]
    Uncovered,
    #[serde(rename = "Work")]
    Employer,
    Private,
    Both,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum LifeCoverage {
    #[serde(rename = "None")]
    Uncovered,
    #[serde(rename = "Work")]
    Employer,
    Private,
    Both,
    #[default]
    #[serde(rename = "NA")]
    NotApplicable,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum EstateReview {
    #[serde(rename = "Within the last 3 years")]
    WithinThreeYears,
    #[serde(rename = "3–5 years ago", alias = "3-5 years ago")]
    ThreeToFiveYears,
    #[serde(rename = "More than 5 years ago")]
    MoreThanFiveYears,
    #[default]
    #[serde(rename = "Never / Unsure")]
    NeverOrUnsure,
}

/// One completed household questionnaire. The engine only ever reads it.
///
/// Missing fields fall back to zero, empty, or the "unsure" member of their
/// vocabulary. `filingStatus`, `hasCPA` and `disabilityCoverage` have no
/// neutral member and must be supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInput {
    // General profile
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub kids_count: u32,
    pub filing_status: FilingStatus,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub financial_objectives: Vec<String>,
    #[serde(default)]
    pub primary_concern: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub additional_notes: String,

    // Income and tax
    #[serde(default)]
    pub annual_base_income: f64,
    #[serde(default)]
    pub annual_variable_comp: f64,
    #[serde(default)]
    pub last_year_total_comp: f64,
    #[serde(default)]
    pub equity_compensation: Vec<EquityCompensation>,
    #[serde(default)]
    pub equity_grant_value: f64,
    #[serde(default)]
    pub maxing_401k: Answer,
    #[serde(default)]
    pub hsa_eligible: Answer,
    #[serde(default)]
    pub hsa_contributing: Answer,
    #[serde(rename = "hasCPA")]
    pub has_cpa: CpaRelationship,
    #[serde(default)]
    pub has_self_employment_income: bool,
    #[serde(default)]
    pub has_real_estate_investments: bool,

    // Cash flow
    #[serde(default)]
    pub monthly_take_home: f64,
    #[serde(default)]
    pub monthly_spending: f64,
    #[serde(default)]
    pub runs_surplus: Answer,
    #[serde(default)]
    pub surplus_allocation: SurplusAllocation,
    #[serde(default)]
    pub has_savings_system: bool,

    // Assets and liquidity; net worth excludes the primary residence
    #[serde(default)]
    pub net_worth: f64,
    #[serde(default)]
    pub retirement_balance: f64,
    #[serde(default)]
    pub retirement_split: RetirementSplit,
    #[serde(default)]
    pub cash_holdings: f64,
    #[serde(default)]
    pub has_concentrated_position: bool,
    #[serde(default)]
    pub housing_status: HousingStatus,
    #[serde(default)]
    pub monthly_housing_payment: f64,
    #[serde(default)]
    pub mortgage_balance: f64,
    #[serde(default)]
    pub home_value: f64,

    // Risk and estate
    pub disability_coverage: DisabilityCoverage,
    #[serde(default)]
    pub life_insurance_coverage: LifeCoverage,
    #[serde(default)]
    pub has_whole_life: Answer,
    #[serde(default)]
    pub has_umbrella: Answer,
    #[serde(default)]
    pub has_estate_plan: Answer,
    #[serde(default)]
    pub estate_last_reviewed: EstateReview,

    // Contact details collected by the booking gate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum VolatilityTier {
    High,
    Moderate,
    Low,
}

impl VolatilityTier {
    pub fn required_liquidity_months(self) -> u32 {
        match self {
            VolatilityTier::High => 6,
            VolatilityTier::Moderate => 4,
            VolatilityTier::Low => 3,
        }
    }
}

/// Secondary quantities computed once per audit. Serialized with snake_case
/// keys in the compliance trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub total_comp_current: f64,
    pub variable_pct: f64,
    pub income_volatility_level: VolatilityTier,
    pub required_liquidity_months: u32,
    pub monthly_surplus: f64,
    pub annual_surplus: f64,
    pub cash_runway_months: f64,
    pub income_change_pct: f64,
    pub has_dependents: bool,
    pub investable_assets_est: f64,
    pub human_capital_est: f64,
    pub human_capital_multiple: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxEstimate {
    pub total_tax: f64,
    pub effective_rate: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Critical,
    Warning,
    Info,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Critical => "critical",
            AlertStatus::Warning => "warning",
            AlertStatus::Info => "info",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    HumanCapital,
    Liquidity,
    Tax,
    Risk,
    Other,
}

impl AlertCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertCategory::HumanCapital => "human_capital",
            AlertCategory::Liquidity => "liquidity",
            AlertCategory::Tax => "tax",
            AlertCategory::Risk => "risk",
            AlertCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFacts {
    pub total_comp: f64,
    pub effective_tax_rate: f64,
    pub total_tax_est: f64,
    pub monthly_surplus: f64,
    pub savings_rate: f64,
    pub cash_runway_months: f64,
    pub net_worth_ex_home: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentedInsight {
    pub title: String,
    pub description: String,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRecord {
    pub engine_version: String,
    #[serde(rename = "generatedAtISO")]
    pub generated_at_iso: String,
    pub raw_input: FinancialInput,
    pub derived: DerivedMetrics,
    pub triggered_alert_ids: Vec<String>,
    pub presented_alert_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub headline: String,
    pub key_facts: KeyFacts,
    pub presented_insights: Vec<PresentedInsight>,
    pub hidden_roadmap_items: Vec<String>,
    pub compliance: ComplianceRecord,
}
