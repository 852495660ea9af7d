//! Illustration request structures as produced by the illustration wizard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of the insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Tobacco use classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokerStatus {
    Smoker,
    #[serde(rename = "Non-Smoker")]
    NonSmoker,
}

impl SmokerStatus {
    pub fn is_smoker(&self) -> bool {
        matches!(self, SmokerStatus::Smoker)
    }
}

/// Underwriting class assigned to the insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthClass {
    #[serde(rename = "Preferred Plus")]
    PreferredPlus,
    Preferred,
    #[serde(rename = "Standard Plus")]
    StandardPlus,
    Standard,
    Substandard,
}

impl HealthClass {
    /// Display label matching the wizard's option list
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthClass::PreferredPlus => "Preferred Plus",
            HealthClass::Preferred => "Preferred",
            HealthClass::StandardPlus => "Standard Plus",
            HealthClass::Standard => "Standard",
            HealthClass::Substandard => "Substandard",
        }
    }
}

/// Life insurance product family
///
/// Every formula that differs by product goes through one of the methods
/// below, so adding a variant forces each of them to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Term Life")]
    TermLife,
    #[serde(rename = "Whole Life")]
    WholeLife,
    #[serde(rename = "Universal Life")]
    UniversalLife,
    #[serde(rename = "Variable Universal Life")]
    VariableUniversalLife,
    #[serde(rename = "Indexed Universal Life")]
    IndexedUniversalLife,
}

impl ProductType {
    /// Permanent products build cash value; term does not
    pub fn accumulates_cash_value(&self) -> bool {
        match self {
            ProductType::TermLife => false,
            ProductType::WholeLife
            | ProductType::UniversalLife
            | ProductType::VariableUniversalLife
            | ProductType::IndexedUniversalLife => true,
        }
    }

    /// Death benefit is floored at a multiple of cash value (corridor test)
    pub fn has_death_benefit_corridor(&self) -> bool {
        match self {
            ProductType::UniversalLife | ProductType::VariableUniversalLife => true,
            ProductType::TermLife
            | ProductType::WholeLife
            | ProductType::IndexedUniversalLife => false,
        }
    }

    /// Dividend scale only applies to participating whole life
    pub fn is_whole_life(&self) -> bool {
        matches!(self, ProductType::WholeLife)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::TermLife => "Term Life",
            ProductType::WholeLife => "Whole Life",
            ProductType::UniversalLife => "Universal Life",
            ProductType::VariableUniversalLife => "Variable Universal Life",
            ProductType::IndexedUniversalLife => "Indexed Universal Life",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Premium payment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PremiumMode {
    Annual,
    #[serde(rename = "Semi-Annual")]
    SemiAnnual,
    Quarterly,
    Monthly,
}

impl PremiumMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PremiumMode::Annual => "Annual",
            PremiumMode::SemiAnnual => "Semi-Annual",
            PremiumMode::Quarterly => "Quarterly",
            PremiumMode::Monthly => "Monthly",
        }
    }

    pub fn payments_per_year(&self) -> u32 {
        match self {
            PremiumMode::Annual => 1,
            PremiumMode::SemiAnnual => 2,
            PremiumMode::Quarterly => 4,
            PremiumMode::Monthly => 12,
        }
    }

    /// Amount of each modal payment for an annual-equivalent premium
    pub fn modal_premium(&self, annual_premium: f64) -> f64 {
        annual_premium / self.payments_per_year() as f64
    }
}

/// How long premiums are scheduled to be paid
///
/// Descriptive only: the projection uses the fixed premium paying window in
/// `ActuarialParameters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaymentDuration {
    /// Premiums payable for the life of the policy
    Life,
    /// Premiums payable for a fixed number of years ("20 Years")
    Years(u8),
    /// Premiums payable until an attained age ("To Age 65")
    ToAge(u8),
}

impl TryFrom<String> for PaymentDuration {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for PaymentDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("life") {
            return Ok(PaymentDuration::Life);
        }
        if let Some(age) = s.strip_prefix("To Age ") {
            return age
                .trim()
                .parse()
                .map(PaymentDuration::ToAge)
                .map_err(|_| format!("invalid payment duration: {}", s));
        }
        if let Some(years) = s.strip_suffix(" Years").or_else(|| s.strip_suffix(" Year")) {
            return years
                .trim()
                .parse()
                .map(PaymentDuration::Years)
                .map_err(|_| format!("invalid payment duration: {}", s));
        }
        Err(format!("invalid payment duration: {}", s))
    }
}

impl From<PaymentDuration> for String {
    fn from(value: PaymentDuration) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PaymentDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentDuration::Life => f.write_str("Life"),
            PaymentDuration::Years(n) => write!(f, "{} Years", n),
            PaymentDuration::ToAge(age) => write!(f, "To Age {}", age),
        }
    }
}

/// Dividend scale for participating whole life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DividendScale {
    Current,
    Zero,
}

/// Insured's details, fixed once the request is finalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    /// Issue age (18-85 when built by the wizard)
    pub age: u8,
    pub gender: Gender,
    pub smoker_status: SmokerStatus,
    pub health_class: HealthClass,
    /// Two-letter state code
    pub state: String,
}

/// Interest and charge assumptions for the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IllustrationAssumptions {
    /// Current (non-guaranteed) crediting rate, in percent
    pub current_interest_rate: f64,
    /// Contractual floor crediting rate, in percent
    pub guaranteed_interest_rate: f64,
    pub dividend_scale: DividendScale,
    /// Expense loading, in percent
    pub expense_charges: f64,
    /// Mortality table identifier (recorded, not used by the projection)
    pub mortality_table: String,
}

/// Which ledger columns the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(default = "default_true")]
    pub show_guaranteed: bool,
    #[serde(default = "default_true")]
    pub show_current: bool,
    #[serde(default)]
    pub include_dividends: bool,
    #[serde(default)]
    pub include_loans: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_guaranteed: true,
            show_current: true,
            include_dividends: false,
            include_loans: false,
        }
    }
}

/// A completed illustration request, the engine's sole input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IllustrationRequest {
    pub client_info: ClientInfo,
    pub product_id: String,
    pub product_name: String,
    pub product_type: ProductType,
    /// Face amount
    pub coverage_amount: f64,
    /// Annual-equivalent premium
    pub premium_amount: f64,
    pub premium_mode: PremiumMode,
    pub payment_duration: PaymentDuration,
    pub illustration_end_age: u8,
    pub assumptions: IllustrationAssumptions,
    #[serde(flatten)]
    pub options: DisplayOptions,
}

impl IllustrationRequest {
    /// Issue age of the insured
    pub fn start_age(&self) -> u8 {
        self.client_info.age
    }

    /// Number of policy years illustrated (0 when the window is empty)
    pub fn projection_years(&self) -> u32 {
        (self.illustration_end_age as u32).saturating_sub(self.client_info.age as u32)
    }

    /// Premium paid at each modal payment
    pub fn modal_premium(&self) -> f64 {
        self.premium_mode.modal_premium(self.premium_amount)
    }
}
