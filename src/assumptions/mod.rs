//! Actuarial parameters and product catalog for illustrations
//!
//! Every constant that shapes the projection lives in `ActuarialParameters`
//! so it can be tuned or replaced from a JSON file without touching the
//! engine's control flow.

mod catalog;
mod mortality;
mod product;

pub use catalog::{ProductCatalog, ProductSpec};
pub use mortality::CostOfInsurance;
pub use product::{ExpenseRatios, SurrenderChargeSchedule};

use crate::error::Result;
use crate::request::ProductType;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default path to a parameters override file
pub const DEFAULT_PARAMETERS_PATH: &str = "data/parameters.json";

/// Container for all projection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActuarialParameters {
    /// Years premiums are paid, regardless of the request's payment duration
    pub premium_paying_years: u32,

    /// Share of each premium consumed by expenses
    pub expense_ratios: ExpenseRatios,

    /// Age-graded mortality charge
    pub cost_of_insurance: CostOfInsurance,

    /// Share of net premium credited on the guaranteed track
    pub guaranteed_net_premium_factor: f64,

    /// Death benefit floor as a multiple of cash value (corridor products)
    pub corridor_factor: f64,

    /// Surrender charge rates by policy year
    pub surrender_charges: SurrenderChargeSchedule,

    /// Surrender value as a share of current cash value
    pub surrender_value_factor: f64,

    /// Paid-up value as a share of current cash value
    pub paid_up_factor: f64,
}

impl Default for ActuarialParameters {
    fn default() -> Self {
        Self {
            premium_paying_years: 20,
            expense_ratios: ExpenseRatios::default(),
            cost_of_insurance: CostOfInsurance::default(),
            guaranteed_net_premium_factor: 0.8,
            corridor_factor: 1.05,
            surrender_charges: SurrenderChargeSchedule::default_10_year(),
            surrender_value_factor: 0.95,
            paid_up_factor: 1.2,
        }
    }
}

impl ActuarialParameters {
    /// Load parameters from a JSON file; omitted fields keep their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let params = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("loaded actuarial parameters from {}", path.as_ref().display());
        Ok(params)
    }

    /// Premium paid in a policy year (1-indexed)
    pub fn premium_for_year(&self, policy_year: u32, annual_premium: f64) -> f64 {
        if policy_year <= self.premium_paying_years {
            annual_premium
        } else {
            0.0
        }
    }

    /// Expense ratio applied to the year's premium
    pub fn expense_ratio(&self, product_type: ProductType) -> f64 {
        self.expense_ratios.for_product(product_type)
    }
}
