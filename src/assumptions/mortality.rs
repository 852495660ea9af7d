//! Cost of insurance charge
//!
//! A per-mille charge on the face amount that grows geometrically with
//! policy duration. It stands in for a mortality table lookup; the request's
//! mortality table identifier is recorded but not consulted.

use crate::request::SmokerStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostOfInsurance {
    /// Multiplier on the base charge for smokers
    pub smoker_multiplier: f64,

    /// Multiplier on the base charge for non-smokers
    pub non_smoker_multiplier: f64,

    /// Annual growth of the charge per year since issue
    pub annual_growth: f64,

    /// Face amount is charged per this many dollars
    pub per_mille: f64,
}

impl Default for CostOfInsurance {
    fn default() -> Self {
        Self {
            smoker_multiplier: 1.5,
            non_smoker_multiplier: 1.0,
            annual_growth: 1.05,
            per_mille: 1000.0,
        }
    }
}

impl CostOfInsurance {
    pub fn multiplier(&self, smoker_status: SmokerStatus) -> f64 {
        if smoker_status.is_smoker() {
            self.smoker_multiplier
        } else {
            self.non_smoker_multiplier
        }
    }

    /// Annual charge for `coverage` at `years_since_issue` (attained age minus issue age)
    pub fn annual_charge(&self, coverage: f64, smoker_status: SmokerStatus, years_since_issue: u32) -> f64 {
        coverage * self.multiplier(smoker_status) * self.annual_growth.powi(years_since_issue as i32)
            / self.per_mille
    }
}
