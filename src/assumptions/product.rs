//! Product charges: expense loads and surrender charges

use crate::request::ProductType;
use serde::{Deserialize, Serialize};

/// Expense ratio applied to each year's premium
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseRatios {
    pub term: f64,
    pub permanent: f64,
}

impl Default for ExpenseRatios {
    fn default() -> Self {
        Self {
            term: 0.15,
            permanent: 0.25,
        }
    }
}

impl ExpenseRatios {
    pub fn for_product(&self, product_type: ProductType) -> f64 {
        if product_type.accumulates_cash_value() {
            self.permanent
        } else {
            self.term
        }
    }
}

/// Surrender charge schedule by policy year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurrenderChargeSchedule {
    /// `base_rate - annual_decline * year` for years 1 through `years`
    Linear {
        base_rate: f64,
        annual_decline: f64,
        years: u32,
    },
    /// Explicit rates by policy year (1-indexed), 0 beyond the table
    Table { charges: Vec<f64> },
}

impl SurrenderChargeSchedule {
    /// Default 10-year schedule declining from 9% to 0%
    pub fn default_10_year() -> Self {
        SurrenderChargeSchedule::Linear {
            base_rate: 0.10,
            annual_decline: 0.01,
            years: 10,
        }
    }

    /// Create from an explicit per-year table
    pub fn from_table(charges: &[f64]) -> Self {
        SurrenderChargeSchedule::Table {
            charges: charges.to_vec(),
        }
    }

    /// Get surrender charge rate for a given policy year
    pub fn get_rate(&self, policy_year: u32) -> f64 {
        if policy_year == 0 {
            return 0.0;
        }
        match self {
            SurrenderChargeSchedule::Linear {
                base_rate,
                annual_decline,
                years,
            } => {
                if policy_year <= *years {
                    (base_rate - policy_year as f64 * annual_decline).max(0.0)
                } else {
                    0.0
                }
            }
            SurrenderChargeSchedule::Table { charges } => {
                charges.get(policy_year as usize - 1).copied().unwrap_or(0.0)
            }
        }
    }
}

impl Default for SurrenderChargeSchedule {
    fn default() -> Self {
        Self::default_10_year()
    }
}
