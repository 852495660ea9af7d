//! Ledger output structures for illustrations

use serde::{Deserialize, Serialize};

/// Round half-way values toward positive infinity (2.5 -> 3, -2.5 -> -2)
///
/// Ledger values are whole dollars; this matches the rounding the
/// presentation layer applies to its own totals.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Guaranteed and current cash value tracks
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashValues {
    pub guaranteed: f64,
    pub current: f64,
}

/// Values available if the policy is surrendered or made paid-up at year end
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOfYearValues {
    pub surrender_value: f64,
    pub paid_up_value: f64,
}

/// A single row of the illustration ledger for one policy year
///
/// All amounts are whole dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    /// Policy year (1-indexed)
    pub policy_year: u32,
    /// Attained age during the year
    pub age: u8,
    /// Premium paid this year (0 after the premium paying window)
    pub premium_paid: f64,
    pub cumulative_premiums: f64,
    pub death_benefit: f64,
    pub cash_value: CashValues,
    /// Death benefit less current cash value
    pub net_amount: f64,
    pub end_of_year_values: EndOfYearValues,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_row_json_field_names() {
        let row = YearlyProjection {
            policy_year: 1,
            age: 35,
            premium_paid: 450.0,
            cumulative_premiums: 450.0,
            death_benefit: 750_000.0,
            cash_value: CashValues::default(),
            net_amount: 750_000.0,
            end_of_year_values: EndOfYearValues::default(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["policyYear"], 1);
        assert_eq!(json["cashValue"]["current"], 0.0);
        assert_eq!(json["endOfYearValues"]["surrenderValue"], 0.0);
    }
}
