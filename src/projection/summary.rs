//! Summary metrics derived from a projected ledger

use serde::{Deserialize, Serialize};

use crate::request::IllustrationRequest;
use super::irr::{approximate_effective_yield, calculate_irr, premium_cashflows};
use super::rows::{round_half_up, YearlyProjection};

/// Attained age reported in the key-age summary values
pub const KEY_AGE: u8 = 65;

/// How `internal_rate_of_return` is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldMethod {
    /// Closed-form single-point approximation (standard ledger)
    #[default]
    Approximate,
    /// Cash-flow IRR of yearly premiums against cash value at the key age
    CashFlowIrr,
}

/// Headline figures for an illustration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IllustrationSummary {
    pub total_premiums_paid: f64,
    /// Current cash value at age 65, 0 when the ledger does not reach it
    pub cash_value_at_65: f64,
    /// Current cash value in the final ledger year
    pub cash_value_at_100: f64,
    pub death_benefit_at_65: f64,
    /// Percent, two decimals
    pub internal_rate_of_return: f64,
    /// First policy year whose current cash value exceeds premiums paid
    pub break_even_year: Option<u32>,
    pub maximum_outlay: f64,
}

/// Summarize a ledger using the requested yield method
pub fn summarize_with(
    projections: &[YearlyProjection],
    request: &IllustrationRequest,
    yield_method: YieldMethod,
) -> IllustrationSummary {
    let total_premiums_paid = round_half_up(projections.iter().map(|r| r.premium_paid).sum());

    let key_age_position = projections.iter().position(|r| r.age == KEY_AGE);
    let key_age_row = key_age_position.map(|i| &projections[i]);

    let cash_value_at_65 = key_age_row.map(|r| r.cash_value.current).unwrap_or(0.0);
    let death_benefit_at_65 = key_age_row.map(|r| r.death_benefit).unwrap_or(0.0);
    let cash_value_at_100 = projections.last().map(|r| r.cash_value.current).unwrap_or(0.0);

    let rate = match yield_method {
        YieldMethod::Approximate => approximate_effective_yield(
            cash_value_at_65,
            total_premiums_paid,
            KEY_AGE as i32 - request.start_age() as i32,
        ),
        YieldMethod::CashFlowIrr => key_age_position
            .filter(|_| cash_value_at_65 > 0.0)
            .and_then(|i| {
                let premiums: Vec<f64> = projections[..=i].iter().map(|r| r.premium_paid).collect();
                calculate_irr(&premium_cashflows(&premiums, cash_value_at_65))
            })
            .unwrap_or(0.0),
    };

    let break_even_year = projections
        .iter()
        .find(|r| r.cash_value.current > r.cumulative_premiums)
        .map(|r| r.policy_year);

    IllustrationSummary {
        total_premiums_paid,
        cash_value_at_65,
        cash_value_at_100,
        death_benefit_at_65,
        internal_rate_of_return: round_half_up(rate * 10_000.0) / 100.0,
        break_even_year,
        maximum_outlay: total_premiums_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::engine::{project, summarize};
    use crate::projection::IllustrationEngine;
    use crate::request::test_support::{overfunded_ul_request, request, term_request, whole_life_request};
    use crate::request::ProductType;

    #[test]
    fn test_term_summary() {
        let request = term_request();
        let rows = project(&request);
        let summary = summarize(&rows, &request);

        assert_eq!(summary.total_premiums_paid, 9_000.0);
        assert_eq!(summary.maximum_outlay, 9_000.0);
        assert_eq!(summary.cash_value_at_65, 0.0);
        assert_eq!(summary.death_benefit_at_65, 0.0);
        assert_eq!(summary.cash_value_at_100, 0.0);
        assert_eq!(summary.internal_rate_of_return, 0.0);
        assert_eq!(summary.break_even_year, None);
    }

    #[test]
    fn test_key_age_values() {
        let request = whole_life_request();
        let rows = project(&request);
        let summary = summarize(&rows, &request);

        let row_65 = rows.iter().find(|r| r.age == 65).unwrap();
        assert_eq!(row_65.policy_year, 31);
        assert_eq!(summary.cash_value_at_65, row_65.cash_value.current);
        assert_eq!(summary.death_benefit_at_65, 500_000.0);
        assert_eq!(summary.cash_value_at_100, rows.last().unwrap().cash_value.current);
        assert_eq!(summary.total_premiums_paid, 8_500.0 * 20.0);
    }

    #[test]
    fn test_missing_key_age_defaults_to_zero() {
        // Issued at 70: the ledger never passes through 65
        let request = request(ProductType::WholeLife, 70, 200_000.0, 9_000.0, 100);
        let rows = project(&request);
        assert!(!rows.is_empty());

        let summary = summarize(&rows, &request);
        assert_eq!(summary.cash_value_at_65, 0.0);
        assert_eq!(summary.death_benefit_at_65, 0.0);
        assert_eq!(summary.internal_rate_of_return, 0.0);
    }

    #[test]
    fn test_empty_ledger_summary() {
        let mut request = whole_life_request();
        request.illustration_end_age = 30;
        let rows = project(&request);
        assert!(rows.is_empty());

        let summary = summarize(&rows, &request);
        assert_eq!(summary, IllustrationSummary::default());
    }

    #[test]
    fn test_break_even_is_first_qualifying_year() {
        let request = overfunded_ul_request();
        let rows = project(&request);
        let summary = summarize(&rows, &request);

        let year = summary.break_even_year.expect("overfunded UL should break even");
        let idx = (year - 1) as usize;
        assert!(rows[idx].cash_value.current > rows[idx].cumulative_premiums);
        for row in &rows[..idx] {
            assert!(row.cash_value.current <= row.cumulative_premiums);
        }
    }

    #[test]
    fn test_approximate_irr_formula() {
        let request = overfunded_ul_request();
        let rows = project(&request);
        let summary = summarize(&rows, &request);

        assert!(summary.cash_value_at_65 > summary.total_premiums_paid);
        let expected = (summary.cash_value_at_65 / summary.total_premiums_paid).powf(1.0 / 30.0) - 1.0;
        assert!((summary.internal_rate_of_return - expected * 100.0).abs() <= 0.005 + 1e-9);
        // Two decimal places
        let scaled = summary.internal_rate_of_return * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn test_cash_flow_irr_accounts_for_timing() {
        let request = overfunded_ul_request();
        let rows = project(&request);

        let approximate = summarize(&rows, &request);
        let cash_flow = IllustrationEngine::default()
            .with_yield_method(YieldMethod::CashFlowIrr)
            .summarize(&rows, &request);

        // Premiums are spread over 20 years, so the true yield exceeds the
        // lump-sum approximation measured over 30 years
        assert!(cash_flow.internal_rate_of_return > approximate.internal_rate_of_return);
        assert!(cash_flow.internal_rate_of_return < 7.0);
        assert_eq!(cash_flow.break_even_year, approximate.break_even_year);
    }

    #[test]
    fn test_summary_json_field_names() {
        let json = serde_json::to_value(IllustrationSummary::default()).unwrap();
        assert!(json.get("cashValueAt65").is_some());
        assert!(json.get("deathBenefitAt65").is_some());
        assert!(json.get("internalRateOfReturn").is_some());
        assert!(json.get("breakEvenYear").is_some());
    }
}
