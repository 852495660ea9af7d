//! Illustration engine: yearly ledger projection and summary

use crate::assumptions::ActuarialParameters;
use crate::request::IllustrationRequest;
use super::rows::YearlyProjection;
use super::state::ProjectionState;
use super::summary::{summarize_with, IllustrationSummary, YieldMethod};

/// Main illustration engine
///
/// Stateless between calls: every projection starts from `ProjectionState::at_issue`
/// and reads the request without modifying it, so one engine can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct IllustrationEngine {
    parameters: ActuarialParameters,
    yield_method: YieldMethod,
}

impl IllustrationEngine {
    /// Create a new engine with given parameters
    pub fn new(parameters: ActuarialParameters) -> Self {
        Self {
            parameters,
            yield_method: YieldMethod::default(),
        }
    }

    /// Select how the summary's internal rate of return is computed
    pub fn with_yield_method(mut self, yield_method: YieldMethod) -> Self {
        self.yield_method = yield_method;
        self
    }

    pub fn parameters(&self) -> &ActuarialParameters {
        &self.parameters
    }

    pub fn yield_method(&self) -> YieldMethod {
        self.yield_method
    }

    /// Project the ledger from policy year 1 to the year before the end age
    ///
    /// An end age at or below the issue age yields an empty ledger.
    pub fn project(&self, request: &IllustrationRequest) -> Vec<YearlyProjection> {
        let years = request.projection_years();
        if years == 0 {
            log::debug!(
                "empty illustration window: issue age {}, end age {}",
                request.start_age(),
                request.illustration_end_age
            );
            return Vec::new();
        }

        log::debug!(
            "projecting {} ({}) for {} years",
            request.product_name,
            request.product_type,
            years
        );

        (1..=years)
            .scan(ProjectionState::at_issue(), |state, policy_year| {
                let (next, row) = state.advance(policy_year, request, &self.parameters);
                *state = next;
                Some(row)
            })
            .collect()
    }

    /// Derive summary metrics from a projected ledger
    pub fn summarize(&self, projections: &[YearlyProjection], request: &IllustrationRequest) -> IllustrationSummary {
        summarize_with(projections, request, self.yield_method)
    }

    /// Project and summarize in one step
    pub fn illustrate(&self, request: &IllustrationRequest) -> (Vec<YearlyProjection>, IllustrationSummary) {
        let projections = self.project(request);
        let summary = self.summarize(&projections, request);
        (projections, summary)
    }
}

/// Project a request with default parameters
pub fn project(request: &IllustrationRequest) -> Vec<YearlyProjection> {
    IllustrationEngine::default().project(request)
}

/// Summarize a ledger with the default (approximate) yield
pub fn summarize(projections: &[YearlyProjection], request: &IllustrationRequest) -> IllustrationSummary {
    IllustrationEngine::default().summarize(projections, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::rows::round_half_up;
    use crate::request::test_support::{overfunded_ul_request, request, term_request, whole_life_request};
    use crate::request::ProductType;

    const ALL_PRODUCTS: [ProductType; 5] = [
        ProductType::TermLife,
        ProductType::WholeLife,
        ProductType::UniversalLife,
        ProductType::VariableUniversalLife,
        ProductType::IndexedUniversalLife,
    ];

    #[test]
    fn test_term_life_scenario() {
        let rows = project(&term_request());

        assert_eq!(rows.len(), 23);
        for row in &rows {
            assert_eq!(row.cash_value.current, 0.0);
            assert_eq!(row.cash_value.guaranteed, 0.0);
            assert_eq!(row.death_benefit, 750_000.0);
            assert_eq!(row.net_amount, row.death_benefit);
        }
        for row in &rows[20..] {
            assert_eq!(row.premium_paid, 0.0);
        }
        assert_eq!(rows[19].premium_paid, 450.0);
        assert_eq!(rows[22].cumulative_premiums, 9_000.0);
        assert_eq!(rows[22].age, 57);
    }

    #[test]
    fn test_whole_life_surrender_charge_reduces_early_years() {
        let request = whole_life_request();
        let engine = IllustrationEngine::default();
        let rows = engine.project(&request);

        let mortality_cost = 500_000.0 / 1000.0;
        let expense_cost = 8_500.0 * 0.25;
        let uncharged = (8_500.0 - mortality_cost - expense_cost) * 1.065;
        assert_eq!(rows[0].cash_value.current, round_half_up(uncharged * (1.0 - 0.09)));
        assert!(rows[0].cash_value.current < round_half_up(uncharged));

        // Re-run without surrender charges: years 1-9 must be strictly lower with them
        let mut params = ActuarialParameters::default();
        params.surrender_charges = crate::assumptions::SurrenderChargeSchedule::from_table(&[]);
        let uncharged_rows = IllustrationEngine::new(params).project(&request);
        for year in 0..9 {
            assert!(
                rows[year].cash_value.current < uncharged_rows[year].cash_value.current,
                "year {}",
                year + 1
            );
        }
    }

    /// Rows paired with the unrounded end-of-year state that produced them
    fn project_with_states(request: &IllustrationRequest) -> Vec<(ProjectionState, YearlyProjection)> {
        let params = ActuarialParameters::default();
        (1..=request.projection_years())
            .scan(ProjectionState::at_issue(), |state, year| {
                let (next, row) = state.advance(year, request, &params);
                *state = next;
                Some((next, row))
            })
            .collect()
    }

    #[test]
    fn test_corridor_applies_to_universal_and_variable_life() {
        for product_type in [ProductType::UniversalLife, ProductType::VariableUniversalLife] {
            let mut request = overfunded_ul_request();
            request.product_type = product_type;

            let states = project_with_states(&request);
            let rows: Vec<_> = states.iter().map(|(_, row)| row.clone()).collect();
            assert_eq!(rows, project(&request));

            let mut hit_corridor = false;
            for (state, row) in &states {
                let corridor = state.current_cash_value * 1.05;
                if corridor > request.coverage_amount {
                    hit_corridor = true;
                    assert_eq!(row.death_benefit, round_half_up(corridor), "{product_type} year {}", row.policy_year);
                } else {
                    assert_eq!(row.death_benefit, request.coverage_amount);
                }
            }
            assert!(hit_corridor, "{product_type} never reached the corridor");
        }
    }

    #[test]
    fn test_overfunded_products_without_corridor_keep_face() {
        for product_type in [ProductType::WholeLife, ProductType::IndexedUniversalLife] {
            let mut request = overfunded_ul_request();
            request.product_type = product_type;

            let states = project_with_states(&request);
            assert!(states
                .iter()
                .any(|(state, _)| state.current_cash_value * 1.05 > request.coverage_amount));
            for (_, row) in &states {
                assert_eq!(row.death_benefit, request.coverage_amount);
            }
        }
    }

    #[test]
    fn test_cumulative_premiums_are_running_sum() {
        for product_type in ALL_PRODUCTS {
            let rows = project(&request(product_type, 40, 250_000.0, 3_000.0, 95));
            let mut running = 0.0;
            let mut previous = 0.0;
            for row in &rows {
                running += row.premium_paid;
                assert_eq!(row.cumulative_premiums, running);
                assert!(row.cumulative_premiums >= previous);
                previous = row.cumulative_premiums;
            }
        }
    }

    #[test]
    fn test_fractional_premium_running_sum() {
        let request = request(ProductType::WholeLife, 35, 500_000.0, 8_500.50, 100);
        let rows = project(&request);

        let mut running = 0.0;
        for row in &rows {
            running += row.premium_paid;
            assert_eq!(row.cumulative_premiums, running, "year {}", row.policy_year);
        }
        assert_eq!(rows[0].premium_paid, 8_501.0);
        assert_eq!(rows[19].cumulative_premiums, 170_020.0);

        let summary = summarize(&rows, &request);
        assert_eq!(summary.total_premiums_paid, rows.last().unwrap().cumulative_premiums);
    }

    #[test]
    fn test_cash_values_never_negative() {
        for product_type in ALL_PRODUCTS {
            for premium in [0.0, 500.0, 12_000.0] {
                let rows = project(&request(product_type, 55, 1_000_000.0, premium, 121));
                for row in &rows {
                    assert!(row.cash_value.current >= 0.0);
                    assert!(row.cash_value.guaranteed >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let request = overfunded_ul_request();
        let first = serde_json::to_vec(&project(&request)).unwrap();
        let second = serde_json::to_vec(&project(&request)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_window_is_empty() {
        let mut request = whole_life_request();
        request.illustration_end_age = request.client_info.age;
        assert!(project(&request).is_empty());

        request.illustration_end_age = 20;
        assert!(project(&request).is_empty());
    }

    #[test]
    fn test_rows_are_sequential() {
        let rows = project(&whole_life_request());
        assert_eq!(rows.len(), 65);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.policy_year, i as u32 + 1);
            assert_eq!(row.age, 35 + i as u8);
        }
    }

    #[test]
    fn test_request_is_not_modified() {
        let request = whole_life_request();
        let before = request.clone();
        let _ = IllustrationEngine::default().illustrate(&request);
        assert_eq!(request, before);
    }
}
