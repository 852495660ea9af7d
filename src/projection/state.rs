//! Year-to-year state carried through an illustration

use crate::assumptions::ActuarialParameters;
use crate::request::IllustrationRequest;
use super::rows::{round_half_up, CashValues, EndOfYearValues, YearlyProjection};

/// Accumulators carried from one policy year to the next
///
/// Cash values are kept unrounded and only rounded on the emitted row.
/// Premiums are rounded once per year before accumulating, so the running
/// total always matches the ledger's premium column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectionState {
    /// Premiums paid through the end of the last projected year
    pub cumulative_premiums: f64,

    /// Current-assumption cash value, net of surrender charges
    pub current_cash_value: f64,

    /// Guaranteed-assumption cash value
    pub guaranteed_cash_value: f64,
}

impl ProjectionState {
    /// State before the first policy year
    pub fn at_issue() -> Self {
        Self::default()
    }

    /// Project one policy year (1-indexed), returning the next state and its ledger row
    pub fn advance(
        &self,
        policy_year: u32,
        request: &IllustrationRequest,
        params: &ActuarialParameters,
    ) -> (ProjectionState, YearlyProjection) {
        let years_since_issue = policy_year.saturating_sub(1);
        let age = request.start_age() as u32 + years_since_issue;
        let product_type = request.product_type;

        let premium = params.premium_for_year(policy_year, request.premium_amount);
        let premium_paid = round_half_up(premium);
        let cumulative_premiums = self.cumulative_premiums + premium_paid;

        let mortality_cost = params.cost_of_insurance.annual_charge(
            request.coverage_amount,
            request.client_info.smoker_status,
            years_since_issue,
        );
        let expense_cost = premium * params.expense_ratio(product_type);

        let (current_cash_value, guaranteed_cash_value) = if product_type.accumulates_cash_value() {
            let net_premium = (premium - mortality_cost - expense_cost).max(0.0);
            let current_rate = request.assumptions.current_interest_rate / 100.0;
            let guaranteed_rate = request.assumptions.guaranteed_interest_rate / 100.0;

            let credited = (self.current_cash_value + net_premium) * (1.0 + current_rate);
            let guaranteed = (self.guaranteed_cash_value
                + net_premium * params.guaranteed_net_premium_factor)
                * (1.0 + guaranteed_rate);

            // Charge is taken from the carried value, not just the reported one
            let surrender_charge = credited * params.surrender_charges.get_rate(policy_year);
            ((credited - surrender_charge).max(0.0), guaranteed.max(0.0))
        } else {
            (0.0, 0.0)
        };

        let death_benefit = if product_type.has_death_benefit_corridor() {
            request
                .coverage_amount
                .max(current_cash_value * params.corridor_factor)
        } else {
            request.coverage_amount
        };

        let row = YearlyProjection {
            policy_year,
            age: age as u8,
            premium_paid,
            cumulative_premiums,
            death_benefit: round_half_up(death_benefit),
            cash_value: CashValues {
                guaranteed: round_half_up(guaranteed_cash_value),
                current: round_half_up(current_cash_value),
            },
            net_amount: round_half_up(death_benefit - current_cash_value),
            end_of_year_values: EndOfYearValues {
                surrender_value: round_half_up(current_cash_value * params.surrender_value_factor),
                paid_up_value: round_half_up(current_cash_value * params.paid_up_factor),
            },
        };

        let next = ProjectionState {
            cumulative_premiums,
            current_cash_value,
            guaranteed_cash_value,
        };

        (next, row)
    }
}
