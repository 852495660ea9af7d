//! Wizard-side request checks
//!
//! The projection engine accepts any request and degrades to empty or zero
//! output. Callers that want to reject malformed requests up front run them
//! through `validate` first.

use super::IllustrationRequest;
use crate::error::ValidationError;

pub const MIN_ISSUE_AGE: u8 = 18;
pub const MAX_ISSUE_AGE: u8 = 85;
pub const MIN_ILLUSTRATION_YEARS: u8 = 10;
pub const TERMINAL_AGE: u8 = 121;

/// Check a request, returning the first violation found
pub fn validate(request: &IllustrationRequest) -> Result<(), ValidationError> {
    let client = &request.client_info;

    if client.name.trim().is_empty() {
        return Err(ValidationError::MissingClientName);
    }

    if !(MIN_ISSUE_AGE..=MAX_ISSUE_AGE).contains(&client.age) {
        return Err(ValidationError::AgeOutOfRange(client.age));
    }

    if !(request.coverage_amount > 0.0) {
        return Err(ValidationError::NonPositiveCoverage(request.coverage_amount));
    }

    if !(request.premium_amount > 0.0) {
        return Err(ValidationError::NonPositivePremium(request.premium_amount));
    }

    if (request.illustration_end_age as u32) < client.age as u32 + MIN_ILLUSTRATION_YEARS as u32 {
        return Err(ValidationError::EndAgeTooEarly {
            age: client.age,
            end_age: request.illustration_end_age,
        });
    }

    if request.illustration_end_age > TERMINAL_AGE {
        return Err(ValidationError::EndAgeBeyondTerminal(request.illustration_end_age));
    }

    let assumptions = &request.assumptions;
    for (name, rate) in [
        ("current", assumptions.current_interest_rate),
        ("guaranteed", assumptions.guaranteed_interest_rate),
    ] {
        if !(rate > -100.0) {
            return Err(ValidationError::RateOutOfRange { name, rate });
        }
    }

    if !(0.0..=100.0).contains(&assumptions.expense_charges) {
        return Err(ValidationError::ExpenseChargesOutOfRange(assumptions.expense_charges));
    }

    Ok(())
}
