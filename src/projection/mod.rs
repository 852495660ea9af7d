//! Illustration projection: yearly ledger and summary metrics

mod state;
mod engine;
mod rows;
mod summary;
pub mod irr;

pub use state::ProjectionState;
pub use engine::{project, summarize, IllustrationEngine};
pub use rows::{round_half_up, CashValues, EndOfYearValues, YearlyProjection};
pub use summary::{summarize_with, IllustrationSummary, YieldMethod, KEY_AGE};
pub use irr::{approximate_effective_yield, calculate_irr};
