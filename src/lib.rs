//! Illustration Engine - year-by-year life insurance illustrations
//!
//! This library provides:
//! - Ledger projections of premiums, guaranteed/current cash values and death benefits
//! - Summary metrics (break-even year, effective yield, key-age values)
//! - Tunable actuarial parameters and a built-in product catalog
//! - Illustration result lifecycle and parallel batch running

pub mod error;
pub mod request;
pub mod assumptions;
pub mod projection;
pub mod illustration;
pub mod report;

// Re-export commonly used types
pub use error::{IllustrationError, ValidationError};
pub use request::{IllustrationRequest, ProductType};
pub use assumptions::{ActuarialParameters, ProductCatalog};
pub use projection::{project, summarize, IllustrationEngine, IllustrationSummary, YearlyProjection};
pub use illustration::{IllustrationResult, IllustrationRunner, IllustrationStatus};
