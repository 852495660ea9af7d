//! Illustration request structures, loading and validation

mod data;
pub mod loader;
mod validate;

pub use data::{
    ClientInfo, DisplayOptions, DividendScale, Gender, HealthClass, IllustrationAssumptions,
    IllustrationRequest, PaymentDuration, PremiumMode, ProductType, SmokerStatus,
};
pub use loader::{load_request, load_requests_csv, load_requests_from_reader};
pub use validate::validate;
