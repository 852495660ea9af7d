//! Error types for request loading, validation and result lifecycle

use thiserror::Error;

use crate::illustration::IllustrationStatus;

/// A request that fails the wizard-side checks
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("client name is empty")]
    MissingClientName,

    #[error("client age {0} is outside the illustratable range 18-85")]
    AgeOutOfRange(u8),

    #[error("coverage amount must be positive, got {0}")]
    NonPositiveCoverage(f64),

    #[error("premium amount must be positive, got {0}")]
    NonPositivePremium(f64),

    #[error("illustration end age {end_age} must be at least 10 years past client age {age}")]
    EndAgeTooEarly { age: u8, end_age: u8 },

    #[error("illustration end age {0} exceeds terminal age 121")]
    EndAgeBeyondTerminal(u8),

    #[error("{name} interest rate {rate}% is at or below -100%")]
    RateOutOfRange { name: &'static str, rate: f64 },

    #[error("expense charges {0}% must be between 0 and 100")]
    ExpenseChargesOutOfRange(f64),
}

/// Errors raised outside the projection itself
#[derive(Debug, Error)]
pub enum IllustrationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown {column}: {value}")]
    UnknownValue { column: &'static str, value: String },

    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("cannot move illustration from {from:?} to {to:?}")]
    InvalidTransition {
        from: IllustrationStatus,
        to: IllustrationStatus,
    },

    #[error("illustration is archived and cannot be recalculated")]
    Archived,
}

pub type Result<T> = std::result::Result<T, IllustrationError>;
