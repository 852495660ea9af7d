//! Illustration results and batch runner
//!
//! An `IllustrationResult` is the envelope handed to the presentation and
//! persistence collaborators: the request, its ledger, its summary and the
//! status/audit fields those collaborators drive. The runner projects many
//! independent requests in parallel with one shared engine.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{IllustrationError, Result};
use crate::projection::{IllustrationEngine, IllustrationSummary, YearlyProjection};
use crate::request::{validate, IllustrationRequest};

/// Compliance disclosures attached to every new illustration
pub const DEFAULT_DISCLOSURES: [&str; 4] = [
    "This illustration is not a contract. Non-guaranteed values are based on current assumptions and are subject to change.",
    "Guaranteed values assume the guaranteed interest rate is credited for all years shown.",
    "Surrender values reflect applicable surrender charges in the early policy years.",
    "Actual results may be more or less favorable than those shown.",
];

/// Lifecycle of an illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllustrationStatus {
    Draft,
    Finalized,
    Presented,
    Archived,
}

impl IllustrationStatus {
    /// Check whether the status may move to `next`
    pub fn can_transition_to(&self, next: IllustrationStatus) -> bool {
        use IllustrationStatus::*;
        matches!(
            (*self, next),
            (Draft, Finalized)
                | (Finalized, Draft)
                | (Finalized, Presented)
                | (Draft, Archived)
                | (Finalized, Archived)
                | (Presented, Archived)
        )
    }
}

/// A projected illustration with its presentation metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IllustrationResult {
    pub id: String,
    pub request: IllustrationRequest,
    pub projections: Vec<YearlyProjection>,
    pub summary: IllustrationSummary,
    pub status: IllustrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub disclosures: Vec<String>,
}

impl IllustrationResult {
    /// Project a request into a new draft illustration
    pub fn new(
        id: impl Into<String>,
        request: IllustrationRequest,
        engine: &IllustrationEngine,
        created_by: impl Into<String>,
    ) -> Self {
        let (projections, summary) = engine.illustrate(&request);
        let now = Utc::now();
        Self {
            id: id.into(),
            request,
            projections,
            summary,
            status: IllustrationStatus::Draft,
            created_at: now,
            updated_at: now,
            created_by: created_by.into(),
            disclosures: DEFAULT_DISCLOSURES.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Move to a new status
    pub fn transition_to(&mut self, next: IllustrationStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(IllustrationError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        log::debug!("illustration {}: {:?} -> {:?}", self.id, self.status, next);
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replace the request after an edit, re-project and return to draft
    pub fn recalculate(&mut self, request: IllustrationRequest, engine: &IllustrationEngine) -> Result<()> {
        if self.status == IllustrationStatus::Archived {
            return Err(IllustrationError::Archived);
        }
        let (projections, summary) = engine.illustrate(&request);
        self.request = request;
        self.projections = projections;
        self.summary = summary;
        self.status = IllustrationStatus::Draft;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Ledger and summary for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    pub projections: Vec<YearlyProjection>,
    pub summary: IllustrationSummary,
}

/// Runs illustrations against one engine
///
/// # Example
/// ```ignore
/// let runner = IllustrationRunner::new(IllustrationEngine::default()).strict(true);
/// let outputs = runner.run_batch(&requests);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IllustrationRunner {
    engine: IllustrationEngine,
    strict: bool,
}

impl IllustrationRunner {
    pub fn new(engine: IllustrationEngine) -> Self {
        Self { engine, strict: false }
    }

    /// Reject malformed requests instead of projecting degenerate ledgers
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn engine(&self) -> &IllustrationEngine {
        &self.engine
    }

    /// Run a single illustration
    pub fn run(&self, request: &IllustrationRequest) -> Result<RunOutput> {
        if self.strict {
            validate(request)?;
        }
        let (projections, summary) = self.engine.illustrate(request);
        Ok(RunOutput { projections, summary })
    }

    /// Run many illustrations in parallel; output order follows input order
    pub fn run_batch(&self, requests: &[IllustrationRequest]) -> Vec<Result<RunOutput>> {
        log::info!("running {} illustrations", requests.len());
        let outputs: Vec<Result<RunOutput>> = requests.par_iter().map(|r| self.run(r)).collect();

        let rejected = outputs.iter().filter(|o| o.is_err()).count();
        if rejected > 0 {
            log::warn!("{} of {} illustration requests rejected", rejected, requests.len());
        }
        outputs
    }
}
