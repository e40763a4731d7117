use fireball_api::ApiError;
use fireball_core::{Candidate, Coordinate};
use thiserror::Error;

/// Why a single-candidate lookup failed.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Transport, status or format failure from the API client, unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A required column is missing, or a required value is null,
    /// non-numeric or non-finite. `row` is `None` for a missing column.
    #[error("malformed fireball record: {reason}")]
    MalformedRecord {
        row: Option<usize>,
        field: String,
        reason: String,
    },

    #[error("the Fireball API returned no data")]
    NoData,

    #[error("no fireball recorded within {buffer} degrees of {candidate}")]
    NoMatch { candidate: Coordinate, buffer: f64 },
}

/// A candidate whose lookup failed during a batch run.
#[derive(Debug)]
pub struct CandidateFailure {
    pub candidate: Candidate,
    pub error: LocateError,
}

/// Why a batch lookup produced no winner.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no candidate locations were given")]
    NoCandidates,

    /// Every candidate failed; each failure is kept for diagnosis.
    #[error("all {} candidate lookups failed", .failures.len())]
    AllCandidatesFailed { failures: Vec<CandidateFailure> },
}
