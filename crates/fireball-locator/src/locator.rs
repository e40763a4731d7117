//! Per-candidate lookup and concurrent batch ranking.

use fireball_api::FireballClient;
use fireball_core::{Candidate, Coordinate, FireballRecord, QueryParams, DEFAULT_BUFFER_DEGREES};
use futures::stream::{self, StreamExt};

use crate::error::{BatchError, CandidateFailure, LocateError};
use crate::filter::{filter_by_bounding_box, select_brightest};
use crate::normalize::normalize;
use crate::source::PayloadSource;

/// Winner of a batch lookup, plus the candidates that could not be answered.
#[derive(Debug)]
pub struct BatchOutcome {
    pub candidate: Candidate,
    pub record: FireballRecord,
    pub failures: Vec<CandidateFailure>,
}

/// Finds the brightest fireball around arbitrary locations.
///
/// Holds a fetch capability, a fixed parameter set and a buffer; none of them
/// change after construction, so one locator can serve any number of
/// concurrent lookups. Every lookup fetches fresh data.
#[derive(Debug, Clone)]
pub struct FireballLocator<S = FireballClient> {
    source: S,
    params: QueryParams,
    buffer: f64,
    max_concurrent: Option<usize>,
}

impl<S: PayloadSource> FireballLocator<S> {
    /// Creates a locator with the default 15-degree buffer and one worker per
    /// candidate in batch mode.
    #[must_use]
    pub fn new(source: S, params: QueryParams) -> Self {
        Self {
            source,
            params,
            buffer: DEFAULT_BUFFER_DEGREES,
            max_concurrent: None,
        }
    }

    #[must_use]
    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer;
        self
    }

    /// Bounds the number of lookups in flight during
    /// [`FireballLocator::locate_brightest_among`]. `0` is treated as `1`.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = Some(max_concurrent.max(1));
        self
    }

    #[must_use]
    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    /// Brightest fireball within the buffer around `candidate`.
    ///
    /// # Errors
    ///
    /// - [`LocateError::Api`] when the fetch fails, unchanged from the client.
    /// - [`LocateError::NoData`] when the API returns no table.
    /// - [`LocateError::MalformedRecord`] when a row cannot be normalized.
    /// - [`LocateError::NoMatch`] when no record falls inside the box.
    pub async fn locate(&self, candidate: Coordinate) -> Result<FireballRecord, LocateError> {
        let payload = self.source.fetch_payload(&self.params).await?;
        if payload.is_empty() {
            return Err(LocateError::NoData);
        }

        let records = normalize(&payload)?;
        let total = records.len();
        let nearby = filter_by_bounding_box(records, candidate, self.buffer);
        tracing::debug!(
            %candidate,
            buffer = self.buffer,
            total,
            nearby = nearby.len(),
            "filtered fireball records"
        );

        select_brightest(nearby).ok_or(LocateError::NoMatch {
            candidate,
            buffer: self.buffer,
        })
    }

    /// Runs [`FireballLocator::locate`] for every candidate concurrently and
    /// returns the brightest result.
    ///
    /// A failed candidate is logged and reported in
    /// [`BatchOutcome::failures`] but does not abort the batch. Energy ties go
    /// to the candidate listed first.
    ///
    /// # Errors
    ///
    /// - [`BatchError::NoCandidates`] for an empty slice.
    /// - [`BatchError::AllCandidatesFailed`] when no lookup succeeded.
    pub async fn locate_brightest_among(
        &self,
        candidates: &[Candidate],
    ) -> Result<BatchOutcome, BatchError> {
        if candidates.is_empty() {
            return Err(BatchError::NoCandidates);
        }

        let pool = self.max_concurrent.unwrap_or(candidates.len()).max(1);
        tracing::info!(
            candidates = candidates.len(),
            pool,
            "looking up brightest fireballs"
        );

        let mut results: Vec<(usize, Result<FireballRecord, LocateError>)> =
            stream::iter(candidates.iter().enumerate())
                .map(|(index, candidate)| async move {
                    (index, self.locate(candidate.coordinate).await)
                })
                .buffer_unordered(pool)
                .collect()
                .await;
        results.sort_by_key(|(index, _)| *index);

        let mut best: Option<(usize, FireballRecord)> = None;
        let mut failures = Vec::new();

        for (index, result) in results {
            let candidate = &candidates[index];
            match result {
                Ok(record) => {
                    tracing::info!(
                        %candidate,
                        energy = record.energy,
                        latitude = record.latitude,
                        longitude = record.longitude,
                        "brightest nearby fireball"
                    );
                    if best
                        .as_ref()
                        .is_none_or(|(_, current)| record.energy > current.energy)
                    {
                        best = Some((index, record));
                    }
                }
                Err(error) => {
                    tracing::warn!(%candidate, error = %error, "fireball lookup failed");
                    failures.push(CandidateFailure {
                        candidate: candidate.clone(),
                        error,
                    });
                }
            }
        }

        match best {
            Some((index, record)) => Ok(BatchOutcome {
                candidate: candidates[index].clone(),
                record,
                failures,
            }),
            None => Err(BatchError::AllCandidatesFailed { failures }),
        }
    }
}
