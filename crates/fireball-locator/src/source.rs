//! The fetch capability the locator is composed with.

use std::future::Future;

use fireball_api::{ApiError, FireballClient, RawPayload};
use fireball_core::QueryParams;

/// Anything that can produce a fresh fireball table for a parameter set.
///
/// [`FireballClient`] is the production implementation; tests plug in
/// canned payloads.
pub trait PayloadSource {
    fn fetch_payload(
        &self,
        params: &QueryParams,
    ) -> impl Future<Output = Result<RawPayload, ApiError>> + Send;
}

impl PayloadSource for FireballClient {
    fn fetch_payload(
        &self,
        params: &QueryParams,
    ) -> impl Future<Output = Result<RawPayload, ApiError>> + Send {
        self.fetch(params)
    }
}
