//! Client for the NASA/JPL Fireball Data API.

pub mod client;
pub mod error;
pub mod types;

pub use client::{build_query, FireballClient};
pub use error::ApiError;
pub use types::{RawPayload, Signature};
