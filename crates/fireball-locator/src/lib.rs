//! Brightest-fireball lookup around candidate locations.
//!
//! The pipeline for one candidate is fetch → [`normalize`] →
//! [`filter_by_bounding_box`] → [`select_brightest`]. [`FireballLocator`]
//! runs it per candidate and ranks a batch of candidates concurrently.

pub mod error;
pub mod filter;
pub mod locator;
pub mod normalize;
pub mod source;

pub use error::{BatchError, CandidateFailure, LocateError};
pub use filter::{filter_by_bounding_box, select_brightest};
pub use locator::{BatchOutcome, FireballLocator};
pub use normalize::normalize;
pub use source::PayloadSource;
