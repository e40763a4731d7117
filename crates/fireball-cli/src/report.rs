//! Human and JSON rendering of batch results.

use fireball_locator::{BatchOutcome, CandidateFailure};
use serde_json::json;

pub fn print_outcome(outcome: &BatchOutcome) {
    let record = &outcome.record;
    println!(
        "Brightest fireball: {} saw energy {} at ({}, {}) on {}",
        outcome.candidate, record.energy, record.latitude, record.longitude, record.timestamp
    );
    print_failures(&outcome.failures);
}

pub fn print_failures(failures: &[CandidateFailure]) {
    for failure in failures {
        println!("  \u{2717} {:<40} {}", failure.candidate.to_string(), failure.error);
    }
}

pub fn outcome_json(outcome: &BatchOutcome) -> serde_json::Value {
    json!({
        "candidate": outcome.candidate,
        "record": outcome.record,
        "failures": outcome
            .failures
            .iter()
            .map(|f| json!({ "candidate": f.candidate, "error": f.error.to_string() }))
            .collect::<Vec<_>>(),
    })
}
