//! Spatial filtering and ranking of normalized records.

use fireball_core::{BoundingBox, Coordinate, FireballRecord};

/// Keeps the records inside the inclusive box of half-width `buffer` degrees
/// around `candidate`, in their original order.
#[must_use]
pub fn filter_by_bounding_box(
    records: Vec<FireballRecord>,
    candidate: Coordinate,
    buffer: f64,
) -> Vec<FireballRecord> {
    let bbox = BoundingBox::around(candidate, buffer);
    records
        .into_iter()
        .filter(|r| bbox.contains(r.coordinate()))
        .collect()
}

/// The record with the highest energy. On a tie the earliest record wins,
/// so a server-side `-energy` sort is honoured as-is.
#[must_use]
pub fn select_brightest(records: Vec<FireballRecord>) -> Option<FireballRecord> {
    records
        .into_iter()
        .reduce(|best, r| if r.energy > best.energy { r } else { best })
}
