//! Conversion of the raw API table into [`FireballRecord`]s with signed
//! coordinates.

use fireball_api::RawPayload;
use fireball_core::FireballRecord;

use crate::error::LocateError;

pub const DATE_FIELD: &str = "date";
pub const ENERGY_FIELD: &str = "energy";
pub const LAT_FIELD: &str = "lat";
pub const LAT_DIR_FIELD: &str = "lat-dir";
pub const LON_FIELD: &str = "lon";
pub const LON_DIR_FIELD: &str = "lon-dir";

/// Column positions of the fields a [`FireballRecord`] is built from.
struct Columns {
    date: usize,
    energy: usize,
    lat: usize,
    lat_dir: usize,
    lon: usize,
    lon_dir: usize,
}

impl Columns {
    fn resolve(payload: &RawPayload) -> Result<Self, LocateError> {
        let find = |name: &str| {
            payload
                .column_index(name)
                .ok_or_else(|| LocateError::MalformedRecord {
                    row: None,
                    field: name.to_string(),
                    reason: format!("required column \"{name}\" is missing"),
                })
        };

        Ok(Self {
            date: find(DATE_FIELD)?,
            energy: find(ENERGY_FIELD)?,
            lat: find(LAT_FIELD)?,
            lat_dir: find(LAT_DIR_FIELD)?,
            lon: find(LON_FIELD)?,
            lon_dir: find(LON_DIR_FIELD)?,
        })
    }

    fn record(&self, row: usize, values: &[Option<String>]) -> Result<FireballRecord, LocateError> {
        let cell = |index: usize| values.get(index).and_then(|v| v.as_deref());

        let timestamp = cell(self.date)
            .ok_or_else(|| malformed(row, DATE_FIELD, "value is missing".to_string()))?
            .to_string();
        let energy = parse_number(row, ENERGY_FIELD, cell(self.energy))?;
        let latitude = apply_direction(
            parse_number(row, LAT_FIELD, cell(self.lat))?,
            cell(self.lat_dir),
            "S",
        );
        let longitude = apply_direction(
            parse_number(row, LON_FIELD, cell(self.lon))?,
            cell(self.lon_dir),
            "W",
        );

        Ok(FireballRecord {
            timestamp,
            energy,
            latitude,
            longitude,
        })
    }
}

/// Normalizes every row of `payload`, keeping row order.
///
/// Energy, latitude and longitude are parsed as `f64`. Latitude is negated
/// when `lat-dir` is `S`, longitude when `lon-dir` is `W`; any other
/// direction, or none, leaves the magnitude positive. Columns other than the
/// six used here are ignored.
///
/// # Errors
///
/// Returns [`LocateError::MalformedRecord`] if one of the six columns is
/// absent, or a date, energy, latitude or longitude value is null,
/// non-numeric or non-finite.
pub fn normalize(payload: &RawPayload) -> Result<Vec<FireballRecord>, LocateError> {
    let columns = Columns::resolve(payload)?;
    payload
        .rows()
        .iter()
        .enumerate()
        .map(|(row, values)| columns.record(row, values))
        .collect()
}

/// Signs `magnitude` from its compass flag: `negative_flag` gives a value
/// `<= 0`, anything else `>= 0`. The absolute value is always kept.
fn apply_direction(magnitude: f64, direction: Option<&str>, negative_flag: &str) -> f64 {
    if direction.map(str::trim) == Some(negative_flag) {
        -magnitude.abs()
    } else {
        magnitude.abs()
    }
}

fn parse_number(row: usize, field: &str, value: Option<&str>) -> Result<f64, LocateError> {
    let raw = value.ok_or_else(|| malformed(row, field, "value is missing".to_string()))?;
    let parsed = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| malformed(row, field, format!("\"{raw}\" is not a number ({e})")))?;
    if !parsed.is_finite() {
        return Err(malformed(row, field, format!("\"{raw}\" is not finite")));
    }
    Ok(parsed)
}

fn malformed(row: usize, field: &str, detail: String) -> LocateError {
    LocateError::MalformedRecord {
        row: Some(row),
        field: field.to_string(),
        reason: format!("row {row}, field \"{field}\": {detail}"),
    }
}
