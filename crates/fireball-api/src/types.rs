//! Fireball API response types.
//!
//! The API answers with a column-oriented table:
//!
//! ```json
//! {"signature": {"source": "NASA/JPL Fireball Data API", "version": "1.0"},
//!  "count": "2",
//!  "fields": ["date", "energy", "impact-e", "lat", "lat-dir", "lon", "lon-dir", "alt", "vel"],
//!  "data": [["2018-12-18 23:48:20", "13000", "173", "56.9", "N", "172.4", "E", "25.6", "32.0"], ...]}
//! ```
//!
//! When nothing matches the query, `count` is `"0"` and both `fields` and
//! `data` are omitted. Individual cells may be `null`.

use serde::Deserialize;

/// Provenance block attached to every successful response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Signature {
    pub source: String,
    pub version: String,
}

/// The raw tabular payload exactly as the API returned it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawPayload {
    #[serde(default)]
    pub signature: Option<Signature>,
    /// Number of rows as a string, mirroring the wire format.
    #[serde(default)]
    pub count: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    #[serde(default)]
    pub data: Option<Vec<Vec<Option<String>>>>,
}

impl RawPayload {
    /// Builds a payload from column names and rows of present values.
    #[must_use]
    pub fn from_table<F, R, C>(fields: F, rows: R) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let data: Vec<Vec<Option<String>>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|v| Some(v.into())).collect())
            .collect();
        Self {
            signature: None,
            count: Some(data.len().to_string()),
            fields: Some(fields),
            data: Some(data),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        self.fields.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        self.data.as_deref().unwrap_or_default()
    }

    /// `true` when the payload carries no usable table: missing columns,
    /// missing data, or zero rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_none() || self.rows().is_empty()
    }

    /// Position of `name` among the columns.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.fields().iter().position(|f| f == name)
    }

    /// Checks that every row has exactly one value per column.
    ///
    /// # Errors
    ///
    /// Returns a description of the first row whose width differs from the
    /// column count.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.data.is_some() && self.fields.is_none() {
            return Err("response has \"data\" but no \"fields\"".to_string());
        }
        let width = self.fields().len();
        match self
            .rows()
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            Some((index, row)) => Err(format!(
                "row {index} has {} values but there are {width} columns",
                row.len()
            )),
            None => Ok(()),
        }
    }
}
