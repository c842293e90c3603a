//! Reference location supplied as a pair of query parameters.

use geodesy::Coordinates;

use super::draft::parse_number;

/// Why a reference location could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocationQueryError {
    /// One or both parameters are absent or blank.
    #[error("latitude and longitude are required")]
    Missing,
    /// A parameter is not a finite decimal number.
    #[error("latitude or longitude is not a number")]
    NotNumeric,
    /// Both parse but lie outside the valid ranges.
    #[error("latitude or longitude is out of range")]
    OutOfRange,
}

/// Raw `latitude`/`longitude` pair from a request.
///
/// Blank values count as absent; `"0"` is a real coordinate. Numbers are
/// parsed whole, so `12abc` is not numeric even though JavaScript's
/// `parseFloat` would read it as `12`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl LocationQuery {
    pub fn new(latitude: Option<String>, longitude: Option<String>) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both parameters are present and non-blank.
    pub fn is_complete(&self) -> bool {
        is_present(self.latitude.as_deref()) && is_present(self.longitude.as_deref())
    }

    /// Resolve the location only when both parameters are given.
    ///
    /// A partial pair is treated as no location at all.
    ///
    /// # Examples
    /// ```
    /// use school_locator::domain::{LocationQuery, LocationQueryError};
    ///
    /// let partial = LocationQuery::new(Some("51.5".into()), None);
    /// assert_eq!(partial.optional(), Ok(None));
    ///
    /// let bad = LocationQuery::new(Some("north".into()), Some("0".into()));
    /// assert_eq!(bad.optional(), Err(LocationQueryError::NotNumeric));
    /// ```
    pub fn optional(&self) -> Result<Option<Coordinates>, LocationQueryError> {
        if !self.is_complete() {
            return Ok(None);
        }
        self.required().map(Some)
    }

    /// Resolve the location, failing when either parameter is missing.
    pub fn required(&self) -> Result<Coordinates, LocationQueryError> {
        if !self.is_complete() {
            return Err(LocationQueryError::Missing);
        }
        let latitude =
            parse_number(self.latitude.as_deref()).ok_or(LocationQueryError::NotNumeric)?;
        let longitude =
            parse_number(self.longitude.as_deref()).ok_or(LocationQueryError::NotNumeric)?;
        Coordinates::new(latitude, longitude).map_err(|_| LocationQueryError::OutOfRange)
    }
}

/// A parameter counts as given only when it has non-whitespace text, so
/// `?latitude=%20` is treated like an omitted parameter rather than as an
/// unparseable one.
fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}
