//! Validated latitude/longitude pairs.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Inclusive range of valid latitudes in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Inclusive range of valid longitudes in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Reasons a latitude/longitude pair can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// Latitude was `NaN` or infinite.
    #[error("latitude must be a finite number")]
    NonFiniteLatitude,
    /// Longitude was `NaN` or infinite.
    #[error("longitude must be a finite number")]
    NonFiniteLongitude,
    /// Latitude fell outside [`LATITUDE_RANGE`].
    #[error("latitude {value} must be between -90 and 90")]
    LatitudeOutOfRange {
        /// The rejected latitude.
        value: f64,
    },
    /// Longitude fell outside [`LONGITUDE_RANGE`].
    #[error("longitude {value} must be between -180 and 180")]
    LongitudeOutOfRange {
        /// The rejected longitude.
        value: f64,
    },
}

/// A point on the globe expressed in decimal degrees.
///
/// ## Invariants
/// - `latitude` is finite and within [`LATITUDE_RANGE`].
/// - `longitude` is finite and within [`LONGITUDE_RANGE`].
///
/// Deserialisation goes through [`Coordinates::new`], so the invariants hold
/// for values read from JSON as well.
///
/// # Examples
///
/// ```
/// use geodesy::{CoordinateError, Coordinates};
///
/// let equator = Coordinates::new(0.0, 0.0)?;
/// assert_eq!(equator.latitude(), 0.0);
/// assert!(matches!(
///     Coordinates::new(95.0, 0.0),
///     Err(CoordinateError::LatitudeOutOfRange { .. })
/// ));
/// # Ok::<(), CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates", into = "RawCoordinates")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Validate and construct a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns a [`CoordinateError`] when either component is non-finite or
    /// outside its valid range. Latitude is checked first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}

/// Validate a latitude on its own.
///
/// # Errors
///
/// Returns [`CoordinateError::NonFiniteLatitude`] or
/// [`CoordinateError::LatitudeOutOfRange`].
pub fn validate_latitude(value: f64) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFiniteLatitude);
    }
    if !LATITUDE_RANGE.contains(&value) {
        return Err(CoordinateError::LatitudeOutOfRange { value });
    }
    Ok(())
}

/// Validate a longitude on its own.
///
/// # Errors
///
/// Returns [`CoordinateError::NonFiniteLongitude`] or
/// [`CoordinateError::LongitudeOutOfRange`].
pub fn validate_longitude(value: f64) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFiniteLongitude);
    }
    if !LONGITUDE_RANGE.contains(&value) {
        return Err(CoordinateError::LongitudeOutOfRange { value });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = CoordinateError;

    fn try_from(value: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(value.latitude, value.longitude)
    }
}

impl From<Coordinates> for RawCoordinates {
    fn from(value: Coordinates) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}
