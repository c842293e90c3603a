//! Great-circle distance on a spherical Earth.

use std::f64::consts::PI;

use crate::Coordinates;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Largest possible great-circle distance: half the circumference.
pub const MAX_DISTANCE_KM: f64 = PI * EARTH_RADIUS_KM;

/// Haversine distance between two points in kilometres.
///
/// Inputs are degrees and are converted to radians before use. The haversine
/// term is clamped to `[0, 1]` so rounding close to antipodal points cannot
/// produce `NaN`; the result therefore always lies in
/// `0.0..=MAX_DISTANCE_KM`.
///
/// # Examples
///
/// ```
/// use geodesy::{Coordinates, haversine_km};
///
/// let point = Coordinates::new(12.5, -45.0)?;
/// assert_eq!(haversine_km(point, point), 0.0);
/// # Ok::<(), geodesy::CoordinateError>(())
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is inherently floating point"
)]
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let from_lat = from.latitude().to_radians();
    let to_lat = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    let clamped = half_chord.clamp(0.0, 1.0);
    let central_angle = 2.0 * clamped.sqrt().atan2((1.0 - clamped).sqrt());

    EARTH_RADIUS_KM * central_angle
}
