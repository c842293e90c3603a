//! Coordinate primitives and great-circle distance ranking.
//!
//! The crate is deliberately free of I/O so the distance computation can be
//! shared by every adapter that needs it:
//!
//! - [`Coordinates`] holds a validated WGS84 latitude/longitude pair in
//!   degrees.
//! - [`haversine_km`] computes the great-circle distance between two points on
//!   a sphere of radius [`EARTH_RADIUS_KM`].
//! - [`rank_by_distance`] annotates any [`Located`] items with their distance
//!   from an origin and returns them nearest first, keeping input order for
//!   ties.
//!
//! # Examples
//!
//! ```
//! use geodesy::{Coordinates, haversine_km};
//!
//! let london = Coordinates::new(51.5074, -0.1278)?;
//! let paris = Coordinates::new(48.8566, 2.3522)?;
//! let km = haversine_km(london, paris);
//! assert!((343.0..344.0).contains(&km));
//! # Ok::<(), geodesy::CoordinateError>(())
//! ```

mod coordinates;
mod distance;
mod ranking;

pub use coordinates::{
    CoordinateError, Coordinates, LATITUDE_RANGE, LONGITUDE_RANGE, validate_latitude,
    validate_longitude,
};
pub use distance::{EARTH_RADIUS_KM, MAX_DISTANCE_KM, haversine_km};
pub use ranking::{Located, Ranked, rank_by_distance};
