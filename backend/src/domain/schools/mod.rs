//! School records and the rules that govern them.
//!
//! A [`SchoolDraft`] is whatever a client submitted. Validation turns it into
//! a [`NewSchool`], the only shape the record store accepts. Persisted
//! records come back as [`School`] values stamped with an identifier and a
//! creation time; they are never modified afterwards.

mod draft;
mod location_query;

use std::fmt;

use chrono::{DateTime, Utc};
use geodesy::{Coordinates, Located, Ranked};

use self::draft::{address_violation, name_violation};
pub use self::draft::{
    MAX_ADDRESS_CHARS, MAX_NAME_CHARS, SchoolDraft, SchoolValidationError, SchoolValidationErrors,
};
pub use self::location_query::{LocationQuery, LocationQueryError};

/// Store-assigned school identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchoolId(i32);

impl SchoolId {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated school that has not been stored yet.
///
/// Name and address are trimmed, non-empty and within [`MAX_NAME_CHARS`] /
/// [`MAX_ADDRESS_CHARS`]; the location is within the valid coordinate ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    name: String,
    address: String,
    location: Coordinates,
}

impl NewSchool {
    /// Build from already-typed parts, trimming the text fields.
    ///
    /// # Examples
    /// ```
    /// use geodesy::Coordinates;
    /// use school_locator::domain::NewSchool;
    ///
    /// let location = Coordinates::new(51.5, -0.12).unwrap();
    /// let school = NewSchool::new("  Hill School ", "1 Road", location).unwrap();
    /// assert_eq!(school.name(), "Hill School");
    /// assert!(NewSchool::new("   ", "1 Road", location).is_err());
    /// ```
    pub fn new(
        name: impl AsRef<str>,
        address: impl AsRef<str>,
        location: Coordinates,
    ) -> Result<Self, SchoolValidationErrors> {
        let name = name.as_ref().trim();
        let address = address.as_ref().trim();
        let errors: Vec<SchoolValidationError> = name_violation(name)
            .into_iter()
            .chain(address_violation(address))
            .collect();
        if !errors.is_empty() {
            return Err(SchoolValidationErrors::new(errors));
        }
        Ok(Self {
            name: name.to_owned(),
            address: address.to_owned(),
            location,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn location(&self) -> Coordinates {
        self.location
    }
}

/// A persisted school record.
#[derive(Debug, Clone, PartialEq)]
pub struct School {
    id: SchoolId,
    name: String,
    address: String,
    location: Coordinates,
    created_at: DateTime<Utc>,
}

impl School {
    /// Combine validated details with the identity assigned by the store.
    pub fn new(id: SchoolId, details: NewSchool, created_at: DateTime<Utc>) -> Self {
        let NewSchool {
            name,
            address,
            location,
        } = details;
        Self {
            id,
            name,
            address,
            location,
            created_at,
        }
    }

    pub fn id(&self) -> SchoolId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn location(&self) -> Coordinates {
        self.location
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Located for School {
    fn coordinates(&self) -> Coordinates {
        self.location
    }
}

/// A school annotated with its distance from a reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSchool {
    school: School,
    distance_km: f64,
}

impl RankedSchool {
    pub fn school(&self) -> &School {
        &self.school
    }

    /// Great-circle distance in kilometres; never negative.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

impl From<Ranked<School>> for RankedSchool {
    fn from(ranked: Ranked<School>) -> Self {
        let (school, distance_km) = ranked.into_parts();
        Self {
            school,
            distance_km,
        }
    }
}

/// Rank `schools` by distance from `origin`, nearest first.
pub fn rank_schools(origin: Coordinates, schools: Vec<School>) -> Vec<RankedSchool> {
    geodesy::rank_by_distance(origin, schools)
        .into_iter()
        .map(RankedSchool::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    fn school(id: i32, name: &str, latitude: f64, longitude: f64) -> School {
        let location = Coordinates::new(latitude, longitude).expect("valid coordinates");
        let details = NewSchool::new(name, "Somewhere", location).expect("valid school");
        let created_at = Utc
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        School::new(SchoolId::new(id), details, created_at)
    }

    #[fixture]
    fn london() -> Coordinates {
        Coordinates::new(51.5074, -0.1278).expect("valid origin")
    }

    #[fixture]
    fn schools() -> Vec<School> {
        vec![
            school(1, "Paris Lycee", 48.8566, 2.3522),
            school(2, "Oxford Academy", 51.7520, -1.2577),
            school(3, "Brooklyn High", 40.7128, -74.0060),
        ]
    }

    #[rstest]
    fn new_school_trims_text_fields() {
        let location = Coordinates::new(0.0, 0.0).expect("valid coordinates");
        let school = NewSchool::new("  Equator Primary  ", "\t1 Line Road ", location)
            .expect("valid school");

        assert_eq!(school.name(), "Equator Primary");
        assert_eq!(school.address(), "1 Line Road");
    }

    #[rstest]
    fn new_school_reports_both_blank_fields() {
        let location = Coordinates::new(0.0, 0.0).expect("valid coordinates");
        let err = NewSchool::new(" ", "", location).expect_err("blank fields");

        assert_eq!(
            err.messages(),
            vec!["School name is required", "Address is required"]
        );
    }

    #[rstest]
    fn ranking_orders_schools_nearest_first(london: Coordinates, schools: Vec<School>) {
        let ranked = rank_schools(london, schools);
        let ids: Vec<i32> = ranked.iter().map(|r| r.school().id().get()).collect();

        assert_eq!(ids, vec![2, 1, 3]);
        assert!(ranked.iter().all(|r| r.distance_km() >= 0.0));
    }

    #[rstest]
    fn ranking_ignores_input_order(london: Coordinates, schools: Vec<School>) {
        let forward = rank_schools(london, schools.clone());
        let reversed = rank_schools(london, schools.into_iter().rev().collect());

        assert_eq!(forward, reversed);
    }

    #[rstest]
    fn paris_is_roughly_343_km_from_london(london: Coordinates, schools: Vec<School>) {
        let ranked = rank_schools(london, schools);
        let paris = ranked
            .iter()
            .find(|r| r.school().id() == SchoolId::new(1))
            .expect("paris ranked");

        assert!((343.0..=344.0).contains(&paris.distance_km()));
    }
}
