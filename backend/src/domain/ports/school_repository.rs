//! Driven port for the school record store.

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use geodesy::Coordinates;

use crate::domain::{NewSchool, School, SchoolId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by school store adapters.
    pub enum SchoolRepositoryError {
        /// No connection could be obtained (pool exhausted, timeout, refused).
        Connection { message: String } => "school repository connection failed: {message}",
        /// A statement failed or returned unusable data.
        Query { message: String } => "school repository query failed: {message}",
    }
}

/// Persistence for school records.
///
/// Records are append-only: there is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Store a validated school and return it with its assigned identity.
    async fn insert(&self, school: &NewSchool) -> Result<School, SchoolRepositoryError>;

    /// Every stored school, newest first (ties broken by descending id).
    async fn list_all(&self) -> Result<Vec<School>, SchoolRepositoryError>;

    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), SchoolRepositoryError>;
}

/// Stateless store returning a fixed set of schools.
///
/// Inserts are acknowledged with the next identifier but not retained.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSchoolRepository;

impl FixtureSchoolRepository {
    const FIXTURES: [(i32, &'static str, &'static str, f64, f64); 3] = [
        (3, "Thames Primary", "1 Embankment, London", 51.5074, -0.1278),
        (2, "Lycee Rive Gauche", "5 Rue de Rivoli, Paris", 48.8566, 2.3522),
        (1, "Harbour High", "20 Water Street, New York", 40.7128, -74.0060),
    ];

    fn fixture_schools() -> Result<Vec<School>, SchoolRepositoryError> {
        let now = Utc::now();
        Self::FIXTURES
            .iter()
            .enumerate()
            .map(|(age, &(id, name, address, latitude, longitude))| {
                // Compile-time data; a failure here is a fixture regression.
                let location = Coordinates::new(latitude, longitude).map_err(|err| {
                    SchoolRepositoryError::query(format!("invalid fixture coordinates: {err}"))
                })?;
                let details = NewSchool::new(name, address, location).map_err(|err| {
                    SchoolRepositoryError::query(format!("invalid fixture school: {err}"))
                })?;
                let minutes = i64::try_from(age).unwrap_or_default();
                let created_at = now - TimeDelta::minutes(minutes);
                Ok(School::new(SchoolId::new(id), details, created_at))
            })
            .collect()
    }
}

#[async_trait]
impl SchoolRepository for FixtureSchoolRepository {
    async fn insert(&self, school: &NewSchool) -> Result<School, SchoolRepositoryError> {
        let next_id = i32::try_from(Self::FIXTURES.len() + 1).unwrap_or(i32::MAX);
        Ok(School::new(SchoolId::new(next_id), school.clone(), Utc::now()))
    }

    async fn list_all(&self) -> Result<Vec<School>, SchoolRepositoryError> {
        Self::fixture_schools()
    }

    async fn ping(&self) -> Result<(), SchoolRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_lists_newest_first() {
        let schools = FixtureSchoolRepository
            .list_all()
            .await
            .expect("fixture schools");

        let ids: Vec<i32> = schools.iter().map(|s| s.id().get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(
            schools
                .windows(2)
                .all(|pair| pair[0].created_at() >= pair[1].created_at())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_insert_assigns_next_id() {
        let location = Coordinates::new(0.0, 0.0).expect("valid coordinates");
        let draft = NewSchool::new("Null Island School", "0 Meridian", location)
            .expect("valid school");

        let stored = FixtureSchoolRepository
            .insert(&draft)
            .await
            .expect("insert succeeds");

        assert_eq!(stored.id(), SchoolId::new(4));
        assert_eq!(stored.name(), "Null Island School");
    }

    #[rstest]
    fn connection_errors_format_their_message() {
        let err = SchoolRepositoryError::connection("timed out after 2000ms");
        assert_eq!(
            err.to_string(),
            "school repository connection failed: timed out after 2000ms"
        );
    }
}
