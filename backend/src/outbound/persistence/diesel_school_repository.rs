//! PostgreSQL-backed school store.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use geodesy::Coordinates;

use crate::domain::ports::{SchoolRepository, SchoolRepositoryError};
use crate::domain::{NewSchool, School, SchoolId};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{NewSchoolRow, SchoolRow};
use super::pool::DbPool;
use super::schema::schools;

/// Diesel implementation of [`SchoolRepository`].
///
/// Each call checks out one pooled connection, runs a single statement and
/// releases the connection when it returns.
#[derive(Clone)]
pub struct DieselSchoolRepository {
    pool: DbPool,
}

impl DieselSchoolRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_school(row: SchoolRow) -> Result<School, SchoolRepositoryError> {
    let location = Coordinates::new(row.latitude, row.longitude).map_err(|err| {
        SchoolRepositoryError::query(format!("school {} has invalid coordinates: {err}", row.id))
    })?;
    let details = NewSchool::new(&row.name, &row.address, location).map_err(|err| {
        SchoolRepositoryError::query(format!("school {} is incomplete: {err}", row.id))
    })?;
    Ok(School::new(SchoolId::new(row.id), details, row.created_at))
}

#[async_trait]
impl SchoolRepository for DieselSchoolRepository {
    async fn insert(&self, school: &NewSchool) -> Result<School, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewSchoolRow {
            name: school.name(),
            address: school.address(),
            latitude: school.location().latitude(),
            longitude: school.location().longitude(),
        };

        let row = diesel::insert_into(schools::table)
            .values(&new_row)
            .returning(SchoolRow::as_returning())
            .get_result::<SchoolRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "schools insert"))?;

        row_to_school(row)
    }

    async fn list_all(&self) -> Result<Vec<School>, SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SchoolRow> = schools::table
            .order((schools::created_at.desc(), schools::id.desc()))
            .select(SchoolRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "schools list"))?;

        rows.into_iter().map(row_to_school).collect()
    }

    async fn ping(&self) -> Result<(), SchoolRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "store ping"))
    }
}
