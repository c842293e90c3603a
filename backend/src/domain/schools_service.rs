//! School register service implementing the driving ports.
//!
//! Validation happens here, before the store is touched. Store failures are
//! logged with their cause and surfaced as internal errors so adapters never
//! leak persistence details to clients.

use std::sync::Arc;

use async_trait::async_trait;
use geodesy::Coordinates;
use tracing::{debug, error};

use crate::domain::ports::{
    SchoolRepository, SchoolRepositoryError, SchoolsCommand, SchoolsQuery, StoreReadiness,
};
use crate::domain::{Error, RankedSchool, School, SchoolDraft, rank_schools};

/// Service backing both the JSON API and the HTML pages.
#[derive(Clone)]
pub struct SchoolsService<R> {
    repository: Arc<R>,
}

impl<R> SchoolsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> SchoolsService<R>
where
    R: SchoolRepository,
{
    fn map_repository_error(operation: &'static str, err: SchoolRepositoryError) -> Error {
        let internal = Error::internal(format!("school repository error: {err}"));
        error!(
            operation,
            error = %err,
            trace_id = internal.trace_id().unwrap_or_default(),
            "school store operation failed"
        );
        internal
    }

    async fn ranked(&self, origin: Coordinates) -> Result<Vec<RankedSchool>, Error> {
        let schools = self.list_schools().await?;
        Ok(rank_schools(origin, schools))
    }
}

#[async_trait]
impl<R> SchoolsCommand for SchoolsService<R>
where
    R: SchoolRepository,
{
    async fn add_school(&self, draft: SchoolDraft) -> Result<School, Error> {
        let new_school = draft.validate().map_err(|errors| {
            debug!(violations = %errors, "school submission rejected");
            Error::validation(errors.messages())
        })?;
        self.repository
            .insert(&new_school)
            .await
            .map_err(|err| Self::map_repository_error("insert", err))
    }
}

#[async_trait]
impl<R> SchoolsQuery for SchoolsService<R>
where
    R: SchoolRepository,
{
    async fn list_schools(&self) -> Result<Vec<School>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(|err| Self::map_repository_error("list_all", err))
    }

    async fn list_schools_near(&self, origin: Coordinates) -> Result<Vec<RankedSchool>, Error> {
        self.ranked(origin).await
    }

    async fn nearest_schools(&self, origin: Coordinates) -> Result<Vec<RankedSchool>, Error> {
        self.ranked(origin).await
    }
}

#[async_trait]
impl<R> StoreReadiness for SchoolsService<R>
where
    R: SchoolRepository,
{
    async fn check_ready(&self) -> Result<(), Error> {
        self.repository.ping().await.map_err(|err| {
            debug!(error = %err, "school store not ready");
            Error::service_unavailable(format!("school store unavailable: {err}"))
        })
    }
}

#[cfg(test)]
#[path = "schools_service_tests.rs"]
mod tests;
