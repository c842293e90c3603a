//! Driving port for reading the school register.

use async_trait::async_trait;
use geodesy::Coordinates;

use crate::domain::{Error, RankedSchool, School};

/// Read-side use cases shared by the JSON API and the HTML pages.
#[async_trait]
pub trait SchoolsQuery: Send + Sync {
    /// Every school, newest first.
    async fn list_schools(&self) -> Result<Vec<School>, Error>;

    /// Every school annotated with its distance from `origin`, nearest first.
    async fn list_schools_near(&self, origin: Coordinates) -> Result<Vec<RankedSchool>, Error>;

    /// Ranking used by the nearest-school lookup.
    ///
    /// Returns the same ordering as [`SchoolsQuery::list_schools_near`].
    async fn nearest_schools(&self, origin: Coordinates) -> Result<Vec<RankedSchool>, Error>;
}
