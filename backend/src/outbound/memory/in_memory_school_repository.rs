//! Volatile school store backed by a mutex-guarded vector.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{SchoolRepository, SchoolRepositoryError};
use crate::domain::{NewSchool, School, SchoolId};

/// In-memory [`SchoolRepository`].
///
/// Identifiers start at 1 and increase with each insert. Contents are lost
/// when the process exits.
pub struct InMemorySchoolRepository {
    clock: Arc<dyn Clock>,
    schools: Mutex<Vec<School>>,
}

impl InMemorySchoolRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            schools: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<School>>, SchoolRepositoryError> {
        self.schools
            .lock()
            .map_err(|_| SchoolRepositoryError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn insert(&self, school: &NewSchool) -> Result<School, SchoolRepositoryError> {
        let mut schools = self.lock()?;
        let next_id = schools
            .iter()
            .map(|stored| stored.id().get())
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| SchoolRepositoryError::query("school identifier space exhausted"))?;
        let stored = School::new(SchoolId::new(next_id), school.clone(), self.clock.utc());
        schools.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<School>, SchoolRepositoryError> {
        let mut schools = self.lock()?.clone();
        schools.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| right.id().cmp(&left.id()))
        });
        Ok(schools)
    }

    async fn ping(&self) -> Result<(), SchoolRepositoryError> {
        self.lock().map(|_| ())
    }
}
