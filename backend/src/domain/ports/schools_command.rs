//! Driving port for changes to the school register.

use async_trait::async_trait;

use crate::domain::{Error, School, SchoolDraft};

/// Use case for registering schools.
#[async_trait]
pub trait SchoolsCommand: Send + Sync {
    /// Validate and store a submission.
    ///
    /// Validation failures return [`Error`] with code `InvalidRequest` and one
    /// violation per broken rule.
    async fn add_school(&self, draft: SchoolDraft) -> Result<School, Error>;
}
