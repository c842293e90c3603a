//! Process-local adapters used when no database is configured.

mod in_memory_school_repository;

pub use in_memory_school_repository::InMemorySchoolRepository;
