//! Internal Diesel row structs. Never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::schools;

/// Row read from the `schools` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SchoolRow {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

/// Insertable school; `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schools)]
pub(crate) struct NewSchoolRow<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}
