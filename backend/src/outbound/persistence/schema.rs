//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered schools. Rows are append-only.
    schools (id) {
        id -> Int4,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 500]
        address -> Varchar,
        latitude -> Float8,
        longitude -> Float8,
        created_at -> Timestamptz,
    }
}
