//! JSON API adapter: school endpoints, health checks and error mapping.

pub mod error;
pub mod health;
pub mod schools;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register the JSON endpoints and their extractor error handlers.
///
/// The JSON `POST /addSchool` must be registered before the HTML form
/// handler for the same path.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(schools::add_school)
        .service(schools::list_schools)
        .service(schools::nearest_schools)
        .service(health::ready)
        .service(health::live);
}
