//! Server-rendered pages for browser clients.
//!
//! Pages call the same driving ports as the JSON API. Failures are shown as
//! banners on the page rather than as error envelopes.

pub mod pages;

use actix_web::web;

/// Register the page routes.
///
/// Call after [`crate::inbound::http::configure`] so JSON submissions to
/// `/addSchool` reach the API handler first.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::index)
        .service(pages::add_school_form)
        .service(pages::nearest_page);
}
