//! School register with nearest-school search.
//!
//! Layout follows ports and adapters: [`domain`] holds the rules and ports,
//! [`inbound`] the JSON API and HTML pages, [`outbound`] the stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
