//! OpenAPI document for the JSON API.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schools::{
    AddSchoolRequest, AddSchoolResponse, LocationResponse, SchoolResponse, SchoolsResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School locator API",
        description = "Register schools and rank them by great-circle distance."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::schools::add_school,
        crate::inbound::http::schools::list_schools,
        crate::inbound::http::schools::nearest_schools,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AddSchoolRequest,
        AddSchoolResponse,
        SchoolResponse,
        SchoolsResponse,
        LocationResponse,
        ErrorBody
    )),
    tags(
        (name = "schools", description = "School register"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
