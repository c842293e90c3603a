//! JSON API for the school register.
//!
//! ```text
//! POST /addSchool            {"name":"...","address":"...","latitude":51.5,"longitude":-0.12}
//! GET  /listSchools[?latitude=&longitude=]
//! GET  /api/nearest?latitude=&longitude=
//! ```
//!
//! `POST /addSchool` is shared with the HTML form; this handler only matches
//! requests whose `Content-Type` is `application/json`.

use actix_web::guard::GuardContext;
use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use geodesy::Coordinates;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, LocationQuery, LocationQueryError, RankedSchool, School, SchoolDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Confirmation message for a stored school.
pub const SCHOOL_ADDED_MESSAGE: &str = "School added successfully";

/// Body of `POST /addSchool` for JSON clients.
///
/// Fields are taken as raw JSON so that every rule is checked even when a
/// value has the wrong type. Coordinates may be JSON numbers or numeric
/// strings; a name or address that is not a string counts as missing.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddSchoolRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Riverside Primary")]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "12 Mill Lane")]
    pub address: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 51.5074)]
    pub latitude: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = -0.1278)]
    pub longitude: Option<Value>,
}

impl From<AddSchoolRequest> for SchoolDraft {
    fn from(request: AddSchoolRequest) -> Self {
        Self {
            name: string_field(request.name),
            address: string_field(request.address),
            latitude: coordinate_text(request.latitude),
            longitude: coordinate_text(request.longitude),
        }
    }
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        _ => None,
    }
}

/// Render a JSON coordinate as text, keeping `0` distinct from absent.
fn coordinate_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

/// Reference location query parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocationParams {
    /// Latitude in decimal degrees, -90 to 90.
    pub latitude: Option<String>,
    /// Longitude in decimal degrees, -180 to 180.
    pub longitude: Option<String>,
}

impl From<LocationParams> for LocationQuery {
    fn from(params: LocationParams) -> Self {
        LocationQuery::new(params.latitude, params.longitude)
    }
}

/// Successful `POST /addSchool` response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddSchoolResponse {
    pub success: bool,
    #[schema(example = "School added successfully")]
    pub message: String,
    pub school_id: i32,
}

/// A school as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    /// Kilometres from the requested location, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl From<School> for SchoolResponse {
    fn from(school: School) -> Self {
        Self {
            id: school.id().get(),
            name: school.name().to_owned(),
            address: school.address().to_owned(),
            latitude: school.location().latitude(),
            longitude: school.location().longitude(),
            created_at: school.created_at(),
            distance: None,
        }
    }
}

impl From<RankedSchool> for SchoolResponse {
    fn from(ranked: RankedSchool) -> Self {
        let distance = ranked.distance_km();
        let mut response = Self::from(ranked.school().clone());
        response.distance = Some(distance);
        response
    }
}

/// Echo of the location used for ranking.
#[derive(Debug, Serialize, ToSchema)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for LocationResponse {
    fn from(location: Coordinates) -> Self {
        Self {
            latitude: location.latitude(),
            longitude: location.longitude(),
        }
    }
}

/// School list response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolsResponse {
    pub success: bool,
    pub schools: Vec<SchoolResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<LocationResponse>,
}

impl SchoolsResponse {
    fn ranked(schools: Vec<RankedSchool>, user_location: Option<Coordinates>) -> Self {
        Self {
            success: true,
            schools: schools.into_iter().map(SchoolResponse::from).collect(),
            user_location: user_location.map(LocationResponse::from),
        }
    }
}

/// Route guard matching JSON request bodies.
///
/// Parameters such as `charset` are ignored.
pub fn json_content_type(ctx: &GuardContext<'_>) -> bool {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Register a school.
#[utoipa::path(
    post,
    path = "/addSchool",
    request_body(content = AddSchoolRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "School stored", body = AddSchoolResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["schools"],
    operation_id = "addSchool"
)]
#[post("/addSchool", guard = "json_content_type")]
pub async fn add_school(
    state: web::Data<HttpState>,
    payload: web::Json<AddSchoolRequest>,
) -> ApiResult<HttpResponse> {
    let school = state
        .schools
        .add_school(SchoolDraft::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(AddSchoolResponse {
        success: true,
        message: SCHOOL_ADDED_MESSAGE.to_owned(),
        school_id: school.id().get(),
    }))
}

fn map_list_location_error(err: LocationQueryError) -> Error {
    match err {
        LocationQueryError::Missing => Error::invalid_request("Latitude and longitude are required"),
        LocationQueryError::NotNumeric => Error::invalid_request("Invalid latitude or longitude"),
        LocationQueryError::OutOfRange => Error::invalid_request(
            "Latitude must be between -90 and 90, longitude between -180 and 180",
        ),
    }
}

fn map_nearest_location_error(err: LocationQueryError) -> Error {
    match err {
        LocationQueryError::Missing => Error::invalid_request("Latitude and longitude are required"),
        LocationQueryError::NotNumeric | LocationQueryError::OutOfRange => {
            Error::invalid_request("Invalid coordinates")
        }
    }
}

/// List schools, optionally ranked by distance.
///
/// Ranking happens only when both parameters are supplied; a lone latitude
/// or longitude is ignored.
#[utoipa::path(
    get,
    path = "/listSchools",
    params(LocationParams),
    responses(
        (status = 200, description = "Schools", body = SchoolsResponse),
        (status = 400, description = "Invalid coordinates", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["schools"],
    operation_id = "listSchools"
)]
#[get("/listSchools")]
pub async fn list_schools(
    state: web::Data<HttpState>,
    params: web::Query<LocationParams>,
) -> ApiResult<web::Json<SchoolsResponse>> {
    let origin = LocationQuery::from(params.into_inner())
        .optional()
        .map_err(map_list_location_error)?;

    let response = match origin {
        Some(origin) => {
            let ranked = state.schools_query.list_schools_near(origin).await?;
            SchoolsResponse::ranked(ranked, Some(origin))
        }
        None => {
            let schools = state.schools_query.list_schools().await?;
            SchoolsResponse {
                success: true,
                schools: schools.into_iter().map(SchoolResponse::from).collect(),
                user_location: None,
            }
        }
    };
    Ok(web::Json(response))
}

/// Every school ranked by distance from the given location.
#[utoipa::path(
    get,
    path = "/api/nearest",
    params(LocationParams),
    responses(
        (status = 200, description = "Schools nearest first", body = SchoolsResponse),
        (status = 400, description = "Missing or invalid coordinates", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["schools"],
    operation_id = "nearestSchools"
)]
#[get("/api/nearest")]
pub async fn nearest_schools(
    state: web::Data<HttpState>,
    params: web::Query<LocationParams>,
) -> ApiResult<web::Json<SchoolsResponse>> {
    let origin = LocationQuery::from(params.into_inner())
        .required()
        .map_err(map_nearest_location_error)?;
    let ranked = state.schools_query.nearest_schools(origin).await?;
    Ok(web::Json(SchoolsResponse::ranked(ranked, None)))
}

#[cfg(test)]
#[path = "schools_tests.rs"]
mod tests;
