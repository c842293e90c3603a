//! Askama page handlers.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use askama::Template;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{
    Error, ErrorCode, LocationQuery, LocationQueryError, RankedSchool, School, SchoolDraft,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

pub const ADDED_BANNER: &str = "School added successfully!";
pub const LOAD_FAILED_BANNER: &str = "Error loading schools";
pub const ADD_FAILED_BANNER: &str = "Error adding school. Please try again.";
pub const INVALID_LOCATION_BANNER: &str = "Invalid coordinates";

const API_PREFIX: &str = "/api/";

/// Display row for a school.
pub struct SchoolView {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: String,
    pub distance: Option<String>,
}

impl From<&School> for SchoolView {
    fn from(school: &School) -> Self {
        Self {
            name: school.name().to_owned(),
            address: school.address().to_owned(),
            latitude: school.location().latitude(),
            longitude: school.location().longitude(),
            created_at: school.created_at().format("%Y-%m-%d %H:%M UTC").to_string(),
            distance: None,
        }
    }
}

impl From<&RankedSchool> for SchoolView {
    fn from(ranked: &RankedSchool) -> Self {
        let mut view = Self::from(ranked.school());
        view.distance = Some(format!("{:.2} km", ranked.distance_km()));
        view
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub schools: Vec<SchoolView>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "nearest.html")]
pub struct NearestPage {
    pub latitude: String,
    pub longitude: String,
    pub searched: bool,
    pub schools: Vec<SchoolView>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub path: String,
}

/// Fields posted by the add-school form.
#[derive(Debug, Default, Deserialize)]
pub struct AddSchoolForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl From<AddSchoolForm> for SchoolDraft {
    fn from(form: AddSchoolForm) -> Self {
        Self {
            name: form.name,
            address: form.address,
            latitude: form.latitude,
            longitude: form.longitude,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NearestParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

fn render<T: Template>(status: StatusCode, page: &T) -> ApiResult<HttpResponse> {
    let body = page
        .render()
        .map_err(|err| Error::internal(format!("failed to render page: {err}")))?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

/// Listing with a banner; a failing store yields an empty list and the load
/// failure banner.
async fn index_page(state: &HttpState, message: Option<String>, error: Option<String>) -> IndexPage {
    match state.schools_query.list_schools().await {
        Ok(schools) => IndexPage {
            schools: schools.iter().map(SchoolView::from).collect(),
            message,
            error,
        },
        Err(err) => {
            warn!(error = %err, "school listing failed while rendering page");
            IndexPage {
                schools: Vec::new(),
                message: None,
                error: Some(error.unwrap_or_else(|| LOAD_FAILED_BANNER.to_owned())),
            }
        }
    }
}

#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let page = index_page(&state, None, None).await;
    render(StatusCode::OK, &page)
}

/// Form submission; always re-renders the listing.
///
/// Bodies that are not URL-encoded (no `Content-Type`, multipart, ...) are
/// read as an empty submission, so the page reports every missing field.
#[post("/addSchool")]
pub async fn add_school_form(
    state: web::Data<HttpState>,
    form: Option<web::Form<AddSchoolForm>>,
) -> ApiResult<HttpResponse> {
    let draft = form
        .map(|form| SchoolDraft::from(form.into_inner()))
        .unwrap_or_default();
    let (message, error) = match state.schools.add_school(draft).await {
        Ok(_) => (Some(ADDED_BANNER.to_owned()), None),
        Err(err) if err.code() == ErrorCode::InvalidRequest => (None, Some(err.message().to_owned())),
        Err(_) => (None, Some(ADD_FAILED_BANNER.to_owned())),
    };
    let page = index_page(&state, message, error).await;
    render(StatusCode::OK, &page)
}

/// Nearest-school search form, with results when a location is given.
#[get("/nearest")]
pub async fn nearest_page(
    state: web::Data<HttpState>,
    params: web::Query<NearestParams>,
) -> ApiResult<HttpResponse> {
    let NearestParams {
        latitude,
        longitude,
    } = params.into_inner();
    let query = LocationQuery::new(latitude.clone(), longitude.clone());
    let mut page = NearestPage {
        latitude: latitude.unwrap_or_default(),
        longitude: longitude.unwrap_or_default(),
        searched: false,
        schools: Vec::new(),
        error: None,
    };

    match query.required() {
        Err(LocationQueryError::Missing) => {}
        Err(LocationQueryError::NotNumeric | LocationQueryError::OutOfRange) => {
            page.error = Some(INVALID_LOCATION_BANNER.to_owned());
        }
        Ok(origin) => match state.schools_query.nearest_schools(origin).await {
            Ok(ranked) => {
                page.searched = true;
                page.schools = ranked.iter().map(SchoolView::from).collect();
            }
            Err(err) => {
                warn!(error = %err, "nearest school search failed");
                page.error = Some(LOAD_FAILED_BANNER.to_owned());
            }
        },
    }
    render(StatusCode::OK, &page)
}

/// Fallback for unmatched routes.
///
/// Paths under `/api/` answer with the JSON error envelope; everything else
/// gets the HTML page.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    if req.path().starts_with(API_PREFIX) {
        return Err(Error::not_found(format!("No route for {}", req.path())));
    }
    render(
        StatusCode::NOT_FOUND,
        &NotFoundPage {
            path: req.path().to_owned(),
        },
    )
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
