//! Page rendering tests.

use std::sync::Arc;

use actix_web::{App, test as actix_test, web};
use rstest::rstest;

use super::*;
use crate::domain::SchoolsService;
use crate::domain::ports::{
    FixtureSchoolRepository, MockSchoolRepository, SchoolRepository, SchoolRepositoryError,
};
use crate::inbound::http::health::HealthState;

fn state_for<R: SchoolRepository + 'static>(repository: R) -> HttpState {
    HttpState::from_service(Arc::new(SchoolsService::new(Arc::new(repository))))
}

async fn fetch(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, String) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(HealthState::new()))
            .configure(crate::inbound::http::configure)
            .configure(crate::inbound::html::configure)
            .default_service(web::to(not_found)),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    (status, String::from_utf8(body.to_vec()).expect("utf-8 page"))
}

fn submit(fields: &[(&'static str, &'static str)]) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/addSchool")
        .set_form(fields.to_vec())
}

fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Riverside Primary"),
        ("address", "12 Mill Lane"),
        ("latitude", "0"),
        ("longitude", "0"),
    ]
}

fn broken_store() -> MockSchoolRepository {
    let mut repo = MockSchoolRepository::new();
    repo.expect_list_all()
        .returning(|| Err(SchoolRepositoryError::connection("refused")));
    repo.expect_insert()
        .returning(|_| Err(SchoolRepositoryError::connection("refused")));
    repo
}

#[rstest]
#[actix_web::test]
async fn index_lists_schools_newest_first() {
    let (status, page) = fetch(
        state_for(FixtureSchoolRepository),
        actix_test::TestRequest::get().uri("/"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let thames = page.find("Thames Primary").expect("newest listed");
    let harbour = page.find("Harbour High").expect("oldest listed");
    assert!(thames < harbour);
    assert!(page.contains("action=\"/addSchool\""));
}

#[rstest]
#[actix_web::test]
async fn index_shows_banner_when_store_fails() {
    let (status, page) = fetch(
        state_for(broken_store()),
        actix_test::TestRequest::get().uri("/"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(LOAD_FAILED_BANNER));
    assert!(page.contains("No schools registered yet."));
}

#[rstest]
#[actix_web::test]
async fn form_submission_rerenders_listing_with_confirmation() {
    let (status, page) = fetch(state_for(FixtureSchoolRepository), submit(&valid_fields())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(ADDED_BANNER));
    assert!(page.contains("Thames Primary"));
}

#[rstest]
#[actix_web::test]
async fn invalid_form_shows_joined_errors() {
    let (status, page) = fetch(
        state_for(FixtureSchoolRepository),
        submit(&[("name", " "), ("address", ""), ("latitude", "0"), ("longitude", "0")]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("School name is required, Address is required"));
    assert!(!page.contains(ADDED_BANNER));
}

#[rstest]
#[case(None)]
#[case(Some("multipart/form-data; boundary=xyz"))]
#[case(Some("text/plain"))]
#[actix_web::test]
async fn non_form_bodies_render_every_missing_field(#[case] content_type: Option<&'static str>) {
    let mut request = actix_test::TestRequest::post()
        .uri("/addSchool")
        .set_payload("name=&address=&latitude=&longitude=");
    if let Some(content_type) = content_type {
        request = request.insert_header(("content-type", content_type));
    }

    let (status, page) = fetch(state_for(FixtureSchoolRepository), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(
        "School name is required, Address is required, Valid latitude is required, Valid longitude is required"
    ));
    assert!(page.contains("Thames Primary"));
}

#[rstest]
#[actix_web::test]
async fn failed_insert_shows_retry_banner() {
    let (_, page) = fetch(state_for(broken_store()), submit(&valid_fields())).await;

    assert!(page.contains(ADD_FAILED_BANNER));
    assert!(!page.contains("refused"));
}

#[rstest]
#[actix_web::test]
async fn nearest_page_without_location_shows_only_the_form() {
    let (status, page) = fetch(
        state_for(FixtureSchoolRepository),
        actix_test::TestRequest::get().uri("/nearest"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("action=\"/nearest\""));
    assert!(!page.contains("<table>"));
}

#[rstest]
#[actix_web::test]
async fn nearest_page_ranks_schools() {
    let (status, page) = fetch(
        state_for(FixtureSchoolRepository),
        actix_test::TestRequest::get().uri("/nearest?latitude=48.85&longitude=2.35"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let paris = page.find("Lycee Rive Gauche").expect("paris listed");
    let london = page.find("Thames Primary").expect("london listed");
    let new_york = page.find("Harbour High").expect("new york listed");
    assert!(paris < london && london < new_york);
    assert!(page.contains(" km"));
}

#[rstest]
#[actix_web::test]
async fn nearest_page_flags_invalid_location() {
    let (_, page) = fetch(
        state_for(FixtureSchoolRepository),
        actix_test::TestRequest::get().uri("/nearest?latitude=abc&longitude=2"),
    )
    .await;

    assert!(page.contains(INVALID_LOCATION_BANNER));
}

#[rstest]
#[actix_web::test]
async fn unknown_paths_render_not_found_page() {
    let (status, page) = fetch(
        state_for(FixtureSchoolRepository),
        actix_test::TestRequest::get().uri("/no-such-page"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(page.contains("no-such-page"));
}

#[rstest]
#[actix_web::test]
async fn unknown_api_paths_use_the_json_envelope() {
    let (status, body) = fetch(
        state_for(FixtureSchoolRepository),
        actix_test::TestRequest::get().uri("/api/unknown"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body).expect("json envelope");
    assert_eq!(body["code"], serde_json::json!("not_found"));
    assert_eq!(body["error"], serde_json::json!("No route for /api/unknown"));
}

#[rstest]
fn school_views_format_distance_to_two_places() {
    let origin = geodesy::Coordinates::new(51.5074, -0.1278).expect("origin");
    let location = geodesy::Coordinates::new(48.8566, 2.3522).expect("paris");
    let details = crate::domain::NewSchool::new("Lycee", "Paris", location).expect("school");
    let school = School::new(crate::domain::SchoolId::new(1), details, chrono::Utc::now());
    let ranked = crate::domain::rank_schools(origin, vec![school]);

    let view = SchoolView::from(&ranked[0]);

    let distance = view.distance.expect("distance shown");
    assert!(distance.starts_with("343.") || distance.starts_with("344."));
    assert!(distance.ends_with(" km"));
}
