//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use school_locator::Trace;
#[cfg(debug_assertions)]
use school_locator::doc::ApiDoc;
use school_locator::inbound::html::pages::not_found;
use school_locator::inbound::http::health::HealthState;
use school_locator::inbound::http::state::HttpState;
use school_locator::inbound::{html, http};

use state_builders::build_http_state;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(http::configure)
        .configure(html::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(not_found))
}

/// Bind the listener and return the running server.
///
/// Readiness is flagged once the socket is bound; the readiness check additionally
/// pings the store on every call.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
