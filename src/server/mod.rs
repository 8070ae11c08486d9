//! Server construction and extractor wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{App, HttpRequest, HttpServer, web};
use tracing::debug;

use crate::inbound::http::ApiError;
use crate::inbound::http::categories::{create_category, list_categories};
use crate::inbound::http::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::inbound::http::state::HttpState;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    ApiError::invalid_json().into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path parameter");
    ApiError::invalid_identifier().into()
}

/// Assemble the application: extractor error handlers plus every route.
///
/// Kept separate from [`run`] so handler tests exercise the exact same app,
/// including the 400 mapping for malformed bodies and identifiers.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(list_products)
        .service(get_product)
        .service(create_product)
        .service(update_product)
        .service(delete_product)
        .service(list_categories)
        .service(create_category)
}

/// Bind the HTTP server and return its run handle.
///
/// # Errors
///
/// Returns the bind failure from the listener, e.g. when the address is
/// already in use.
pub fn run(config: &ServerConfig, state: web::Data<HttpState>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run();
    Ok(server)
}
