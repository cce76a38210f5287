// Route exports
pub mod matches;

use actix_web::{error, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(matches::configure),
    );
}

fn bad_request(error: &str, message: String) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.clone(),
        status_code: 400,
    });
    error::InternalError::from_response(message, response).into()
}

/// Render JSON payload errors as JSON
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    bad_request("invalid_json", format!("Invalid JSON: {}", err))
}

/// Render query string errors as JSON
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    bad_request("invalid_query", format!("Invalid query: {}", err))
}
