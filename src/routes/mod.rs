use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod api;

/// Builds the JSON error body for `req`.
pub fn error_body(
    req: &HttpRequest,
    status: StatusCode,
    error: &str,
    message: impl Into<String>,
    errors: Option<Vec<String>>,
) -> ErrorResponse {
    ErrorResponse {
        timestamp: Utc::now().naive_utc(),
        status: status.as_u16(),
        error: error.to_string(),
        message: message.into(),
        path: req.path().to_string(),
        errors,
    }
}

/// Maps a service failure onto an HTTP response.
pub fn error_response(req: &HttpRequest, err: ServiceError) -> HttpResponse {
    let body = match err {
        ServiceError::NotFound(message) => {
            error_body(req, StatusCode::NOT_FOUND, "Not Found", message, None)
        }
        ServiceError::Validation(errors) => error_body(
            req,
            StatusCode::BAD_REQUEST,
            "Validation Failed",
            "Input validation error. Please check your request.",
            Some(errors),
        ),
        ServiceError::BadRequest(message) => {
            error_body(req, StatusCode::BAD_REQUEST, "Bad Request", message, None)
        }
        ServiceError::Internal(cause) => {
            log::error!("Request to {} failed: {cause}", req.path());
            error_body(
                req,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An unexpected error occurred. Please try again later.",
                None,
            )
        }
    };

    let status =
        StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(body)
}

/// JSON extractor settings answering malformed bodies with an error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        let body = error_body(
            req,
            StatusCode::BAD_REQUEST,
            "Invalid Request Body",
            "Malformed JSON request",
            Some(vec![err.to_string()]),
        );
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Query extractor settings answering malformed parameters with an error body.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        let body = error_body(req, StatusCode::BAD_REQUEST, "Bad Request", err.to_string(), None);
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Path extractor settings answering non-numeric ids with an error body.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let body = error_body(req, StatusCode::BAD_REQUEST, "Bad Request", err.to_string(), None);
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Registers the REST API under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
            web::scope("/api")
                .service(api::list_workations)
                .service(api::get_workation)
                .service(api::create_workation)
                .service(api::update_workation)
                .service(api::delete_workation),
        );
}
