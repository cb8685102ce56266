use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::{ServiceError, ServiceResult};

pub mod cameras;
pub mod main;
pub mod occurrences;
pub mod reports;

/// Body returned with every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        ServiceError::Validation(_) => HttpResponse::UnprocessableEntity().json(body),
        ServiceError::InvalidArgument(_) => HttpResponse::BadRequest().json(body),
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::StorageUnavailable => HttpResponse::ServiceUnavailable().json(body),
        ServiceError::Internal => HttpResponse::InternalServerError().json(body),
    }
}

/// Serializes a successful result as JSON or maps the error to its status.
pub fn json_response<T: Serialize>(result: ServiceResult<T>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(err) => error_response(&err),
    }
}

/// Malformed JSON bodies are reported like any other validation failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(&ServiceError::Validation(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Malformed query strings are rejected as invalid arguments.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = error_response(&ServiceError::InvalidArgument(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Registers every endpoint of the console under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::health).service(
        web::scope("/api/v1")
            .app_data(json_config())
            .app_data(query_config())
            .service(main::dashboard)
            // fixed paths before `/cameras/{camera_id}`
            .service(cameras::initialize_cameras)
            .service(cameras::camera_stats)
            .service(cameras::list_cameras)
            .service(cameras::get_camera)
            .service(cameras::update_camera)
            .service(cameras::recorder_summaries)
            .service(cameras::recorder_cameras)
            .service(occurrences::occurrence_stats)
            .service(occurrences::list_occurrences)
            .service(occurrences::create_occurrence)
            .service(occurrences::get_occurrence)
            .service(occurrences::update_occurrence)
            .service(occurrences::delete_occurrence)
            .service(reports::download_report)
            .service(reports::show_report),
    );
}
