use actix_web::{HttpResponse, Responder, get, web};
use chrono::Local;

use crate::forms::reports::{ReportParams, ReportPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_response, json_response};
use crate::services::ServiceError;
use crate::services::reports::{build_report, download_report as download_report_service};

#[get("/reports")]
pub async fn show_report(
    repo: web::Data<DieselRepository>,
    params: web::Query<ReportParams>,
) -> impl Responder {
    let payload = match ReportPayload::try_from(params.into_inner()) {
        Ok(payload) => payload,
        Err(e) => return error_response(&ServiceError::from(e)),
    };

    // Periods are calendar days of the monitoring room.
    json_response(build_report(
        payload.period,
        repo.get_ref(),
        Local::now().naive_local(),
    ))
}

#[get("/reports/download")]
pub async fn download_report(
    repo: web::Data<DieselRepository>,
    params: web::Query<ReportParams>,
) -> impl Responder {
    let payload = match ReportPayload::try_from(params.into_inner()) {
        Ok(payload) => payload,
        Err(e) => return error_response(&ServiceError::from(e)),
    };

    match download_report_service(
        payload.period,
        payload.format,
        repo.get_ref(),
        Local::now().naive_local(),
    ) {
        Ok(file) => HttpResponse::Ok()
            .append_header(("Content-Type", file.content_type))
            .append_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", file.file_name),
            ))
            .body(file.bytes),
        Err(err) => error_response(&err),
    }
}
