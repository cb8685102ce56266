use actix_web::{Responder, get, patch, post, web};
use chrono::Utc;
use serde::Serialize;

use crate::domain::camera::CameraUpdate;
use crate::forms::cameras::{CameraListParams, UpdateCameraForm};
use crate::repository::{CameraListQuery, DieselRepository};
use crate::routes::{error_response, json_response};
use crate::services::ServiceError;
use crate::services::cameras::{
    camera_stats as camera_stats_service, get_camera as get_camera_service,
    initialize_cameras as initialize_cameras_service,
    recorder_summaries as recorder_summaries_service, show_cameras, show_recorder,
    update_camera as update_camera_service,
};

#[derive(Serialize)]
struct Initialized {
    created: usize,
}

#[post("/cameras/initialize")]
pub async fn initialize_cameras(repo: web::Data<DieselRepository>) -> impl Responder {
    let result = initialize_cameras_service(repo.get_ref(), Utc::now().naive_utc());
    json_response(result.map(|created| Initialized { created }))
}

#[get("/cameras")]
pub async fn list_cameras(
    repo: web::Data<DieselRepository>,
    params: web::Query<CameraListParams>,
) -> impl Responder {
    match CameraListQuery::try_from(params.into_inner()) {
        Ok(query) => json_response(show_cameras(query, repo.get_ref())),
        Err(e) => error_response(&ServiceError::from(e)),
    }
}

#[get("/cameras/stats")]
pub async fn camera_stats(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response(camera_stats_service(repo.get_ref()))
}

#[get("/cameras/{camera_id}")]
pub async fn get_camera(
    repo: web::Data<DieselRepository>,
    camera_id: web::Path<String>,
) -> impl Responder {
    json_response(get_camera_service(&camera_id, repo.get_ref()))
}

#[patch("/cameras/{camera_id}")]
pub async fn update_camera(
    repo: web::Data<DieselRepository>,
    camera_id: web::Path<String>,
    web::Json(form): web::Json<UpdateCameraForm>,
) -> impl Responder {
    let update = match CameraUpdate::try_from(form) {
        Ok(update) => update,
        Err(e) => return error_response(&ServiceError::from(e)),
    };

    json_response(update_camera_service(
        &camera_id,
        update,
        repo.get_ref(),
        Utc::now().naive_utc(),
    ))
}

#[get("/recorders")]
pub async fn recorder_summaries(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response(recorder_summaries_service(repo.get_ref()))
}

#[get("/recorders/{recorder}/cameras")]
pub async fn recorder_cameras(
    repo: web::Data<DieselRepository>,
    recorder: web::Path<i32>,
) -> impl Responder {
    json_response(show_recorder(recorder.into_inner(), repo.get_ref()))
}
