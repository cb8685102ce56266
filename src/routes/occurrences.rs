use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};
use chrono::Utc;

use crate::domain::occurrence::{OccurrenceDraft, OccurrenceUpdate};
use crate::forms::occurrences::{CreateOccurrenceForm, OccurrenceListParams, UpdateOccurrenceForm};
use crate::repository::{DieselRepository, OccurrenceListQuery};
use crate::routes::{error_response, json_response};
use crate::services::ServiceError;
use crate::services::occurrences::{
    create_occurrence as create_occurrence_service, delete_occurrence as delete_occurrence_service,
    get_occurrence as get_occurrence_service, list_occurrences as list_occurrences_service,
    occurrence_stats as occurrence_stats_service, update_occurrence as update_occurrence_service,
};

#[get("/occurrences")]
pub async fn list_occurrences(
    repo: web::Data<DieselRepository>,
    params: web::Query<OccurrenceListParams>,
) -> impl Responder {
    match OccurrenceListQuery::try_from(params.into_inner()) {
        Ok(query) => json_response(list_occurrences_service(&query, repo.get_ref())),
        Err(e) => error_response(&ServiceError::from(e)),
    }
}

#[get("/occurrences/stats")]
pub async fn occurrence_stats(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response(occurrence_stats_service(repo.get_ref()))
}

#[post("/occurrences")]
pub async fn create_occurrence(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateOccurrenceForm>,
) -> impl Responder {
    let draft = match OccurrenceDraft::try_from(form) {
        Ok(draft) => draft,
        Err(e) => return error_response(&ServiceError::from(e)),
    };

    match create_occurrence_service(draft, repo.get_ref(), Utc::now().naive_utc()) {
        Ok(occurrence) => HttpResponse::Created().json(occurrence),
        Err(err) => error_response(&err),
    }
}

#[get("/occurrences/{occurrence_id}")]
pub async fn get_occurrence(
    repo: web::Data<DieselRepository>,
    occurrence_id: web::Path<String>,
) -> impl Responder {
    json_response(get_occurrence_service(&occurrence_id, repo.get_ref()))
}

#[patch("/occurrences/{occurrence_id}")]
pub async fn update_occurrence(
    repo: web::Data<DieselRepository>,
    occurrence_id: web::Path<String>,
    web::Json(form): web::Json<UpdateOccurrenceForm>,
) -> impl Responder {
    let update = match OccurrenceUpdate::try_from(form) {
        Ok(update) => update,
        Err(e) => return error_response(&ServiceError::from(e)),
    };

    json_response(update_occurrence_service(
        &occurrence_id,
        update,
        repo.get_ref(),
        Utc::now().naive_utc(),
    ))
}

#[delete("/occurrences/{occurrence_id}")]
pub async fn delete_occurrence(
    repo: web::Data<DieselRepository>,
    occurrence_id: web::Path<String>,
) -> impl Responder {
    match delete_occurrence_service(&occurrence_id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
