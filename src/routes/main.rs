use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::repository::DieselRepository;
use crate::routes::json_response;
use crate::services::main::show_dashboard;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Health { status: "ok" })
}

#[get("/dashboard")]
pub async fn dashboard(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response(show_dashboard(repo.get_ref()))
}
