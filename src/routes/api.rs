use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::query::ListingQuery;
use crate::forms::workation::WorkationForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::workations as workation_service;

#[get("/v1/workations")]
pub async fn list_workations(
    req: HttpRequest,
    params: web::Query<ListingQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match workation_service::list_workations(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&req, err),
    }
}

#[get("/v1/workations/{id}")]
pub async fn get_workation(
    req: HttpRequest,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match workation_service::get_workation(repo.get_ref(), id.into_inner()) {
        Ok(workation) => HttpResponse::Ok().json(workation),
        Err(err) => error_response(&req, err),
    }
}

#[post("/v1/workations")]
pub async fn create_workation(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<WorkationForm>,
) -> impl Responder {
    match workation_service::create_workation(repo.get_ref(), form) {
        Ok(workation) => {
            log::info!("Created workation {}", workation.id);
            HttpResponse::Created().json(workation)
        }
        Err(err) => error_response(&req, err),
    }
}

#[put("/v1/workations/{id}")]
pub async fn update_workation(
    req: HttpRequest,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<WorkationForm>,
) -> impl Responder {
    match workation_service::update_workation(repo.get_ref(), id.into_inner(), form) {
        Ok(workation) => HttpResponse::Ok().json(workation),
        Err(err) => error_response(&req, err),
    }
}

#[delete("/v1/workations/{id}")]
pub async fn delete_workation(
    req: HttpRequest,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    match workation_service::delete_workation(repo.get_ref(), id) {
        Ok(()) => {
            log::info!("Deleted workation {id}");
            HttpResponse::NoContent().finish()
        }
        Err(err) => error_response(&req, err),
    }
}
