use actix_web::{web, HttpResponse, Responder, ResponseError};
use mongodb::bson::oid::ObjectId;

use crate::api::state::AppState;
use crate::domain::pet::form::{PetFormService, SubmitOutcome};
use crate::domain::pet::model::PetFormReceive;
use crate::infrastructure::mongodb::owner_repository::MongoOwnerRepository;
use crate::utils::clock::SystemClock;
use crate::utils::errors::ApiError;

pub async fn init_creation_form(
    state: web::Data<AppState>,
    path: web::Path<String>
) -> impl Responder {
    let owner_id = match parse_id(&path, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response()
    };

    log::info!("Starting creation form for a new pet of owner ID: {}", owner_id);

    let repo = MongoOwnerRepository::new(&state.db);
    let clock = SystemClock;
    match PetFormService::new(&repo, &clock).prepare_create(owner_id).await {
        Ok(form) => HttpResponse::Ok().json(form),
        Err(e) => {
            log::warn!("Could not prepare pet creation form: {}", e);
            e.error_response()
        }
    }
}

pub async fn process_creation_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<PetFormReceive>
) -> impl Responder {
    let owner_id = match parse_id(&path, "owner") {
        Ok(id) => id,
        Err(e) => return e.error_response()
    };

    log::info!("Processing new pet creation form for owner ID: {}", owner_id);

    let form = form.into_inner();
    let repo = MongoOwnerRepository::new(&state.db);
    let clock = SystemClock;
    match PetFormService::new(&repo, &clock).submit_create(owner_id, form.clone()).await {
        Ok(SubmitOutcome::Persisted { redirect, message }) => {
            log::info!("New pet was added for owner ID: {}", owner_id);
            HttpResponse::Created().json(serde_json::json!({
                "message": message,
                "redirect": redirect
            }))
        },
        Ok(SubmitOutcome::Rejected { errors }) => {
            log::warn!("Validation errors when creating new pet: {:?}", errors);
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "errors": errors,
                "pet": form
            }))
        },
        Err(e) => {
            log::error!("Failed to create pet for owner ID {}: {}", owner_id, e);
            e.error_response()
        }
    }
}

pub async fn init_update_form(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>
) -> impl Responder {
    let (owner_id, pet_id) = match parse_ids(&path) {
        Ok(ids) => ids,
        Err(e) => return e.error_response()
    };

    log::info!("Starting update form for pet ID: {} of owner ID: {}", pet_id, owner_id);

    let repo = MongoOwnerRepository::new(&state.db);
    let clock = SystemClock;
    match PetFormService::new(&repo, &clock).prepare_edit(owner_id, pet_id).await {
        Ok(form) => HttpResponse::Ok().json(form),
        Err(e) => {
            log::warn!("Could not prepare pet update form: {}", e);
            e.error_response()
        }
    }
}

pub async fn process_update_form(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    form: web::Json<PetFormReceive>
) -> impl Responder {
    let (owner_id, pet_id) = match parse_ids(&path) {
        Ok(ids) => ids,
        Err(e) => return e.error_response()
    };

    log::info!("Processing edit form for pet ID: {} of owner ID: {}", pet_id, owner_id);

    let form = form.into_inner();
    let repo = MongoOwnerRepository::new(&state.db);
    let clock = SystemClock;
    match PetFormService::new(&repo, &clock).submit_edit(owner_id, pet_id, form.clone()).await {
        Ok(SubmitOutcome::Persisted { redirect, message }) => {
            log::info!("Pet ID: {} of owner ID: {} updated successfully", pet_id, owner_id);
            HttpResponse::Ok().json(serde_json::json!({
                "message": message,
                "redirect": redirect
            }))
        },
        Ok(SubmitOutcome::Rejected { errors }) => {
            log::warn!("Validation errors when editing pet: {:?}", errors);
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "errors": errors,
                "pet": form
            }))
        },
        Err(e) => {
            log::error!("Failed to edit pet ID {} of owner ID {}: {}", pet_id, owner_id, e);
            e.error_response()
        }
    }
}

fn parse_id(raw: &str, what: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw)
        .map_err(|_| ApiError::BadRequest(format!("Invalid {} id: {}", what, raw)))
}

fn parse_ids(path: &(String, String)) -> Result<(ObjectId, ObjectId), ApiError> {
    Ok((parse_id(&path.0, "owner")?, parse_id(&path.1, "pet")?))
}
