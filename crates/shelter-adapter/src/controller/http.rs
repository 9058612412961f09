//! HTTP controller
//!
//! Routes:
//!   GET    /              - every kennel
//!   GET    /available     - vacant kennels
//!   GET    /reorganize    - run one compaction pass, return every kennel
//!   GET    /animal/{id}   - look up a resident
//!   POST   /animal        - admit an animal
//!   DELETE /animal/{id}   - release a resident

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use shelter_domain::AnimalId;
use tracing::debug;

use super::dto::{kennel_dtos, AdmissionDto, AnimalDto, KennelDto};
use super::error::ApiError;
use crate::repository::in_memory::SharedShelter;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Build the HTTP API router around the given shelter.
pub fn build_router(shelter: SharedShelter) -> Router {
    Router::new()
        .route("/", get(list_kennels))
        .route("/available", get(list_available))
        .route("/reorganize", get(reorganize))
        .route("/animal", post(add_animal))
        .route("/animal/{id}", get(get_animal).delete(remove_animal))
        .with_state(shelter)
}

async fn list_kennels(State(shelter): State<SharedShelter>) -> ApiResult<Vec<KennelDto>> {
    let kennels = shelter.read(|service| kennel_dtos(service.shelter().kennels()))?;
    Ok(Json(kennels))
}

async fn list_available(State(shelter): State<SharedShelter>) -> ApiResult<Vec<KennelDto>> {
    let kennels = shelter.read(|service| kennel_dtos(&service.list_available()))?;
    debug!(available = kennels.len(), "Listed available kennels");
    Ok(Json(kennels))
}

async fn reorganize(State(shelter): State<SharedShelter>) -> ApiResult<Vec<KennelDto>> {
    let kennels = shelter.write(|service| kennel_dtos(&service.reorganize()))?;
    Ok(Json(kennels))
}

async fn get_animal(
    State(shelter): State<SharedShelter>,
    Path(id): Path<u32>,
) -> ApiResult<AnimalDto> {
    let animal = shelter
        .read(|service| service.get_animal(AnimalId::new(id)))?
        .map_err(|e| ApiError::from(e).without_body())?;
    Ok(Json(AnimalDto::from(&animal)))
}

async fn add_animal(
    State(shelter): State<SharedShelter>,
    Json(body): Json<AdmissionDto>,
) -> ApiResult<AnimalDto> {
    let animal = shelter.write(|service| service.admit(body.into()))??;
    Ok(Json(AnimalDto::from(&animal)))
}

async fn remove_animal(
    State(shelter): State<SharedShelter>,
    Path(id): Path<u32>,
) -> ApiResult<AnimalDto> {
    let animal = shelter.write(|service| service.release(AnimalId::new(id)))??;
    Ok(Json(AnimalDto::from(&animal)))
}
