//! HTTP error mapping
//!
//! | Outcome            | Status | Body                      |
//! |--------------------|--------|---------------------------|
//! | validation failed  | 400    | field -> messages         |
//! | capacity exhausted | 409    | the submitted animal      |
//! | animal not found   | 404    | requested id, or empty    |
//! | lock poisoned      | 500    | message                   |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shelter_domain::{AnimalId, NewAnimal, ShelterError};
use shelter_usecase::{ServiceError, ValidationErrors};
use thiserror::Error;
use tracing::error;

use super::dto::NewAnimalDto;
use crate::repository::in_memory::ShelterUnavailable;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    BadRequest(ValidationErrors),

    #[error("No kennel available for {}", .0.name)]
    Conflict(NewAnimal),

    /// Carries the id when it should be echoed in the body
    #[error("Animal not found")]
    NotFound(Option<AnimalId>),

    #[error(transparent)]
    Unavailable(#[from] ShelterUnavailable),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Same error, but a 404 carries no body
    pub fn without_body(self) -> Self {
        match self {
            ApiError::NotFound(_) => ApiError::NotFound(None),
            other => other,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => ApiError::BadRequest(errors),
            ServiceError::Shelter(ShelterError::CapacityExhausted { animal }) => {
                ApiError::Conflict(animal)
            }
            ServiceError::Shelter(ShelterError::AnimalNotFound { id }) => {
                ApiError::NotFound(Some(id))
            }
            ServiceError::Shelter(other) => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors.fields().clone())).into_response()
            }
            ApiError::Conflict(animal) => {
                (StatusCode::CONFLICT, Json(NewAnimalDto::from(animal))).into_response()
            }
            ApiError::NotFound(Some(id)) => {
                (StatusCode::NOT_FOUND, Json(id.value())).into_response()
            }
            ApiError::NotFound(None) => StatusCode::NOT_FOUND.into_response(),
            ApiError::Unavailable(e) => {
                error!("{}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            ApiError::Internal(message) => {
                error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
