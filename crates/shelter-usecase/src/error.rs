//! Error types for the shelter service

use shelter_domain::ShelterError;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// General service error type
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Shelter(#[from] ShelterError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
