//! In-memory shelter handle
//!
//! The engine has no internal synchronization, so every request goes
//! through this lock. Each closure runs one service operation to
//! completion while the lock is held.

use std::sync::{Arc, RwLock};

use shelter_usecase::ShelterService;
use thiserror::Error;

/// The lock guarding the shelter was poisoned by a panicking request
#[derive(Debug, Clone, Error)]
#[error("Shelter unavailable: {message}")]
pub struct ShelterUnavailable {
    pub message: String,
}

/// Cloneable handle to the one `ShelterService` of this process
#[derive(Debug, Clone, Default)]
pub struct SharedShelter {
    service: Arc<RwLock<ShelterService>>,
}

impl SharedShelter {
    pub fn new(service: ShelterService) -> Self {
        Self {
            service: Arc::new(RwLock::new(service)),
        }
    }

    /// Run a query against the service
    pub fn read<R>(&self, f: impl FnOnce(&ShelterService) -> R) -> Result<R, ShelterUnavailable> {
        let service = self.service.read().map_err(|_| ShelterUnavailable {
            message: "Failed to acquire read lock".to_string(),
        })?;
        Ok(f(&service))
    }

    /// Run a mutation against the service
    pub fn write<R>(
        &self,
        f: impl FnOnce(&mut ShelterService) -> R,
    ) -> Result<R, ShelterUnavailable> {
        let mut service = self.service.write().map_err(|_| ShelterUnavailable {
            message: "Failed to acquire write lock".to_string(),
        })?;
        Ok(f(&mut service))
    }
}
