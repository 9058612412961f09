//! # Kennel Shelter Use Case Layer
//!
//! Application-specific business rules.
//! This layer sits between the transport and the allocation engine:
//! it validates arrivals, logs what happened, and turns engine outcomes
//! into `ServiceError`s the adapters can map.

pub mod error;
pub mod seed;
pub mod service;
pub mod validation;

pub use shelter_domain;

pub use error::{Result, ServiceError};
pub use seed::demo_roster;
pub use service::{SeedReport, ShelterService};
pub use validation::{AdmissionRequest, ValidationErrors};
