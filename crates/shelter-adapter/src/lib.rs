//! # Kennel Shelter Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (HTTP routes, JSON shapes, status mapping)
//! - `repository/` - Where the single engine instance lives between requests

pub mod controller;
pub mod repository;

pub use controller::http::build_router;
pub use repository::in_memory::{SharedShelter, ShelterUnavailable};
