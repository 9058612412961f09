//! # Kennel Shelter Domain Layer
//!
//! The kennel allocation engine - pure business logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - Entities & Value Objects (Animal, Kennel)       ││
//! │  │  service/ - Domain services (Shelter)                       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! The HTTP layer, JSON shapes and request validation all live outside.
//! If the transport changes, this crate doesn't change.

pub mod model;
pub mod service;

// Re-export commonly used types
pub use model::{
    animal::{Animal, AnimalId, NewAnimal},
    kennel::{Kennel, KennelId, Occupancy},
    kennel_size::KennelSize,
};

pub use service::shelter::{Shelter, ShelterError};
