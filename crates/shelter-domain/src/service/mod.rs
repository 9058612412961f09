//! Domain Services - Business logic that spans many entities
//!
//! The Shelter owns every kennel and decides where each animal lives.

pub mod shelter;
