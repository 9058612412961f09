//! Domain Models - The vocabulary of the shelter
//!
//! Every name here should match how shelter staff talk about the system.

pub mod animal;
pub mod kennel;
pub mod kennel_size;
