//! State Adapters - Ownership of the engine across requests
//!
//! State lives only for the lifetime of the process.

pub mod in_memory;
