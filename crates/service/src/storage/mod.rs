//! Storage backends for the service layer.
//!
//! State lives only in process memory and is lost on restart.

pub mod memory_store;
