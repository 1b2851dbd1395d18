// src/application/mod.rs
//! Content use cases: preparing a record for save, and the read-only
//! analysis, review and metadata queries the editor and renderer call.
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
