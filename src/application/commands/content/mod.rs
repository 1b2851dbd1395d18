// src/application/commands/content/mod.rs
mod prepare;
mod service;

pub use prepare::{PrepareContentCommand, PrepareContentCommandBuilder};
pub use service::ContentCommandService;
