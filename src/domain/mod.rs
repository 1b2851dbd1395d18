// src/domain/mod.rs
pub mod content;
pub mod errors;
pub mod seo;
