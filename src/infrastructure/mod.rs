// src/infrastructure/mod.rs
pub mod time;
pub mod util;
