// src/config/mod.rs

pub mod shor_config;

// Re-export main types for convenience
pub use shor_config::ShorConfig;
