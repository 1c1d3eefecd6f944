// src/core/mod.rs

pub mod cancellation_token;
pub mod static_random;
