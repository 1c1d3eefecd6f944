// src/lib.rs

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod factor;
pub mod integer_math;
