// src/factor/mod.rs

pub mod factor_pair;

pub use factor_pair::FactorPair;
