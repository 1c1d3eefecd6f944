// src/integer_math/mod.rs

pub mod factorization_factory;
pub mod gcd;
pub mod modular;
