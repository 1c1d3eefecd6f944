// src/error.rs

use thiserror::Error;

/// Result type for factoring operations
pub type Result<T> = std::result::Result<T, FactorError>;

/// Errors that can end a factoring call.
///
/// A base whose order does not produce a factor is not an error; the finder
/// simply moves on to the next base.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorError {
    /// Target or initial base outside the accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Target has no non-trivial divisors
    #[error("{0} is prime and has no non-trivial factors")]
    PrimeInput(u64),

    /// Attempt budget reached, or every candidate base was tried
    #[error("No factor of {n} found after {attempts} attempts")]
    ExhaustedAttempts {
        /// Target being factored
        n: u64,
        /// Number of bases tried
        attempts: usize,
    },

    /// Quantum order finding was requested but no oracle was supplied
    #[error("Quantum order finding requested but no quantum oracle is configured")]
    QuantumOracleUnavailable,

    /// Cancellation token fired between attempts
    #[error("Factoring cancelled after {attempts} attempts")]
    Cancelled {
        /// Number of bases tried before cancellation
        attempts: usize,
    },
}
