// src/algorithms/mod.rs
//
// Factoring by order finding (the classical skeleton of Shor's algorithm).
//
// Stage               Module            Notes
// ─────────────────────────────────────────────────────────────────────────
// Base selection      base_pool         [2, N-2], without replacement
// Order finding       order_finding     classical search or plugged-in oracle
// Order test          order_test        textbook or reference gcd formula
// Control loop        shor              retries, budget, cancellation
// Trace               report            per-attempt outcomes, JSON
//
// Usage:
//   let pair = factor(15, 2, false)?;             // FactorPair { d1: 3, d2: 5 }
//   let reports = factor_batch(&finder, &jobs, false);

pub mod base_pool;
pub mod order_finding;
pub mod report;
pub mod shor;

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use crate::config::ShorConfig;
use crate::core::static_random::StaticRandom;
use crate::error::Result;
use crate::factor::FactorPair;
use self::report::FactorReport;
use self::shor::FactorFinder;

/// Where the order of a base comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderFindingMethod {
    /// Repeated multiplication, O(r)
    Classical,
    /// Externally supplied quantum period finding
    Quantum,
}

impl OrderFindingMethod {
    pub fn name(&self) -> &str {
        match self {
            Self::Classical => "Classical order finding",
            Self::Quantum => "Quantum order finding",
        }
    }
}

/// One target in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorJob {
    pub n: u64,
    pub initial_base: u64,
}

impl FactorJob {
    pub fn new(n: u64, initial_base: u64) -> Self {
        FactorJob { n, initial_base }
    }
}

/// Factors `n` with the default configuration.
///
/// # Examples
/// ```
/// use shor_factor::algorithms::factor;
///
/// let pair = factor(15, 2, false).unwrap();
/// assert_eq!((pair.d1, pair.d2), (3, 5));
/// ```
pub fn factor(n: u64, initial_base: u64, use_quantum: bool) -> Result<FactorPair> {
    FactorFinder::new(ShorConfig::default())
        .factor(n, initial_base, use_quantum)
        .map(|report| report.factors)
}

/// Factors every job in parallel.
///
/// Job `i` draws bases from its own stream seeded with `seed + i`, so a
/// seeded batch gives the same results however rayon schedules it.
pub fn factor_batch(finder: &FactorFinder, jobs: &[FactorJob], use_quantum: bool) -> Vec<Result<FactorReport>> {
    let seed = finder.config().seed;
    let run = || -> Vec<Result<FactorReport>> {
        jobs.par_iter()
            .enumerate()
            .map(|(i, job)| {
                let mut rng = StaticRandom::from_optional_seed(seed.map(|s| s.wrapping_add(i as u64)));
                finder.factor_with_rng(job.n, job.initial_base, use_quantum, &mut rng)
            })
            .collect()
    };

    info!("Factoring batch of {} targets", jobs.len());

    match finder.config().threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!("Could not build a {}-thread pool ({}), using the global pool", threads, e);
                run()
            }
        },
        None => run(),
    }
}
