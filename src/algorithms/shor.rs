// src/algorithms/shor.rs
//
// Shor-style factoring by order finding:
//
//   1. N even                 -> (2, N/2)
//   2. pick base a            (initial base first, then random untried bases)
//   3. gcd(a, N) != 1         -> lucky factor
//   4. r = order of a mod N   (classical or pluggable quantum oracle)
//   5. order test             -> factor, or retry with another base
//
// Retries stop at the configured attempt budget, when every base in
// [2, N-2] has been tried, or when the cancellation token fires.

use std::time::Instant;
use chrono::Utc;
use log::{debug, info, warn};
use crate::algorithms::OrderFindingMethod;
use crate::algorithms::base_pool::BasePool;
use crate::algorithms::order_finding::{ClassicalOrderFinder, OrderOracle};
use crate::algorithms::order_test;
use crate::algorithms::report::{Attempt, AttemptOutcome, FactorReport};
use crate::config::ShorConfig;
use crate::core::cancellation_token::CancellationToken;
use crate::core::static_random::StaticRandom;
use crate::error::{FactorError, Result};
use crate::factor::FactorPair;
use crate::integer_math::factorization_factory::FactorizationFactory;
use crate::integer_math::gcd::GCD;

pub struct FactorFinder {
    config: ShorConfig,
    classical: ClassicalOrderFinder,
    quantum: Option<Box<dyn OrderOracle>>,
    cancel_token: Option<CancellationToken>,
}

impl FactorFinder {
    pub fn new(config: ShorConfig) -> Self {
        let classical = ClassicalOrderFinder::new(config.order_search_limit);
        FactorFinder {
            config,
            classical,
            quantum: None,
            cancel_token: None,
        }
    }

    /// Oracle used when quantum order finding is requested
    pub fn with_quantum_oracle(mut self, oracle: Box<dyn OrderOracle>) -> Self {
        self.quantum = Some(oracle);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    pub fn config(&self) -> &ShorConfig {
        &self.config
    }

    /// Factors `n` starting from `initial_base`, seeding the base stream from
    /// the configured seed.
    pub fn factor(&self, n: u64, initial_base: u64, use_quantum: bool) -> Result<FactorReport> {
        let mut rng = StaticRandom::from_optional_seed(self.config.seed);
        self.factor_with_rng(n, initial_base, use_quantum, &mut rng)
    }

    pub fn factor_with_rng(
        &self,
        n: u64,
        initial_base: u64,
        use_quantum: bool,
        rng: &mut StaticRandom,
    ) -> Result<FactorReport> {
        let started_at = Utc::now();
        let timer = Instant::now();

        validate(n, initial_base)?;

        let method = if use_quantum {
            OrderFindingMethod::Quantum
        } else {
            OrderFindingMethod::Classical
        };
        let report = |factors: FactorPair, attempts: Vec<Attempt>| FactorReport {
            n,
            initial_base,
            method,
            formula: self.config.formula,
            factors,
            attempts,
            started_at,
            elapsed_ms: timer.elapsed().as_secs_f64() * 1000.0,
        };

        if n % 2 == 0 {
            let factors = FactorPair::from_divisor(n, 2)?;
            info!("Found factors: {}", factors);
            return Ok(report(factors, Vec::new()));
        }

        if self.config.reject_primes && FactorizationFactory::is_probable_prime(n) {
            warn!("{} is prime, refusing to search for factors", n);
            return Err(FactorError::PrimeInput(n));
        }

        let oracle = self.oracle(method)?;
        let budget = self.config.attempt_budget();
        let mut pool = BasePool::new(n, initial_base);
        let mut attempts: Vec<Attempt> = Vec::new();

        debug!("Factoring {} with {} order finding, {} formula, budget {:?}",
               n, oracle.name(), self.config.formula, budget);

        loop {
            if self.is_cancelled() {
                warn!("Factoring {} cancelled after {} attempts", n, attempts.len());
                return Err(FactorError::Cancelled { attempts: attempts.len() });
            }

            if budget.is_some_and(|max| attempts.len() >= max) {
                warn!("Attempt budget exhausted for {} after {} attempts", n, attempts.len());
                return Err(FactorError::ExhaustedAttempts { n, attempts: attempts.len() });
            }

            let base = if attempts.is_empty() {
                initial_base
            } else {
                match pool.draw(rng) {
                    Some(base) => base,
                    None => {
                        warn!("Every base in [2, {}] tried without finding a factor of {}", n - 2, n);
                        return Err(FactorError::ExhaustedAttempts { n, attempts: attempts.len() });
                    }
                }
            };

            info!("Trying a = {}", base);
            let outcome = self.try_base(base, n, oracle);
            attempts.push(Attempt { index: attempts.len(), base, outcome });

            if let Some(divisor) = outcome.divisor() {
                let factors = FactorPair::from_divisor(n, divisor)?;
                match outcome {
                    AttemptOutcome::LuckyGcd { .. } => {
                        info!("Found factors of N = {} by chance: {}", n, factors)
                    }
                    _ => info!("Found factors of N = {}: {}", n, factors),
                }
                return Ok(report(factors, attempts));
            }

            info!("a = {}: {}, retrying...", base, outcome);
            pool.mark_tried(base);
        }
    }

    fn oracle(&self, method: OrderFindingMethod) -> Result<&dyn OrderOracle> {
        match method {
            OrderFindingMethod::Classical => Ok(&self.classical),
            OrderFindingMethod::Quantum => self
                .quantum
                .as_deref()
                .ok_or(FactorError::QuantumOracleUnavailable),
        }
    }

    fn try_base(&self, base: u64, n: u64, oracle: &dyn OrderOracle) -> AttemptOutcome {
        let divisor = GCD::find_gcd_pair(base, n);
        if divisor != 1 {
            return AttemptOutcome::LuckyGcd { divisor };
        }

        match oracle.find_order(base, n) {
            Some(order) => {
                info!("The order of a = {} is {}", base, order);
                order_test::test_order(base, order, n, self.config.formula)
            }
            None => AttemptOutcome::OrderNotFound,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_token
            .as_ref()
            .is_some_and(|token| token.is_cancellation_requested())
    }
}

fn validate(n: u64, initial_base: u64) -> Result<()> {
    if n < 2 {
        return Err(FactorError::InvalidArgument(format!("target {} must be greater than 1", n)));
    }
    if n < 4 {
        return Err(FactorError::PrimeInput(n));
    }
    if initial_base < 2 || initial_base > n - 2 {
        return Err(FactorError::InvalidArgument(format!(
            "initial base {} outside [2, {}]", initial_base, n - 2
        )));
    }
    Ok(())
}
