// src/algorithms/report.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::algorithms::OrderFindingMethod;
use crate::algorithms::order_test::FactorTestFormula;
use crate::factor::FactorPair;

/// What happened to a single base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// gcd(a, N) was already a non-trivial factor
    LuckyGcd { divisor: u64 },
    /// The oracle gave up on this base
    OrderNotFound,
    /// a^r != 1 (mod N) for the reported order
    OrderMismatch { order: u64 },
    OddOrder { order: u64 },
    /// a^(r/2) = -1 (mod N)
    TrivialSquareRoot { order: u64 },
    /// Both gcd candidates were 1 or N
    NoNontrivialFactor { order: u64, candidates: [u64; 2] },
    Factored { order: u64, divisor: u64 },
}

impl AttemptOutcome {
    /// The factor this outcome produced, if any
    pub fn divisor(&self) -> Option<u64> {
        match *self {
            Self::LuckyGcd { divisor } | Self::Factored { divisor, .. } => Some(divisor),
            _ => None,
        }
    }

    pub fn order(&self) -> Option<u64> {
        match *self {
            Self::LuckyGcd { .. } | Self::OrderNotFound => None,
            Self::OrderMismatch { order }
            | Self::OddOrder { order }
            | Self::TrivialSquareRoot { order }
            | Self::NoNontrivialFactor { order, .. }
            | Self::Factored { order, .. } => Some(order),
        }
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::LuckyGcd { divisor } => write!(f, "shares factor {} with N", divisor),
            Self::OrderNotFound => write!(f, "order not found"),
            Self::OrderMismatch { order } => write!(f, "reported order {} does not satisfy a^r = 1", order),
            Self::OddOrder { order } => write!(f, "order {} is odd", order),
            Self::TrivialSquareRoot { order } => write!(f, "order {} gives a^(r/2) = -1", order),
            Self::NoNontrivialFactor { order, candidates } => {
                write!(f, "order {} gives only trivial candidates {:?}", order, candidates)
            }
            Self::Factored { order, divisor } => write!(f, "order {} yields factor {}", order, divisor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub index: usize,
    pub base: u64,
    pub outcome: AttemptOutcome,
}

/// Result of a successful factoring call, with the full attempt trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorReport {
    pub n: u64,
    pub initial_base: u64,
    pub method: OrderFindingMethod,
    pub formula: FactorTestFormula,
    pub factors: FactorPair,
    /// Empty when N was even
    pub attempts: Vec<Attempt>,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: f64,
}

impl FactorReport {
    /// Bases in the order they were tried
    pub fn bases(&self) -> Vec<u64> {
        self.attempts.iter().map(|attempt| attempt.base).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(AttemptOutcome::LuckyGcd { divisor: 3 }.divisor(), Some(3));
        assert_eq!(AttemptOutcome::LuckyGcd { divisor: 3 }.order(), None);
        assert_eq!(AttemptOutcome::Factored { order: 4, divisor: 3 }.divisor(), Some(3));
        assert_eq!(AttemptOutcome::OddOrder { order: 5 }.divisor(), None);
        assert_eq!(AttemptOutcome::OddOrder { order: 5 }.order(), Some(5));
        assert_eq!(AttemptOutcome::OrderNotFound.order(), None);
    }

    #[test]
    fn test_report_json() {
        let report = FactorReport {
            n: 15,
            initial_base: 2,
            method: OrderFindingMethod::Classical,
            formula: FactorTestFormula::Textbook,
            factors: FactorPair { d1: 3, d2: 5 },
            attempts: vec![Attempt {
                index: 0,
                base: 2,
                outcome: AttemptOutcome::Factored { order: 4, divisor: 3 },
            }],
            started_at: Utc::now(),
            elapsed_ms: 0.1,
        };

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["factors"]["d1"], 3);
        assert_eq!(value["formula"], "textbook");
        assert_eq!(value["method"], "classical");
        assert_eq!(value["attempts"][0]["outcome"]["kind"], "factored");
        assert_eq!(report.bases(), vec![2]);
    }
}
