// src/factor/factor_pair.rs

use serde::{Serialize, Deserialize};
use crate::error::{FactorError, Result};

/// A non-trivial factorization `d1 * d2 == n`, kept in the order found:
/// `d1` is the divisor the finder discovered, `d2` its cofactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorPair {
    pub d1: u64,
    pub d2: u64,
}

impl FactorPair {
    /// Builds the pair `(divisor, n / divisor)`, rejecting trivial or
    /// non-dividing values.
    pub fn from_divisor(n: u64, divisor: u64) -> Result<Self> {
        if divisor <= 1 || divisor >= n || n % divisor != 0 {
            return Err(FactorError::InvalidArgument(format!(
                "{} is not a non-trivial divisor of {}", divisor, n
            )));
        }
        Ok(FactorPair { d1: divisor, d2: n / divisor })
    }

    pub fn product(&self) -> u128 {
        self.d1 as u128 * self.d2 as u128
    }

    /// Same pair with the smaller factor first
    pub fn sorted(&self) -> Self {
        FactorPair { d1: self.d1.min(self.d2), d2: self.d1.max(self.d2) }
    }
}

impl From<FactorPair> for (u64, u64) {
    fn from(pair: FactorPair) -> Self {
        (pair.d1, pair.d2)
    }
}

impl std::fmt::Display for FactorPair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} × {}", self.d1, self.d2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_divisor() {
        let pair = FactorPair::from_divisor(21, 7).unwrap();
        assert_eq!(pair, FactorPair { d1: 7, d2: 3 });
        assert_eq!(pair.product(), 21);
        assert_eq!(pair.sorted(), FactorPair { d1: 3, d2: 7 });
        assert_eq!(<(u64, u64)>::from(pair), (7, 3));
        assert_eq!(pair.to_string(), "7 × 3");
    }

    #[test]
    fn test_rejects_trivial() {
        assert!(FactorPair::from_divisor(21, 1).is_err());
        assert!(FactorPair::from_divisor(21, 21).is_err());
        assert!(FactorPair::from_divisor(21, 5).is_err());
        assert!(FactorPair::from_divisor(21, 0).is_err());
    }
}
