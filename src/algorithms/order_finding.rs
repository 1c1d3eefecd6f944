// src/algorithms/order_finding.rs
//
// Order finding: the multiplicative order r of a base a modulo N, i.e. the
// smallest r > 0 with a^r = 1 (mod N).
//
// In Shor's algorithm this is the step handed to the quantum computer. Here
// it is an `OrderOracle` so a quantum backend can be plugged in from outside;
// the crate itself ships only the naive classical search.

use log::debug;
use crate::integer_math::gcd::GCD;
use crate::integer_math::modular::mul_mod;

/// Computes the multiplicative order of `base` modulo `n`.
///
/// `None` means the oracle gave up; the factor finder treats that as an
/// inconclusive attempt and moves on to another base.
pub trait OrderOracle: Send + Sync {
    fn name(&self) -> &str;

    fn find_order(&self, base: u64, n: u64) -> Option<u64>;
}

/// Classical order search by repeated multiplication: O(r) steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalOrderFinder {
    search_limit: Option<u64>,
}

impl ClassicalOrderFinder {
    pub fn new(search_limit: Option<u64>) -> Self {
        ClassicalOrderFinder { search_limit }
    }
}

impl OrderOracle for ClassicalOrderFinder {
    fn name(&self) -> &str {
        "classical"
    }

    fn find_order(&self, base: u64, n: u64) -> Option<u64> {
        // The powers of a non-unit never return to 1
        if base <= 1 || base >= n || !GCD::are_coprime(base, n) {
            return None;
        }

        let mut r = 1u64;
        let mut y = base;
        while y != 1 {
            if self.search_limit.is_some_and(|limit| r >= limit) {
                debug!("Order search for a = {} stopped at limit {}", base, r);
                return None;
            }
            y = mul_mod(y, base, n);
            r += 1;
        }
        Some(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_orders() {
        let finder = ClassicalOrderFinder::default();
        assert_eq!(finder.find_order(2, 15), Some(4));
        assert_eq!(finder.find_order(2, 21), Some(6));
        assert_eq!(finder.find_order(2, 35), Some(12));
        assert_eq!(finder.find_order(100, 123), Some(5));
        assert_eq!(finder.find_order(2, 9), Some(6));
        assert_eq!(finder.find_order(14, 15), Some(2));
    }

    #[test]
    fn test_order_matches_lcm_of_prime_orders() {
        // ord_35(2) = lcm(ord_5(2), ord_7(2)) = lcm(4, 3)
        let finder = ClassicalOrderFinder::default();
        let expected = GCD::find_lcm_pair(
            finder.find_order(2, 5).unwrap(),
            finder.find_order(2, 7).unwrap(),
        );
        assert_eq!(finder.find_order(2, 35), Some(expected));
    }

    #[test]
    fn test_rejects_non_units() {
        let finder = ClassicalOrderFinder::default();
        assert_eq!(finder.find_order(3, 15), None);
        assert_eq!(finder.find_order(1, 15), None);
        assert_eq!(finder.find_order(15, 15), None);
    }

    #[test]
    fn test_search_limit() {
        let finder = ClassicalOrderFinder::new(Some(5));
        assert_eq!(finder.find_order(2, 15), Some(4));
        assert_eq!(finder.find_order(2, 35), None);
        assert_eq!(finder.name(), "classical");
    }
}
