// src/integer_math/factorization_factory.rs

use num::Integer;
use crate::integer_math::modular::{mul_mod, pow_mod};

pub struct FactorizationFactory;

impl FactorizationFactory {
    // Deterministic for every n < 2^64
    const PRIME_CHECK_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    pub fn is_probable_prime(input: u64) -> bool {
        if input < 2 {
            return false;
        }
        for &p in &Self::PRIME_CHECK_BASES {
            if input == p {
                return true;
            }
            if input % p == 0 {
                return false;
            }
        }

        let mut d = input - 1;
        let mut s = 0;
        while d.is_even() {
            d /= 2;
            s += 1;
        }

        'witness: for &a in &Self::PRIME_CHECK_BASES {
            let mut x = pow_mod(a, d, input);
            if x == 1 || x == input - 1 {
                continue;
            }
            for _ in 1..s {
                x = mul_mod(x, x, input);
                if x == input - 1 {
                    continue 'witness;
                }
                if x == 1 {
                    return false;
                }
            }
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let primes: Vec<u64> = (0..60).filter(|&n| FactorizationFactory::is_probable_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]);
    }

    #[test]
    fn test_composites() {
        for n in [9u64, 15, 21, 35, 123, 561, 8051, 1_000_730_021] {
            assert!(!FactorizationFactory::is_probable_prime(n), "{} is composite", n);
        }
    }

    #[test]
    fn test_large_prime() {
        assert!(FactorizationFactory::is_probable_prime(1_000_000_007));
        assert!(FactorizationFactory::is_probable_prime(u64::MAX - 58));
    }
}
