// src/integer_math/gcd.rs

use num::Integer;

pub struct GCD;

impl GCD {
    pub fn find_lcm_pair(left: u64, right: u64) -> u64 {
        if left == 0 || right == 0 {
            return 0;
        }
        left / Self::find_gcd_pair(left, right) * right
    }

    pub fn find_gcd(numbers: &[u64]) -> u64 {
        numbers.iter().fold(0, |acc, &x| Self::find_gcd_pair(acc, x))
    }

    pub fn find_gcd_pair(left: u64, right: u64) -> u64 {
        left.gcd(&right)
    }

    pub fn are_coprime(left: u64, right: u64) -> bool {
        Self::find_gcd_pair(left, right) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_pair() {
        assert_eq!(GCD::find_gcd_pair(42, 123), 3);
        assert_eq!(GCD::find_gcd_pair(0, 15), 15);
        assert_eq!(GCD::find_gcd_pair(7, 21), 7);
    }

    #[test]
    fn test_gcd_slice_and_lcm() {
        assert_eq!(GCD::find_gcd(&[12, 18, 30]), 6);
        assert_eq!(GCD::find_lcm_pair(4, 6), 12);
        assert_eq!(GCD::find_lcm_pair(0, 6), 0);
    }

    #[test]
    fn test_coprime() {
        assert!(GCD::are_coprime(2, 35));
        assert!(!GCD::are_coprime(14, 35));
    }
}
