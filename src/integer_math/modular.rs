// src/integer_math/modular.rs
//
// Modular arithmetic on u64 operands. Products are widened to u128 so the
// full u64 modulus range is usable without overflow.

/// (a * b) mod m
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// base^exponent mod m by square-and-multiply.
///
/// Returns 0 for m == 1, matching the convention that every residue mod 1 is 0.
pub fn pow_mod(base: u64, mut exponent: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }

    let mut result = 1u64;
    let mut b = base % m;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, b, m);
        }
        b = mul_mod(b, b, m);
        exponent >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_mod_no_overflow() {
        let m = u64::MAX - 58; // largest 64-bit prime
        assert_eq!(mul_mod(m - 1, m - 1, m), 1);
    }

    #[test]
    fn test_pow_mod_small() {
        assert_eq!(pow_mod(2, 4, 15), 1);
        assert_eq!(pow_mod(2, 6, 35), 29);
        assert_eq!(pow_mod(7, 0, 15), 1);
        assert_eq!(pow_mod(7, 3, 1), 0);
    }

    #[test]
    fn test_pow_mod_fermat() {
        // a^(p-1) = 1 mod p for prime p
        let p = 1_000_000_007u64;
        assert_eq!(pow_mod(123_456_789, p - 1, p), 1);
    }
}
