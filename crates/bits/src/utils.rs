use num_bigint_dig::BigUint;
use num_traits::{Num, One};

/// Returns `2^nbits - 1`.
pub fn low_mask(nbits: usize) -> BigUint {
    (BigUint::one() << nbits) - BigUint::one()
}

/// Parses an unsigned literal, picking the radix from a `0x` / `0b` prefix and falling back
/// to decimal. Underscores are accepted as digit separators.
pub fn parse_biguint_auto(s: &str) -> Option<BigUint> {
    let s = s.trim().replace('_', "");
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        BigUint::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        BigUint::from_str_radix(bin, 2).ok()
    } else {
        BigUint::from_str_radix(&s, 10).ok()
    }
}
