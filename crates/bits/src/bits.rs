use std::fmt;

use num_bigint_dig::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::{
    utils::{low_mask, parse_biguint_auto},
    BitsError,
};

/// An unsigned bit vector of a fixed, declared width.
///
/// Invariant: `value < 2^nbits`. A zero-width vector always holds `0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bits {
    nbits: usize,
    value: BigUint,
}

impl Bits {
    /// Creates a bit vector, failing if `value` needs more than `nbits` bits.
    pub fn new(nbits: usize, value: impl Into<BigUint>) -> Result<Self, BitsError> {
        let value = value.into();
        if value.bits() > nbits {
            return Err(BitsError::Overflow { nbits, value });
        }
        Ok(Self { nbits, value })
    }

    /// Creates a bit vector from the low `nbits` bits of `value`.
    pub fn truncated(nbits: usize, value: impl Into<BigUint>) -> Self {
        let value = value.into();
        let value = if value.bits() > nbits {
            &value & &low_mask(nbits)
        } else {
            value
        };
        Self { nbits, value }
    }

    pub fn zero(nbits: usize) -> Self {
        Self {
            nbits,
            value: BigUint::zero(),
        }
    }

    /// Parses a `0x` / `0b` / decimal literal into a vector of width `nbits`.
    pub fn parse(nbits: usize, literal: &str) -> Result<Self, BitsError> {
        let value = parse_biguint_auto(literal)
            .ok_or_else(|| BitsError::InvalidLiteral(literal.to_string()))?;
        Self::new(nbits, value)
    }

    pub fn nbits(&self) -> usize {
        self.nbits
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_value(self) -> BigUint {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns the `nbits`-wide slice starting at bit `lsb`. Bits past the top of the vector
    /// read as zero.
    pub fn slice(&self, lsb: usize, nbits: usize) -> Bits {
        let shifted = &self.value >> lsb;
        Bits::truncated(nbits, shifted)
    }

    /// The low 64 bits of the vector.
    pub fn low_u64(&self) -> u64 {
        let low = &self.value & &BigUint::from(u64::MAX);
        low.to_u64().unwrap_or_default()
    }

    /// Number of hex digits needed to print every bit of the vector.
    pub fn hex_digits(&self) -> usize {
        self.nbits.div_ceil(4)
    }
}

impl From<Bits> for BigUint {
    fn from(bits: Bits) -> Self {
        bits.value
    }
}

/// Zero-padded lowercase hex, one digit per started nibble.
impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.hex_digits();
        if width == 0 {
            return Ok(());
        }
        write!(f, "{:0>width$}", self.value.to_str_radix(16), width = width)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_new_checks_width() {
        let bits = Bits::new(7, 0x7fu32).unwrap();
        assert_eq!(bits.nbits(), 7);
        assert_eq!(bits.low_u64(), 0x7f);

        assert_eq!(
            Bits::new(7, 0x80u32),
            Err(BitsError::Overflow {
                nbits: 7,
                value: BigUint::from(0x80u32)
            })
        );
    }

    #[test]
    fn test_zero_width() {
        assert!(Bits::new(0, 0u32).unwrap().is_zero());
        assert!(Bits::new(0, 1u32).is_err());
        assert!(Bits::truncated(0, 0xffu32).is_zero());
        assert_eq!(Bits::zero(0).to_string(), "");
    }

    #[test_case(7, 0x80, 0x00)]
    #[test_case(7, 0xff, 0x7f)]
    #[test_case(5, 0x25, 0x05)]
    #[test_case(64, u64::MAX, u64::MAX)]
    fn test_truncated(nbits: usize, value: u64, expected: u64) {
        let bits = Bits::truncated(nbits, value);
        assert_eq!(bits.low_u64(), expected);
        assert!(bits.value().bits() <= nbits);
    }

    #[test]
    fn test_slice() {
        let bits = Bits::new(16, 0xabcdu32).unwrap();
        assert_eq!(bits.slice(0, 4).low_u64(), 0xd);
        assert_eq!(bits.slice(4, 8).low_u64(), 0xbc);
        assert_eq!(bits.slice(12, 4).low_u64(), 0xa);
        assert_eq!(bits.slice(12, 8).low_u64(), 0xa);
        assert_eq!(bits.slice(16, 8).low_u64(), 0);
    }

    #[test]
    fn test_low_u64_of_wide_vector() {
        let value = &(BigUint::from(0x1234u32) << 64usize) | &BigUint::from(0xdead_beefu32);
        let bits = Bits::new(80, value).unwrap();
        assert_eq!(bits.low_u64(), 0xdead_beef);
    }

    #[test_case(3, 0b010, "2")]
    #[test_case(5, 0x1f, "1f")]
    #[test_case(32, 0xdeadbeef, "deadbeef")]
    #[test_case(69, 0xff, "0000000000000000ff")]
    fn test_display(nbits: usize, value: u64, expected: &str) {
        assert_eq!(Bits::new(nbits, value).unwrap().to_string(), expected);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Bits::parse(32, "0xdeadbeef").unwrap().low_u64(), 0xdead_beef);
        assert_eq!(Bits::parse(3, "0b110").unwrap().low_u64(), 0b110);
        assert!(matches!(
            Bits::parse(3, "0b1000"),
            Err(BitsError::Overflow { nbits: 3, .. })
        ));
        assert_eq!(
            Bits::parse(8, "0xzz"),
            Err(BitsError::InvalidLiteral("0xzz".to_string()))
        );
    }
}
