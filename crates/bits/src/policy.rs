use num_bigint_dig::BigUint;
use serde::{Deserialize, Serialize};

use crate::{utils::low_mask, BitsError};

/// What to do with a field value wider than its declared width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Fail the encode with [BitsError::FieldOverflow].
    #[default]
    Reject,
    /// Keep the low bits and drop the rest.
    Truncate,
}

impl OverflowPolicy {
    /// Applies the policy to `value` for the field `field` of width `nbits`.
    pub fn fit(
        self,
        field: &'static str,
        nbits: usize,
        value: BigUint,
    ) -> Result<BigUint, BitsError> {
        if value.bits() <= nbits {
            return Ok(value);
        }
        match self {
            OverflowPolicy::Reject => Err(BitsError::FieldOverflow {
                field,
                nbits,
                value,
            }),
            OverflowPolicy::Truncate => {
                tracing::warn!(
                    "truncating field `{}`: {:#x} does not fit in {} bits",
                    field,
                    value,
                    nbits
                );
                Ok(&value & &low_mask(nbits))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_in_range() {
        for policy in [OverflowPolicy::Reject, OverflowPolicy::Truncate] {
            assert_eq!(
                policy.fit("opcode", 7, BigUint::from(0x7fu32)),
                Ok(BigUint::from(0x7fu32))
            );
        }
    }

    #[test]
    fn test_fit_overflow() {
        assert_eq!(
            OverflowPolicy::Reject.fit("opcode", 7, BigUint::from(0x80u32)),
            Err(BitsError::FieldOverflow {
                field: "opcode",
                nbits: 7,
                value: BigUint::from(0x80u32),
            })
        );
        assert_eq!(
            OverflowPolicy::Truncate.fit("opcode", 7, BigUint::from(0x181u32)),
            Ok(BigUint::from(0x01u32))
        );
    }

    #[test]
    fn test_default_rejects() {
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Reject);
    }
}
