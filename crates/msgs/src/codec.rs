use num_bigint_dig::BigUint;
use xmsg_bits::{BitLayout, Bits, OverflowPolicy};

use crate::{CodecError, MsgKind};

/// Layout-driven packing shared by every message codec.
#[derive(Clone, Debug)]
pub(crate) struct FieldCodec {
    kind: MsgKind,
    layout: BitLayout,
    policy: OverflowPolicy,
}

impl FieldCodec {
    pub fn new(kind: MsgKind, layout: BitLayout, policy: OverflowPolicy) -> Self {
        tracing::debug!(
            "{} codec: {} bits [{}], overflow policy {:?}",
            kind,
            layout.nbits(),
            layout,
            policy
        );
        Self {
            kind,
            layout,
            policy,
        }
    }

    pub fn layout(&self) -> &BitLayout {
        &self.layout
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn pack<I>(&self, values: I) -> Result<Bits, CodecError>
    where
        I: IntoIterator,
        I::Item: Into<BigUint>,
    {
        let bits = self.layout.pack(values, self.policy)?;
        tracing::trace!("encoded {}: {}", self.kind, bits);
        Ok(bits)
    }

    /// Accepts `bits` as a message of this kind if its width matches the layout.
    pub fn check(&self, bits: Bits) -> Result<Bits, CodecError> {
        if bits.nbits() != self.layout.nbits() {
            return Err(CodecError::WidthMismatch {
                kind: self.kind,
                expected: self.layout.nbits(),
                actual: bits.nbits(),
            });
        }
        tracing::trace!("received {}: {}", self.kind, bits);
        Ok(bits)
    }

    pub fn field(&self, bits: &Bits, index: usize) -> Bits {
        self.layout.extract(bits, index)
    }

    pub fn field_u64(&self, bits: &Bits, index: usize) -> u64 {
        self.field(bits, index).low_u64()
    }
}
