//! MSB-first field tables.
//!
//! A [BitLayout] lists the fields of a message in concatenation order, most significant
//! first, and assigns every field its offset from the LSB. The same table drives packing and
//! extraction, so both paths always agree on positions.

use std::fmt;

use itertools::Itertools;
use num_bigint_dig::BigUint;
use num_traits::Zero;

use crate::{Bits, BitsError, OverflowPolicy};

/// A named field at a fixed position within a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSlot {
    pub name: &'static str,
    /// Offset of the field's lowest bit from bit 0 of the message.
    pub lsb: usize,
    pub nbits: usize,
}

impl FieldSlot {
    /// Index of the field's highest bit, or `None` for a zero-width field.
    pub fn msb(&self) -> Option<usize> {
        (self.nbits > 0).then(|| self.lsb + self.nbits - 1)
    }
}

impl fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.msb() {
            Some(msb) => write!(f, "{}[{}:{}]", self.name, msb, self.lsb),
            None => write!(f, "{}[]", self.name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitLayout {
    slots: Vec<FieldSlot>,
    nbits: usize,
}

impl BitLayout {
    /// Builds a layout from `(name, nbits)` pairs given most significant first. The last
    /// field ends up at bit 0.
    pub fn msb_first(fields: impl IntoIterator<Item = (&'static str, usize)>) -> Self {
        let fields = fields.into_iter().collect_vec();
        let nbits = fields.iter().map(|&(_, nbits)| nbits).sum();

        let mut lsb = nbits;
        let slots = fields
            .into_iter()
            .map(|(name, nbits)| {
                lsb -= nbits;
                FieldSlot { name, lsb, nbits }
            })
            .collect();
        Self { slots, nbits }
    }

    /// Total width of the message.
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    pub fn slots(&self) -> &[FieldSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> &FieldSlot {
        &self.slots[index]
    }

    pub fn find(&self, name: &str) -> Option<&FieldSlot> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    /// Concatenates `values`, one per slot and in slot order, into a single vector.
    ///
    /// Each value goes through `policy` first, so the result never exceeds [Self::nbits].
    pub fn pack<I>(&self, values: I, policy: OverflowPolicy) -> Result<Bits, BitsError>
    where
        I: IntoIterator,
        I::Item: Into<BigUint>,
    {
        let values = values.into_iter().map(Into::into).collect_vec();
        if values.len() != self.slots.len() {
            return Err(BitsError::FieldCountMismatch {
                expected: self.slots.len(),
                actual: values.len(),
            });
        }

        let mut acc = BigUint::zero();
        for (slot, value) in self.slots.iter().zip_eq(values) {
            let value = policy.fit(slot.name, slot.nbits, value)?;
            acc = &(acc << slot.nbits) | &value;
        }
        Bits::new(self.nbits, acc)
    }

    /// Extracts the field at `index`.
    pub fn extract(&self, bits: &Bits, index: usize) -> Bits {
        let slot = self.slot(index);
        bits.slice(slot.lsb, slot.nbits)
    }

    /// Extracts every field, in slot order.
    pub fn unpack(&self, bits: &Bits) -> Vec<Bits> {
        self.slots
            .iter()
            .map(|slot| bits.slice(slot.lsb, slot.nbits))
            .collect()
    }
}

impl fmt::Display for BitLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slots.iter().join(" "))
    }
}
