//! Memory request/response messages.
//!
//! Widths of the `opaque`, `addr` and `data` fields come from a
//! [MemMsgConfig](crate::MemMsgConfig). The `len` field is never supplied by the caller: both
//! the encode and the decode side derive it from the configured data width (see
//! [MemMsgConfig::derived_len](crate::MemMsgConfig::derived_len)).

use num_bigint_dig::BigUint;
use strum_macros::{EnumCount, EnumIter, FromRepr};
use xmsg_bits::Bits;

mod req;
mod resp;

pub use req::*;
pub use resp::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MemMsgType {
    Read = 0,
    Write = 1,
}

impl MemMsgType {
    fn trace_label(self) -> &'static str {
        match self {
            MemMsgType::Read => "rd",
            MemMsgType::Write => "wr",
        }
    }
}

impl From<MemMsgType> for u8 {
    fn from(ty: MemMsgType) -> Self {
        ty as u8
    }
}

fn type_label(ty: u8) -> String {
    match MemMsgType::from_repr(ty) {
        Some(ty) => ty.trace_label().to_string(),
        None => format!("{:x}", ty),
    }
}

/// Hex digits of `value` padded to the width of an `nbits`-wide field.
fn trace_hex(nbits: usize, value: impl Into<BigUint>) -> String {
    Bits::truncated(nbits, value).to_string()
}

/// Blank space as wide as the hex rendering of an `nbits`-wide field.
fn trace_blank(nbits: usize) -> String {
    " ".repeat(nbits.div_ceil(4))
}
