use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};
use xmsg_bits::{BitLayout, Bits, OverflowPolicy};

use super::{ROCC_REG_NBITS, ROCC_XLEN};
use crate::{codec::FieldCodec, CodecError, MsgKind, RoccRespMsg};

/// Fields of a RoCC response, most significant first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum RoccRespField {
    RespRd,
    RespData,
}

impl RoccRespField {
    pub const fn nbits(self) -> usize {
        match self {
            RoccRespField::RespRd => ROCC_REG_NBITS,
            RoccRespField::RespData => ROCC_XLEN,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_new::new)]
pub struct RoccRespFields {
    /// Destination register of the response.
    pub rd: u8,
    pub data: u64,
}

#[derive(Clone, Debug)]
pub struct RoccRespCodec {
    inner: FieldCodec,
}

impl RoccRespCodec {
    pub fn new(policy: OverflowPolicy) -> Self {
        let layout = BitLayout::msb_first(RoccRespField::iter().map(|f| (f.name(), f.nbits())));
        Self {
            inner: FieldCodec::new(MsgKind::RoccResp, layout, policy),
        }
    }

    pub fn layout(&self) -> &BitLayout {
        self.inner.layout()
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.inner.policy()
    }

    /// Builds a response carrying `data`, with `resp_rd` left at zero.
    pub fn encode(&self, data: u64) -> Result<RoccRespMsg, CodecError> {
        self.encode_fields(&RoccRespFields::new(0, data))
    }

    pub fn encode_fields(&self, fields: &RoccRespFields) -> Result<RoccRespMsg, CodecError> {
        self.inner
            .pack([u64::from(fields.rd), fields.data])
            .map(RoccRespMsg)
    }

    /// Wraps a received bit vector, checking that it is 69 bits wide.
    pub fn message(&self, bits: Bits) -> Result<RoccRespMsg, CodecError> {
        self.inner.check(bits).map(RoccRespMsg)
    }

    pub fn decode_data(&self, msg: &RoccRespMsg) -> u64 {
        self.inner
            .field_u64(msg.as_bits(), RoccRespField::RespData as usize)
    }

    pub fn decode_rd(&self, msg: &RoccRespMsg) -> u8 {
        self.inner
            .field_u64(msg.as_bits(), RoccRespField::RespRd as usize) as u8
    }

    pub fn decode_fields(&self, msg: &RoccRespMsg) -> RoccRespFields {
        RoccRespFields::new(self.decode_rd(msg), self.decode_data(msg))
    }
}

impl Default for RoccRespCodec {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}
