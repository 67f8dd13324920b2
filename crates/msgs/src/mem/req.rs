use num_bigint_dig::BigUint;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};
use xmsg_bits::{BitLayout, Bits, OverflowPolicy};

use super::{trace_blank, trace_hex, type_label, MemMsgType};
use crate::{codec::FieldCodec, CodecError, MemMsgConfig, MemReqMsg, MsgKind, MEM_TYPE_NBITS};

/// Fields of a memory request, most significant first. `opaque`, `addr` and `data` are sized
/// by the [MemMsgConfig]; `len` is sized from `data`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum MemReqField {
    Type,
    Opaque,
    Addr,
    Len,
    Data,
}

impl MemReqField {
    pub fn nbits(self, config: &MemMsgConfig) -> usize {
        match self {
            MemReqField::Type => MEM_TYPE_NBITS,
            MemReqField::Opaque => config.opaque_nbits,
            MemReqField::Addr => config.addr_nbits,
            MemReqField::Len => config.len_nbits(),
            MemReqField::Data => config.data_nbits,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The caller-supplied fields of a memory request. `len` is derived, never supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, derive_new::new)]
pub struct MemReqFields {
    pub ty: u8,
    pub opaque: u64,
    pub addr: u64,
    pub data: BigUint,
}

#[derive(Clone, Debug)]
pub struct MemReqCodec {
    config: MemMsgConfig,
    inner: FieldCodec,
}

impl MemReqCodec {
    pub fn new(config: MemMsgConfig, policy: OverflowPolicy) -> Result<Self, CodecError> {
        config.validate()?;
        let layout =
            BitLayout::msb_first(MemReqField::iter().map(|f| (f.name(), f.nbits(&config))));
        Ok(Self {
            config,
            inner: FieldCodec::new(MsgKind::MemReq, layout, policy),
        })
    }

    pub fn config(&self) -> &MemMsgConfig {
        &self.config
    }

    pub fn layout(&self) -> &BitLayout {
        self.inner.layout()
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.inner.policy()
    }

    /// Builds a request with a zero `opaque` tag.
    pub fn encode(
        &self,
        ty: u8,
        addr: u64,
        data: impl Into<BigUint>,
    ) -> Result<MemReqMsg, CodecError> {
        self.encode_fields(&MemReqFields::new(ty, 0, addr, data.into()))
    }

    pub fn encode_fields(&self, fields: &MemReqFields) -> Result<MemReqMsg, CodecError> {
        self.inner
            .pack([
                BigUint::from(fields.ty),
                BigUint::from(fields.opaque),
                BigUint::from(fields.addr),
                BigUint::from(self.config.derived_len()),
                fields.data.clone(),
            ])
            .map(MemReqMsg)
    }

    /// Wraps a received bit vector, checking its width against this codec's layout.
    pub fn message(&self, bits: Bits) -> Result<MemReqMsg, CodecError> {
        self.inner.check(bits).map(MemReqMsg)
    }

    pub fn decode_type(&self, msg: &MemReqMsg) -> u8 {
        self.field_u64(msg, MemReqField::Type) as u8
    }

    pub fn decode_opaque(&self, msg: &MemReqMsg) -> u64 {
        self.field_u64(msg, MemReqField::Opaque)
    }

    pub fn decode_addr(&self, msg: &MemReqMsg) -> u64 {
        self.field_u64(msg, MemReqField::Addr)
    }

    pub fn decode_len(&self, msg: &MemReqMsg) -> u64 {
        self.field_u64(msg, MemReqField::Len)
    }

    pub fn decode_data(&self, msg: &MemReqMsg) -> BigUint {
        self.inner
            .field(msg.as_bits(), MemReqField::Data as usize)
            .into_value()
    }

    pub fn decode_fields(&self, msg: &MemReqMsg) -> MemReqFields {
        MemReqFields::new(
            self.decode_type(msg),
            self.decode_opaque(msg),
            self.decode_addr(msg),
            self.decode_data(msg),
        )
    }

    /// Renders the request as `rd:<opaque>:<addr>:` / `wr:<opaque>:<addr>:<data>`. Read
    /// requests leave the data column blank.
    pub fn line_trace(&self, msg: &MemReqMsg) -> String {
        let ty = self.decode_type(msg);
        let data = if MemMsgType::from_repr(ty) == Some(MemMsgType::Read) {
            trace_blank(self.config.data_nbits)
        } else {
            trace_hex(self.config.data_nbits, self.decode_data(msg))
        };
        format!(
            "{}:{}:{}:{}",
            type_label(ty),
            trace_hex(self.config.opaque_nbits, self.decode_opaque(msg)),
            trace_hex(self.config.addr_nbits, self.decode_addr(msg)),
            data
        )
    }

    fn field_u64(&self, msg: &MemReqMsg, field: MemReqField) -> u64 {
        self.inner.field_u64(msg.as_bits(), field as usize)
    }
}
