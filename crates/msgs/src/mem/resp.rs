use num_bigint_dig::BigUint;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};
use xmsg_bits::{BitLayout, Bits, OverflowPolicy};

use super::{trace_blank, trace_hex, type_label, MemMsgType};
use crate::{
    codec::FieldCodec, CodecError, MemMsgConfig, MemRespMsg, MsgKind, MEM_TEST_NBITS,
    MEM_TYPE_NBITS,
};

/// Fields of a memory response, most significant first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum MemRespField {
    Type,
    Opaque,
    Test,
    Len,
    Data,
}

impl MemRespField {
    pub fn nbits(self, config: &MemMsgConfig) -> usize {
        match self {
            MemRespField::Type => MEM_TYPE_NBITS,
            MemRespField::Opaque => config.opaque_nbits,
            MemRespField::Test => MEM_TEST_NBITS,
            MemRespField::Len => config.len_nbits(),
            MemRespField::Data => config.data_nbits,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, derive_new::new)]
pub struct MemRespFields {
    pub ty: u8,
    pub opaque: u64,
    /// Two spare bits the memory model may use to report test information (e.g. hit/miss).
    pub test: u8,
    pub data: BigUint,
}

#[derive(Clone, Debug)]
pub struct MemRespCodec {
    config: MemMsgConfig,
    inner: FieldCodec,
}

impl MemRespCodec {
    pub fn new(config: MemMsgConfig, policy: OverflowPolicy) -> Result<Self, CodecError> {
        config.validate()?;
        let layout =
            BitLayout::msb_first(MemRespField::iter().map(|f| (f.name(), f.nbits(&config))));
        Ok(Self {
            config,
            inner: FieldCodec::new(MsgKind::MemResp, layout, policy),
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

    /// Builds a response with zero `opaque` and `test` fields.
    pub fn encode(&self, ty: u8, data: impl Into<BigUint>) -> Result<MemRespMsg, CodecError> {
        self.encode_fields(&MemRespFields::new(ty, 0, 0, data.into()))
    }

    pub fn encode_fields(&self, fields: &MemRespFields) -> Result<MemRespMsg, CodecError> {
        self.inner
            .pack([
                BigUint::from(fields.ty),
                BigUint::from(fields.opaque),
                BigUint::from(fields.test),
                BigUint::from(self.config.derived_len()),
                fields.data.clone(),
            ])
            .map(MemRespMsg)
    }

    /// Wraps a received bit vector, checking its width against this codec's layout.
    pub fn message(&self, bits: Bits) -> Result<MemRespMsg, CodecError> {
        self.inner.check(bits).map(MemRespMsg)
    }

    pub fn decode_type(&self, msg: &MemRespMsg) -> u8 {
        self.field_u64(msg, MemRespField::Type) as u8
    }

    pub fn decode_opaque(&self, msg: &MemRespMsg) -> u64 {
        self.field_u64(msg, MemRespField::Opaque)
    }

    pub fn decode_test(&self, msg: &MemRespMsg) -> u8 {
        self.field_u64(msg, MemRespField::Test) as u8
    }

    pub fn decode_len(&self, msg: &MemRespMsg) -> u64 {
        self.field_u64(msg, MemRespField::Len)
    }

    pub fn decode_data(&self, msg: &MemRespMsg) -> BigUint {
        self.inner
            .field(msg.as_bits(), MemRespField::Data as usize)
            .into_value()
    }

    pub fn decode_fields(&self, msg: &MemRespMsg) -> MemRespFields {
        MemRespFields::new(
            self.decode_type(msg),
            self.decode_opaque(msg),
            self.decode_test(msg),
            self.decode_data(msg),
        )
    }

    /// Renders the response as `rd:<opaque>:<data>` / `wr:<opaque>:`. Write responses leave
    /// the data column blank.
    pub fn line_trace(&self, msg: &MemRespMsg) -> String {
        let ty = self.decode_type(msg);
        let data = if MemMsgType::from_repr(ty) == Some(MemMsgType::Write) {
            trace_blank(self.config.data_nbits)
        } else {
            trace_hex(self.config.data_nbits, self.decode_data(msg))
        };
        format!(
            "{}:{}:{}",
            type_label(ty),
            trace_hex(self.config.opaque_nbits, self.decode_opaque(msg)),
            data
        )
    }

    fn field_u64(&self, msg: &MemRespMsg, field: MemRespField) -> u64 {
        self.inner.field_u64(msg.as_bits(), field as usize)
    }
}
