use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};
use xmsg_bits::{BitLayout, Bits, OverflowPolicy};

use super::{ROCC_CUSTOM0_OPCODE, ROCC_FUNCT_NBITS, ROCC_OPCODE_NBITS, ROCC_REG_NBITS, ROCC_XLEN};
use crate::{codec::FieldCodec, CodecError, MsgKind, RoccCmdMsg};

/// Fields of a RoCC command, most significant first. The instruction word occupies the top
/// 32 bits, followed by the two 64-bit source operands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum RoccCmdField {
    /// Accelerator function.
    InstFunct,
    InstRs2,
    InstRs1,
    /// Set if the command writes back `rd`.
    InstXd,
    /// Set if `rs1` carries data.
    InstXs1,
    /// Set if `rs2` carries data.
    InstXs2,
    InstRd,
    InstOpcode,
    /// Source register data.
    Rs1,
    /// Source register data.
    Rs2,
}

impl RoccCmdField {
    pub const fn nbits(self) -> usize {
        match self {
            RoccCmdField::InstFunct => ROCC_FUNCT_NBITS,
            RoccCmdField::InstRs2 | RoccCmdField::InstRs1 | RoccCmdField::InstRd => ROCC_REG_NBITS,
            RoccCmdField::InstXd | RoccCmdField::InstXs1 | RoccCmdField::InstXs2 => 1,
            RoccCmdField::InstOpcode => ROCC_OPCODE_NBITS,
            RoccCmdField::Rs1 | RoccCmdField::Rs2 => ROCC_XLEN,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Every physical field of a RoCC command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoccCmdFields {
    pub funct: u8,
    pub rs2: u8,
    pub rs1: u8,
    pub xd: bool,
    pub xs1: bool,
    pub xs2: bool,
    pub rd: u8,
    pub opcode: u8,
    pub rs1_data: u64,
    pub rs2_data: u64,
}

impl RoccCmdFields {
    /// The command the harness sends for an accelerator request: `ty` selects the function,
    /// `xreg` the accelerator register, and `data` rides in `rs1`.
    pub fn xcel(ty: u8, xreg: u8, data: u64) -> Self {
        Self {
            funct: ty,
            rs2: xreg,
            rs1: 0,
            xd: true,
            xs1: true,
            xs2: false,
            rd: 0,
            opcode: ROCC_CUSTOM0_OPCODE,
            rs1_data: data,
            rs2_data: 0,
        }
    }

    fn values(&self) -> [u64; <RoccCmdField as strum::EnumCount>::COUNT] {
        [
            self.funct.into(),
            self.rs2.into(),
            self.rs1.into(),
            self.xd.into(),
            self.xs1.into(),
            self.xs2.into(),
            self.rd.into(),
            self.opcode.into(),
            self.rs1_data,
            self.rs2_data,
        ]
    }
}

#[derive(Clone, Debug)]
pub struct RoccCmdCodec {
    inner: FieldCodec,
}

impl RoccCmdCodec {
    pub fn new(policy: OverflowPolicy) -> Self {
        let layout = BitLayout::msb_first(RoccCmdField::iter().map(|f| (f.name(), f.nbits())));
        Self {
            inner: FieldCodec::new(MsgKind::RoccCmd, layout, policy),
        }
    }

    pub fn layout(&self) -> &BitLayout {
        self.inner.layout()
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.inner.policy()
    }

    /// Builds a command from the harness-level `(type, xreg, data)` triple. See
    /// [RoccCmdFields::xcel] for where each value lands.
    pub fn encode(&self, ty: u8, xreg: u8, data: u64) -> Result<RoccCmdMsg, CodecError> {
        self.encode_fields(&RoccCmdFields::xcel(ty, xreg, data))
    }

    pub fn encode_fields(&self, fields: &RoccCmdFields) -> Result<RoccCmdMsg, CodecError> {
        self.inner.pack(fields.values()).map(RoccCmdMsg)
    }

    /// Wraps a received bit vector, checking that it is 160 bits wide.
    pub fn message(&self, bits: Bits) -> Result<RoccCmdMsg, CodecError> {
        self.inner.check(bits).map(RoccCmdMsg)
    }

    pub fn decode_type(&self, msg: &RoccCmdMsg) -> u8 {
        self.field(msg, RoccCmdField::InstFunct) as u8
    }

    pub fn decode_xreg(&self, msg: &RoccCmdMsg) -> u8 {
        self.field(msg, RoccCmdField::InstRs2) as u8
    }

    pub fn decode_data(&self, msg: &RoccCmdMsg) -> u64 {
        self.field(msg, RoccCmdField::Rs1)
    }

    pub fn decode_fields(&self, msg: &RoccCmdMsg) -> RoccCmdFields {
        RoccCmdFields {
            funct: self.field(msg, RoccCmdField::InstFunct) as u8,
            rs2: self.field(msg, RoccCmdField::InstRs2) as u8,
            rs1: self.field(msg, RoccCmdField::InstRs1) as u8,
            xd: self.field(msg, RoccCmdField::InstXd) != 0,
            xs1: self.field(msg, RoccCmdField::InstXs1) != 0,
            xs2: self.field(msg, RoccCmdField::InstXs2) != 0,
            rd: self.field(msg, RoccCmdField::InstRd) as u8,
            opcode: self.field(msg, RoccCmdField::InstOpcode) as u8,
            rs1_data: self.field(msg, RoccCmdField::Rs1),
            rs2_data: self.field(msg, RoccCmdField::Rs2),
        }
    }

    fn field(&self, msg: &RoccCmdMsg, field: RoccCmdField) -> u64 {
        self.inner.field_u64(msg.as_bits(), field as usize)
    }
}

impl Default for RoccCmdCodec {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;
    use xmsg_bits::BitsError;

    use super::*;

    #[test]
    fn test_layout() {
        let codec = RoccCmdCodec::default();
        let layout = codec.layout();
        assert_eq!(layout.nbits(), 160);
        assert_eq!(
            layout.to_string(),
            "inst_funct[159:153] inst_rs2[152:148] inst_rs1[147:143] inst_xd[142:142] \
             inst_xs1[141:141] inst_xs2[140:140] inst_rd[139:135] inst_opcode[134:128] \
             rs1[127:64] rs2[63:0]"
        );
    }

    #[test_case(0, 0, 0)]
    #[test_case(0x7f, 0x1f, u64::MAX)]
    #[test_case(0x01, 0x02, 0xdead_beef)]
    #[test_case(0x55, 0x0a, 0x0123_4567_89ab_cdef)]
    fn test_round_trip(ty: u8, xreg: u8, data: u64) {
        let codec = RoccCmdCodec::default();
        let msg = codec.encode(ty, xreg, data).unwrap();
        assert_eq!(msg.nbits(), 160);
        assert_eq!(codec.decode_type(&msg), ty);
        assert_eq!(codec.decode_xreg(&msg), xreg);
        assert_eq!(codec.decode_data(&msg), data);
    }

    #[test]
    fn test_xcel_defaults() {
        let codec = RoccCmdCodec::default();
        let msg = codec.encode(0x03, 0x04, 0x42).unwrap();
        assert_eq!(
            codec.decode_fields(&msg),
            RoccCmdFields {
                funct: 0x03,
                rs2: 0x04,
                rs1: 0,
                xd: true,
                xs1: true,
                xs2: false,
                rd: 0,
                opcode: ROCC_CUSTOM0_OPCODE,
                rs1_data: 0x42,
                rs2_data: 0,
            }
        );
        assert_eq!(msg.to_string(), "0640600b00000000000000420000000000000000");
    }

    #[test]
    fn test_full_fields_round_trip() {
        let codec = RoccCmdCodec::default();
        let fields = RoccCmdFields {
            funct: 0x7f,
            rs2: 0x1f,
            rs1: 0x11,
            xd: false,
            xs1: true,
            xs2: true,
            rd: 0x1e,
            opcode: 0x7b,
            rs1_data: 0xaaaa_aaaa_aaaa_aaaa,
            rs2_data: 0x5555_5555_5555_5555,
        };
        let msg = codec.encode_fields(&fields).unwrap();
        assert_eq!(codec.decode_fields(&msg), fields);
    }

    #[test_case(0x80, 0x00 ; "type overflow")]
    #[test_case(0xff, 0x00 ; "type overflow all ones")]
    #[test_case(0x00, 0x20 ; "xreg overflow")]
    fn test_overflow_rejected(ty: u8, xreg: u8) {
        let codec = RoccCmdCodec::new(OverflowPolicy::Reject);
        let err = codec.encode(ty, xreg, 0).unwrap_err();
        assert!(err.is_field_overflow());
    }

    #[test]
    fn test_overflow_names_field() {
        let codec = RoccCmdCodec::new(OverflowPolicy::Reject);
        assert!(matches!(
            codec.encode(0x80, 0, 0),
            Err(CodecError::Bits(BitsError::FieldOverflow {
                field: "inst_funct",
                nbits: 7,
                ..
            }))
        ));
    }

    #[test]
    fn test_overflow_truncated() {
        let codec = RoccCmdCodec::new(OverflowPolicy::Truncate);
        let msg = codec.encode(0x80, 0x25, 7).unwrap();
        assert_eq!(codec.decode_type(&msg), 0x00);
        assert_eq!(codec.decode_xreg(&msg), 0x05);
        assert_eq!(codec.decode_data(&msg), 7);
    }

    #[test]
    fn test_message_width_check() {
        let codec = RoccCmdCodec::default();
        let msg = codec.encode(1, 2, 3).unwrap();
        let received = codec.message(msg.clone().into_bits()).unwrap();
        assert_eq!(received, msg);

        assert!(matches!(
            codec.message(Bits::zero(159)),
            Err(CodecError::WidthMismatch {
                kind: MsgKind::RoccCmd,
                expected: 160,
                actual: 159
            })
        ));
    }
}
