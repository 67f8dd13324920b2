//! Bit-exact codecs for the four interface messages a core/accelerator test harness moves
//! across its channels:
//!
//! - [RoccCmdCodec]: core-to-accelerator commands (RoCC),
//! - [RoccRespCodec]: accelerator-to-core responses (RoCC),
//! - [MemReqCodec]: memory read/write requests,
//! - [MemRespCodec]: memory read/write responses.
//!
//! Each codec owns an MSB-first [BitLayout](xmsg_bits::BitLayout) and uses it for both
//! directions. Codecs are immutable once built and share no state.

use strum_macros::{Display, EnumCount, EnumIter};

mod codec;
mod config;
mod error;
pub mod mem;
mod message;
pub mod rocc;

pub use config::*;
pub use error::*;
pub use mem::{MemMsgType, MemReqCodec, MemReqFields, MemRespCodec, MemRespFields};
pub use message::*;
pub use rocc::{RoccCmdCodec, RoccCmdFields, RoccRespCodec, RoccRespFields};
pub use xmsg_bits::{Bits, BitsError, OverflowPolicy};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum MsgKind {
    RoccCmd,
    RoccResp,
    MemReq,
    MemResp,
}

/// One codec per message kind, all built from the same [MsgConfig].
#[derive(Clone, Debug)]
pub struct MsgCodecs {
    pub rocc_cmd: RoccCmdCodec,
    pub rocc_resp: RoccRespCodec,
    pub mem_req: MemReqCodec,
    pub mem_resp: MemRespCodec,
}

impl MsgCodecs {
    pub fn new(config: &MsgConfig) -> Result<Self, CodecError> {
        Ok(Self {
            rocc_cmd: RoccCmdCodec::new(config.overflow),
            rocc_resp: RoccRespCodec::new(config.overflow),
            mem_req: MemReqCodec::new(config.mem, config.overflow)?,
            mem_resp: MemRespCodec::new(config.mem, config.overflow)?,
        })
    }
}
