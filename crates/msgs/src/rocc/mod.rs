//! RoCC core/accelerator messages.
//!
//! Field names follow the Rocket chip signal groups (`core_cmd_*`, `core_resp_*`). The
//! harness drives these channels through reduced builders (`type`, `xreg`, `data`), which
//! map onto a subset of the physical fields; everything else takes the defaults below.

mod cmd;
mod resp;

pub use cmd::*;
pub use resp::*;

/// RISC-V `custom-0` major opcode.
pub const ROCC_CUSTOM0_OPCODE: u8 = 0b000_1011;

pub const ROCC_FUNCT_NBITS: usize = 7;
pub const ROCC_REG_NBITS: usize = 5;
pub const ROCC_OPCODE_NBITS: usize = 7;
pub const ROCC_XLEN: usize = 64;
