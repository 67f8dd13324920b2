use serde::{Deserialize, Serialize};
use xmsg_bits::OverflowPolicy;

use crate::CodecError;

/// Width of the `type` field of memory requests and responses.
pub const MEM_TYPE_NBITS: usize = 3;
/// Width of the `test` field of memory responses.
pub const MEM_TEST_NBITS: usize = 2;
pub const MAX_OPAQUE_NBITS: usize = 64;
pub const MAX_ADDR_NBITS: usize = 64;

/// Width parameters of the memory request/response messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemMsgConfig {
    pub opaque_nbits: usize,
    pub addr_nbits: usize,
    pub data_nbits: usize,
}

impl Default for MemMsgConfig {
    fn default() -> Self {
        Self {
            opaque_nbits: 8,
            addr_nbits: 32,
            data_nbits: 32,
        }
    }
}

impl MemMsgConfig {
    pub fn new(
        opaque_nbits: usize,
        addr_nbits: usize,
        data_nbits: usize,
    ) -> Result<Self, CodecError> {
        let config = Self {
            opaque_nbits,
            addr_nbits,
            data_nbits,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        if self.opaque_nbits > MAX_OPAQUE_NBITS {
            return Err(CodecError::InvalidConfig(format!(
                "opaque_nbits {} exceeds {}",
                self.opaque_nbits, MAX_OPAQUE_NBITS
            )));
        }
        if self.addr_nbits == 0 || self.addr_nbits > MAX_ADDR_NBITS {
            return Err(CodecError::InvalidConfig(format!(
                "addr_nbits {} is not in 1..={}",
                self.addr_nbits, MAX_ADDR_NBITS
            )));
        }
        if self.data_nbits == 0 || self.data_nbits % 8 != 0 {
            return Err(CodecError::InvalidConfig(format!(
                "data_nbits {} is not a positive multiple of 8",
                self.data_nbits
            )));
        }
        if !self.data_nbytes().is_power_of_two() {
            return Err(CodecError::InvalidConfig(format!(
                "data_nbits {} is not a power-of-two number of bytes",
                self.data_nbits
            )));
        }
        Ok(())
    }

    pub fn data_nbytes(&self) -> usize {
        self.data_nbits / 8
    }

    /// Width of the derived `len` field: `log2(data_nbits / 8)`.
    pub fn len_nbits(&self) -> usize {
        self.data_nbytes().checked_ilog2().unwrap_or(0) as usize
    }

    /// Value carried in the `len` field.
    ///
    /// A full-width access moves `data_nbytes` bytes, which is exactly one past the range of
    /// the `len` field, so it wraps to `0`.
    pub fn derived_len(&self) -> u64 {
        let modulus = 1u64 << self.len_nbits();
        self.data_nbytes() as u64 % modulus
    }

    /// Total width of a memory request.
    pub fn req_nbits(&self) -> usize {
        MEM_TYPE_NBITS + self.opaque_nbits + self.addr_nbits + self.len_nbits() + self.data_nbits
    }

    /// Total width of a memory response.
    pub fn resp_nbits(&self) -> usize {
        MEM_TYPE_NBITS + self.opaque_nbits + MEM_TEST_NBITS + self.len_nbits() + self.data_nbits
    }
}

/// Configuration shared by a set of codecs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MsgConfig {
    /// Applied uniformly by every codec built from this config.
    pub overflow: OverflowPolicy,
    pub mem: MemMsgConfig,
}

impl MsgConfig {
    /// Parses and validates a TOML config. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, CodecError> {
        let config: MsgConfig = toml::from_str(s)?;
        config.mem.validate()?;
        Ok(config)
    }
}
