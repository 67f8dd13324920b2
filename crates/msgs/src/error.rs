use thiserror::Error;
use xmsg_bits::BitsError;

use crate::MsgKind;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    Bits(#[from] BitsError),

    #[error("{kind} message width mismatch (expected: {expected}, actual: {actual})")]
    WidthMismatch {
        kind: MsgKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid message config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse message config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl CodecError {
    /// Whether this is a field value that did not fit its declared width.
    pub fn is_field_overflow(&self) -> bool {
        matches!(self, CodecError::Bits(BitsError::FieldOverflow { .. }))
    }
}
