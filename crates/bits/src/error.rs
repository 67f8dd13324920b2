use num_bigint_dig::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    #[error("value {value:#x} does not fit in {nbits} bits")]
    Overflow { nbits: usize, value: BigUint },

    #[error("field `{field}` overflow: {value:#x} does not fit in {nbits} bits")]
    FieldOverflow {
        field: &'static str,
        nbits: usize,
        value: BigUint,
    },

    #[error("field count mismatch (expected: {expected}, actual: {actual})")]
    FieldCountMismatch { expected: usize, actual: usize },

    #[error("invalid bit literal `{0}`")]
    InvalidLiteral(String),
}
