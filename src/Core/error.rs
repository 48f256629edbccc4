use crate::MQOD::Structs::Field;
use thiserror::Error;

/// Errors raised while encoding a descriptor into its wire record.
///
/// Decoding never fails: the wire record is trusted to have been populated
/// by the native call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    /// A short string does not fit its fixed-width wire field.
    #[error("{field} is {len} bytes, wire field holds {max}")]
    FieldTooLong {
        field: Field,
        len: usize,
        max: usize,
    },

    /// A variable-length string's declared length disagrees with its data,
    /// or cannot be represented in the 32-bit length word.
    #[error("{field} declares {declared} bytes but carries {actual}")]
    InvalidLength {
        field: Field,
        declared: usize,
        actual: usize,
    },
}

/// Result type alias for marshalling operations.
pub type Result<T> = std::result::Result<T, MarshalError>;
