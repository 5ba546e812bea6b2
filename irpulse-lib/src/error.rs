use thiserror::Error;

/// The primary error type for the `irpulse` library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrError {
    #[error("bit count {0} exceeds the 64-bit data word")]
    InvalidBitCount(u16),

    #[error("strict decode expects {expected} bits, caller asked for {requested}")]
    StrictBits { expected: u16, requested: u16 },

    #[error("pulse {index}: measured {measured} us outside tolerance of expected {expected} us")]
    Mismatch {
        index: usize,
        expected: u32,
        measured: u32,
    },

    #[error("pulse pair at {index}: mark {mark} us / space {space} us matches neither a one nor a zero")]
    BitMismatch { index: usize, mark: u32, space: u32 },

    #[error("insufficient raw entries: need {expected}, have {actual}")]
    InsufficientBuffer { expected: usize, actual: usize },
}
