use crate::protocol::Protocol;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a successful decode.
///
/// Nikai carries an opaque data word only, so `address` and `command`
/// are fixed at zero rather than derived from the payload. Protocols
/// with structured payloads would populate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeResult {
    /// Which codec recognized the frame
    pub protocol: Protocol,
    /// Number of data bits decoded
    pub bits: u16,
    /// The decoded data word, MSB first
    pub value: u64,
    /// Device address field (always 0 for Nikai)
    pub address: u64,
    /// Command field (always 0 for Nikai)
    pub command: u64,
}

impl fmt::Display for DecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: 0x{:0width$X} ({} bits)",
            self.protocol,
            self.value,
            self.bits,
            width = (self.bits as usize).div_ceil(4).max(1)
        )
    }
}
