//! Nikai LCD TV remote protocol.
//!
//! Timing grid: header 8 + 8 ticks, bit mark 1 tick, one-space 2
//! ticks, zero-space 4 ticks, minimum trailing gap 17 ticks, with a
//! 500 us tick. 32-bit frames, MSB first, 38 kHz carrier.

use crate::constants::{
    NIKAI_BIT_MARK, NIKAI_BITS, NIKAI_DUTY, NIKAI_FREQ_KHZ, NIKAI_HDR_MARK, NIKAI_HDR_SPACE,
    NIKAI_MIN_GAP, NIKAI_ONE_SPACE, NIKAI_ZERO_SPACE,
};
use crate::error::IrError;
use crate::message::DecodeResult;
use crate::protocol::Protocol;
use crate::recv;
use crate::send::{self, PulseSink};
use tracing::debug;

/// Send a Nikai formatted message.
///
/// Emits header, `nbits` data bits MSB first, footer, and the
/// inter-frame gap on `sink`, then the same frame `repeat` more times.
/// `nbits` is typically [`NIKAI_BITS`]; anything over 64 is rejected.
pub fn send_nikai<S: PulseSink>(
    sink: &mut S,
    data: u64,
    nbits: u16,
    repeat: u16,
) -> Result<(), IrError> {
    send::send_generic(
        sink,
        NIKAI_HDR_MARK,
        NIKAI_HDR_SPACE,
        NIKAI_BIT_MARK,
        NIKAI_ONE_SPACE,
        NIKAI_BIT_MARK,
        NIKAI_ZERO_SPACE,
        NIKAI_BIT_MARK,
        NIKAI_MIN_GAP,
        data,
        nbits,
        NIKAI_FREQ_KHZ,
        true,
        repeat,
        NIKAI_DUTY,
    )
}

/// Decode a Nikai message from a captured raw buffer.
///
/// Attempts to recognize exactly one frame starting at `offset`. With
/// `strict`, `nbits` must equal the canonical [`NIKAI_BITS`] before
/// the buffer is even looked at. Any mismatch fails the whole attempt;
/// the result is only populated once header, data, and footer have all
/// matched. A failed decode is final for this offset; callers try the
/// next candidate protocol.
pub fn decode_nikai(
    rawbuf: &[u32],
    offset: usize,
    nbits: u16,
    strict: bool,
) -> Result<DecodeResult, IrError> {
    if strict && nbits != NIKAI_BITS {
        return Err(IrError::StrictBits {
            expected: NIKAI_BITS,
            requested: nbits,
        });
    }

    let remaining = rawbuf.get(offset..).unwrap_or(&[]);
    let value = recv::match_generic(
        remaining,
        nbits,
        NIKAI_HDR_MARK,
        NIKAI_HDR_SPACE,
        NIKAI_BIT_MARK,
        NIKAI_ONE_SPACE,
        NIKAI_BIT_MARK,
        NIKAI_ZERO_SPACE,
        NIKAI_BIT_MARK,
        NIKAI_MIN_GAP,
        true,
    )?;

    debug!(value, nbits, "decoded Nikai frame");
    Ok(DecodeResult {
        protocol: Protocol::Nikai,
        bits: nbits,
        value,
        address: 0,
        command: 0,
    })
}
