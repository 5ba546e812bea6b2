use crate::constants::{FOOTER_ENTRIES, HEADER_ENTRIES, MAX_BITS};
use crate::error::IrError;
use tracing::trace;

/// Allowed deviation between a measured duration and its expected
/// value, as a percentage of the expected value.
pub const TOLERANCE_PCT: u32 = 25;

/// Lower bound of the tolerance window around `expected`.
pub fn ticks_low(expected: u32) -> u32 {
    (u64::from(expected) * u64::from(100 - TOLERANCE_PCT) / 100) as u32
}

/// Upper bound of the tolerance window around `expected`.
pub fn ticks_high(expected: u32) -> u32 {
    (u64::from(expected) * u64::from(100 + TOLERANCE_PCT) / 100) as u32
}

/// Does a measured duration fall inside the tolerance window?
pub fn match_duration(measured: u32, expected: u32) -> bool {
    measured >= ticks_low(expected) && measured <= ticks_high(expected)
}

/// Open-ended match: at least the tolerance-adjusted minimum, no upper
/// bound. Used for inter-frame gaps, where the capture layer reports
/// however much silence followed the frame.
pub fn match_at_least(measured: u32, expected: u32) -> bool {
    measured >= ticks_low(expected)
}

fn expect_entry(rawbuf: &[u32], index: usize, expected: u32) -> Result<(), IrError> {
    let measured = rawbuf[index];
    if match_duration(measured, expected) {
        Ok(())
    } else {
        trace!(index, measured, expected, "duration outside tolerance");
        Err(IrError::Mismatch {
            index,
            expected,
            measured,
        })
    }
}

/// Match one frame (header + data + footer) at the start of `rawbuf`.
///
/// The shared matching primitive behind every codec in the library.
/// Single linear pass, no backtracking: the header mark/space must
/// match, each data bit must match either the one-pair or the
/// zero-pair (one tried first), and the footer mark must be followed
/// by a gap entry. With `atleast_gap` the gap is only bounded from
/// below. Bounds are checked up front; the buffer is never read past.
///
/// On success, returns the accumulated data word (MSB first). On any
/// mismatch the whole match fails; no partial value escapes.
#[allow(clippy::too_many_arguments)]
pub fn match_generic(
    rawbuf: &[u32],
    nbits: u16,
    hdr_mark: u32,
    hdr_space: u32,
    one_mark: u32,
    one_space: u32,
    zero_mark: u32,
    zero_space: u32,
    footer_mark: u32,
    gap: u32,
    atleast_gap: bool,
) -> Result<u64, IrError> {
    if nbits > MAX_BITS {
        return Err(IrError::InvalidBitCount(nbits));
    }
    let needed = HEADER_ENTRIES + 2 * usize::from(nbits) + FOOTER_ENTRIES;
    if rawbuf.len() < needed {
        return Err(IrError::InsufficientBuffer {
            expected: needed,
            actual: rawbuf.len(),
        });
    }

    // Header
    expect_entry(rawbuf, 0, hdr_mark)?;
    expect_entry(rawbuf, 1, hdr_space)?;

    // Data, MSB first
    let mut data: u64 = 0;
    let mut index = HEADER_ENTRIES;
    for _ in 0..nbits {
        let mark = rawbuf[index];
        let space = rawbuf[index + 1];
        let bit = if match_duration(mark, one_mark) && match_duration(space, one_space) {
            1
        } else if match_duration(mark, zero_mark) && match_duration(space, zero_space) {
            0
        } else {
            trace!(index, mark, space, "pulse pair is neither a one nor a zero");
            return Err(IrError::BitMismatch { index, mark, space });
        };
        data = (data << 1) | bit;
        index += 2;
    }

    // Footer
    expect_entry(rawbuf, index, footer_mark)?;
    let measured_gap = rawbuf[index + 1];
    let gap_ok = if atleast_gap {
        match_at_least(measured_gap, gap)
    } else {
        match_duration(measured_gap, gap)
    };
    if !gap_ok {
        trace!(index = index + 1, measured_gap, gap, "trailing gap too short");
        return Err(IrError::Mismatch {
            index: index + 1,
            expected: gap,
            measured: measured_gap,
        });
    }

    Ok(data)
}
