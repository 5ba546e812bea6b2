use crate::constants::MAX_BITS;
use crate::error::IrError;
use tracing::debug;

/// Output seam for modulated pulse trains.
///
/// Real transmit hardware implements this by driving the IR LED; the
/// library ships [`PulseTrain`], which records the timings instead so
/// encoders can be exercised without hardware. Durations are in
/// microseconds. Callers must serialize access to one transmission
/// line themselves; an implementation may block until the interval has
/// elapsed.
pub trait PulseSink {
    /// Configure the carrier for subsequent marks.
    fn enable_carrier(&mut self, freq_khz: u16, duty: u8);

    /// Emit a mark (carrier on) for `usec` microseconds.
    fn mark(&mut self, usec: u32);

    /// Emit a space (carrier off) for `usec` microseconds.
    fn space(&mut self, usec: u32);
}

/// In-memory pulse sink.
///
/// Records the emitted timings in the same shape a capture layer
/// produces them: alternating mark/space durations starting with a
/// mark, so the recording can be fed straight back into a decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PulseTrain {
    /// Alternating mark/space durations in microseconds, mark first
    pub durations: Vec<u32>,
    /// Carrier frequency in kHz (0 until a send configures it)
    pub freq_khz: u16,
    /// Carrier duty cycle in percent
    pub duty: u8,
}

impl PulseTrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded timings as a raw buffer, decoder-ready.
    pub fn as_raw(&self) -> &[u32] {
        &self.durations
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
}

impl PulseSink for PulseTrain {
    fn enable_carrier(&mut self, freq_khz: u16, duty: u8) {
        self.freq_khz = freq_khz;
        self.duty = duty;
    }

    fn mark(&mut self, usec: u32) {
        self.durations.push(usec);
    }

    fn space(&mut self, usec: u32) {
        self.durations.push(usec);
    }
}

/// Emit one protocol frame, repeated `1 + repeat` times.
///
/// The shared transmit primitive behind every codec in the library:
/// header mark/space, then each data bit as its mark/space pair, then
/// the footer mark and the inter-frame gap. `nbits` above 64 is
/// rejected rather than silently truncated.
#[allow(clippy::too_many_arguments)]
pub fn send_generic<S: PulseSink>(
    sink: &mut S,
    hdr_mark: u32,
    hdr_space: u32,
    one_mark: u32,
    one_space: u32,
    zero_mark: u32,
    zero_space: u32,
    footer_mark: u32,
    gap: u32,
    data: u64,
    nbits: u16,
    freq_khz: u16,
    msb_first: bool,
    repeat: u16,
    duty: u8,
) -> Result<(), IrError> {
    if nbits > MAX_BITS {
        return Err(IrError::InvalidBitCount(nbits));
    }
    debug!(data, nbits, repeat, freq_khz, "emitting pulse train");

    sink.enable_carrier(freq_khz, duty);
    for _ in 0..=repeat {
        // Header
        sink.mark(hdr_mark);
        sink.space(hdr_space);

        // Data
        if msb_first {
            for i in (0..nbits).rev() {
                send_bit(sink, (data >> i) & 1, one_mark, one_space, zero_mark, zero_space);
            }
        } else {
            for i in 0..nbits {
                send_bit(sink, (data >> i) & 1, one_mark, one_space, zero_mark, zero_space);
            }
        }

        // Footer
        sink.mark(footer_mark);
        sink.space(gap);
    }
    Ok(())
}

fn send_bit<S: PulseSink>(
    sink: &mut S,
    bit: u64,
    one_mark: u32,
    one_space: u32,
    zero_mark: u32,
    zero_space: u32,
) {
    if bit == 1 {
        sink.mark(one_mark);
        sink.space(one_space);
    } else {
        sink.mark(zero_mark);
        sink.space(zero_space);
    }
}
