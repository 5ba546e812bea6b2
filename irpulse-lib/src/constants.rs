// Protocol constants for Nikai

/// Base time unit of the Nikai grid, in microseconds
pub const NIKAI_TICK: u32 = 500;

/// Header mark length in ticks (8 ticks = 4000 us)
pub const NIKAI_HDR_MARK_TICKS: u32 = 8;

/// Header mark duration (4000 us)
pub const NIKAI_HDR_MARK: u32 = NIKAI_HDR_MARK_TICKS * NIKAI_TICK;

/// Header space length in ticks (8 ticks = 4000 us)
pub const NIKAI_HDR_SPACE_TICKS: u32 = 8;

/// Header space duration (4000 us)
pub const NIKAI_HDR_SPACE: u32 = NIKAI_HDR_SPACE_TICKS * NIKAI_TICK;

/// Bit mark length in ticks, shared by one and zero bits
pub const NIKAI_BIT_MARK_TICKS: u32 = 1;

/// Bit mark duration (500 us)
pub const NIKAI_BIT_MARK: u32 = NIKAI_BIT_MARK_TICKS * NIKAI_TICK;

/// One-bit space length in ticks (2 ticks = 1000 us)
pub const NIKAI_ONE_SPACE_TICKS: u32 = 2;

/// One-bit space duration (1000 us)
pub const NIKAI_ONE_SPACE: u32 = NIKAI_ONE_SPACE_TICKS * NIKAI_TICK;

/// Zero-bit space length in ticks (4 ticks = 2000 us)
pub const NIKAI_ZERO_SPACE_TICKS: u32 = 4;

/// Zero-bit space duration (2000 us)
pub const NIKAI_ZERO_SPACE: u32 = NIKAI_ZERO_SPACE_TICKS * NIKAI_TICK;

/// Minimum trailing gap length in ticks (17 ticks = 8500 us)
pub const NIKAI_MIN_GAP_TICKS: u32 = 17;

/// Minimum trailing gap duration (8500 us)
pub const NIKAI_MIN_GAP: u32 = NIKAI_MIN_GAP_TICKS * NIKAI_TICK;

/// Canonical Nikai message length in bits
pub const NIKAI_BITS: u16 = 32;

/// Carrier frequency for Nikai transmissions (38 kHz)
pub const NIKAI_FREQ_KHZ: u16 = 38;

/// Carrier duty cycle for Nikai transmissions (percent)
pub const NIKAI_DUTY: u8 = 33;

/// Widest data word any codec in the library carries
pub const MAX_BITS: u16 = 64;

/// Raw entries taken by a frame header (mark + space)
pub const HEADER_ENTRIES: usize = 2;

/// Raw entries taken by a frame footer (mark + gap)
pub const FOOTER_ENTRIES: usize = 2;
