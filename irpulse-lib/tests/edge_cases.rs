//! Tests for short buffers, tolerance edges, and malformed captures

mod common;

use common::*;

#[test]
fn test_truncated_after_header() {
    init_tracing();

    // Capture cut off right after the header: no data, no footer
    let rawbuf = vec![4000, 4000];
    let result = decode_nikai(&rawbuf, 0, 32, true);

    assert_eq!(
        result,
        Err(IrError::InsufficientBuffer {
            expected: 68,
            actual: 2
        })
    );
}

#[test]
fn test_empty_buffer_and_out_of_range_offset() {
    assert!(matches!(
        decode_nikai(&[], 0, 32, false),
        Err(IrError::InsufficientBuffer { actual: 0, .. })
    ));

    // Offset past the end of the buffer leaves nothing to match
    let rawbuf = handmade_frame(0x1, 32, 8500);
    assert!(matches!(
        decode_nikai(&rawbuf, rawbuf.len() + 10, 32, false),
        Err(IrError::InsufficientBuffer { actual: 0, .. })
    ));
}

#[test]
fn test_missing_gap_entry() {
    // Frame ends on the footer mark; the gap entry is part of the
    // footer and must be present
    let mut rawbuf = handmade_frame(0xFFFF_FFFF, 32, 8500);
    rawbuf.pop();
    assert!(matches!(
        decode_nikai(&rawbuf, 0, 32, true),
        Err(IrError::InsufficientBuffer { expected: 68, actual: 67 })
    ));
}

#[test]
fn test_header_tolerance_boundary() {
    // ±25% around the 4000 us header mark: [3000, 5000] inclusive.
    // Exactly at the edge succeeds; one microsecond beyond fails.
    for (measured, ok) in [(3000, true), (2999, false), (5000, true), (5001, false)] {
        let mut rawbuf = handmade_frame(0xA5A5_A5A5, 32, 8500);
        rawbuf[0] = measured;
        let result = decode_nikai(&rawbuf, 0, 32, true);
        assert_eq!(
            result.is_ok(),
            ok,
            "header mark {} us: expected {}",
            measured,
            if ok { "success" } else { "failure" }
        );
    }
}

#[test]
fn test_header_mismatch_reports_position() {
    let mut rawbuf = handmade_frame(0x0, 32, 8500);
    rawbuf[1] = 6000; // header space way off
    assert_eq!(
        decode_nikai(&rawbuf, 0, 32, true),
        Err(IrError::Mismatch {
            index: 1,
            expected: 4000,
            measured: 6000
        })
    );
}

#[test]
fn test_bit_space_matching_neither_pattern() {
    // 1300 us sits between the one-space window [750, 1250] and the
    // zero-space window [1500, 2500]
    let mut rawbuf = handmade_frame(0xA5A5_A5A5, 32, 8500);
    rawbuf[3] = 1300;
    assert_eq!(
        decode_nikai(&rawbuf, 0, 32, true),
        Err(IrError::BitMismatch {
            index: 2,
            mark: 500,
            space: 1300
        })
    );
}

#[test]
fn test_gap_is_a_lower_bound() {
    // The footer gap is open-ended: any silence at or above the
    // tolerance-adjusted minimum (8500 * 0.75 = 6375) passes
    for (gap, ok) in [(6375, true), (6374, false), (8500, true), (1_000_000, true)] {
        let rawbuf = handmade_frame(0x7070_7070, 32, gap);
        let result = decode_nikai(&rawbuf, 0, 32, true);
        assert_eq!(result.is_ok(), ok, "gap {} us: unexpected outcome", gap);
    }
}

#[test]
fn test_failure_yields_no_partial_result() {
    // All 32 bits are valid but the footer mark is broken; the decode
    // must fail outright rather than expose the accumulated word
    let mut rawbuf = handmade_frame(0xA5A5_A5A5, 32, 8500);
    let footer_mark = rawbuf.len() - 2;
    rawbuf[footer_mark] = 3000;
    assert!(decode_nikai(&rawbuf, 0, 32, true).is_err());
}

#[test]
fn test_matcher_tolerance_helpers() {
    assert_eq!(recv::ticks_low(4000), 3000);
    assert_eq!(recv::ticks_high(4000), 5000);
    assert_eq!(recv::ticks_low(500), 375);
    assert_eq!(recv::ticks_high(500), 625);

    assert!(recv::match_duration(625, 500));
    assert!(!recv::match_duration(626, 500));
    assert!(recv::match_at_least(u32::MAX, 8500));
    assert!(!recv::match_at_least(0, 8500));
}

#[test]
fn test_match_generic_rejects_oversized_bit_count() {
    let rawbuf = vec![4000u32; 200];
    assert_eq!(
        recv::match_generic(&rawbuf, 65, 4000, 4000, 500, 1000, 500, 2000, 500, 8500, true),
        Err(IrError::InvalidBitCount(65))
    );
}
