//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use irpulse_lib::constants::*;
#[allow(unused_imports)]
pub use irpulse_lib::error::IrError;
#[allow(unused_imports)]
pub use irpulse_lib::message::DecodeResult;
#[allow(unused_imports)]
pub use irpulse_lib::nikai::{decode_nikai, send_nikai};
#[allow(unused_imports)]
pub use irpulse_lib::protocol::Protocol;
#[allow(unused_imports)]
pub use irpulse_lib::recv;
#[allow(unused_imports)]
pub use irpulse_lib::send::{PulseSink, PulseTrain, send_generic};

/// Install the fmt subscriber once per test binary so RUST_LOG can
/// surface matcher traces while debugging a failing capture
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Encode one Nikai frame and hand back the recorded raw buffer
#[allow(dead_code)]
pub fn encoded_frame(data: u64, nbits: u16) -> Vec<u32> {
    let mut train = PulseTrain::new();
    send_nikai(&mut train, data, nbits, 0).expect("encode failed");
    train.durations
}

/// Build a Nikai frame from literal durations, bypassing the encoder,
/// so decoder tests don't depend on encoder correctness
#[allow(dead_code)]
pub fn handmade_frame(value: u64, nbits: u16, gap: u32) -> Vec<u32> {
    let mut buf = vec![4000, 4000];
    for i in (0..nbits).rev() {
        buf.push(500);
        buf.push(if (value >> i) & 1 == 1 { 1000 } else { 2000 });
    }
    buf.push(500);
    buf.push(gap);
    buf
}
