pub mod constants;
pub mod error;
pub mod message;
pub mod nikai;
pub mod protocol;
pub mod recv;
pub mod send;

// Re-export the types most callers touch
pub use error::IrError;
pub use message::DecodeResult;
pub use protocol::Protocol;
pub use send::{PulseSink, PulseTrain};
