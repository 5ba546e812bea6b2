use crate::constants::NIKAI_BITS;
use num_enum::{FromPrimitive, IntoPrimitive};
use strum_macros::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag identifying which codec produced a decode result.
///
/// The library models the supported protocol set as a closed enum so a
/// result is self-describing without any global registration. Nikai is
/// the only concrete member in this build; unrecognized numeric tags
/// round-trip through `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoPrimitive, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Protocol {
    // 0 is reserved for "unset"
    Nikai = 1,

    #[num_enum(catch_all)]
    Unknown(u8),
}

impl Protocol {
    /// Canonical message length in bits, if the protocol defines one.
    pub fn bits(&self) -> Option<u16> {
        match self {
            Protocol::Nikai => Some(NIKAI_BITS),
            Protocol::Unknown(_) => None,
        }
    }
}
