//! Byte-order marker at the start of every WKB geometry.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WkbError};

/// Byte order of multi-byte values in a WKB buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum ByteOrder {
    /// XDR, most significant byte first.
    BigEndian = 0,
    /// NDR, least significant byte first.
    LittleEndian = 1,
}

impl ByteOrder {
    /// Byte order of the running machine.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    /// Decodes the byte-order marker.
    pub fn from_marker(marker: u8) -> Result<Self> {
        match marker {
            0 => Ok(Self::BigEndian),
            1 => Ok(Self::LittleEndian),
            v => Err(WkbError::InvalidByteOrder(v)),
        }
    }

    /// Marker value written to WKB.
    pub fn marker(self) -> u8 {
        self as u8
    }

    /// Whether values in this byte order must be swapped to be read on the running machine.
    pub fn needs_swap(self) -> bool {
        self != Self::native()
    }
}
