//! Error types used by the crate.

use geowkb_types::{GeometryKind, GeowkbTypesError};
use thiserror::Error;

/// Result type with [`WkbError`].
pub type Result<T, E = WkbError> = std::result::Result<T, E>;

/// WKB error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WkbError {
    /// Read, write or advance would access bytes outside of the buffer. The buffer is either truncated or corrupt
    /// (when reading), or too small for the geometry (when writing).
    #[error("WKB bounds violation: requested {requested} bytes, but only {remaining} remaining")]
    Bounds {
        /// Number of bytes the operation needed.
        requested: usize,
        /// Number of bytes available to the operation.
        remaining: usize,
    },
    /// Byte-order marker is neither `0` nor `1`.
    #[error("invalid WKB byte order marker: {0}")]
    InvalidByteOrder(u8),
    /// Geometry type code cannot be decoded.
    #[error(transparent)]
    UnknownGeometryType(#[from] GeowkbTypesError),
    /// A multi-geometry contains a sub-geometry of a different kind than it can hold.
    #[error("expected {expected:?} sub-geometry, found {found:?}")]
    UnexpectedGeometryType {
        /// Kind the multi-geometry can contain.
        expected: GeometryKind,
        /// Kind found in the buffer.
        found: GeometryKind,
    },
    /// Sub-geometries are nested deeper than allowed by the reader options.
    #[error("WKB geometry nesting exceeds the limit of {0}")]
    NestingTooDeep(usize),
    /// Point transformation failed while decoding.
    #[error("failed to project point ({x}, {y})")]
    Projection {
        /// X coordinate of the point.
        x: f64,
        /// Y coordinate of the point.
        y: f64,
    },
    /// A count does not fit into the 32-bit WKB count field.
    #[error("{0} items do not fit into a WKB count field")]
    TooLarge(usize),
}

impl WkbError {
    /// Returns true if the error is a bounds violation.
    pub fn is_bounds(&self) -> bool {
        matches!(self, Self::Bounds { .. })
    }
}
