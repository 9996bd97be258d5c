//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeowkbTypesError {
    /// The geometry type code does not correspond to any supported geometry type.
    #[error("unknown WKB geometry type code: {0}")]
    UnknownGeometryType(u32),
}
