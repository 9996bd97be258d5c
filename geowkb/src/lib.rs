//! Bounds-checked Well-Known-Binary cursors and geometry codec.
//!
//! Two cursors borrow a WKB buffer and move over it value by value:
//! * [`WkbPtr`] reads and writes a mutable buffer in native byte order. It is used to encode geometries and to
//!   read back buffers produced by the same process.
//! * [`ConstWkbPtr`] reads WKB from any source, correcting the byte order according to the marker in the geometry
//!   header, and reads points and point sequences directly.
//!
//! Any access outside of the buffer fails with [`WkbError::Bounds`] instead of reading or writing garbage.
//!
//! [`read_geometry`] and [`write_geometry`] build on the cursors to convert whole geometries from and to
//! [`geowkb_types::Geom`].

pub mod byte_order;
pub mod const_ptr;
pub mod error;
pub mod options;
pub mod ptr;
pub mod reader;
pub mod scalar;
pub mod writer;

pub use byte_order::ByteOrder;
pub use const_ptr::ConstWkbPtr;
pub use error::{Result, WkbError};
pub use options::WkbReadOptions;
pub use ptr::WkbPtr;
pub use reader::{read_geometry, read_geometry_from, read_geometry_with_options};
pub use scalar::WkbScalar;
pub use writer::{wkb_size, write_geometry, write_geometry_into};
