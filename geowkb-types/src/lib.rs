//! Geometry model shared by the WKB cursors and codec in `geowkb`.
//!
//! The crate contains:
//! * [`WkbType`] - the geometry type tag found in every WKB header, split into [`GeometryKind`] and
//!   [`Dimensions`],
//! * simple geometry types ([`Point2d`], [`Contour`], [`ClosedContour`], [`Polygon`], multi-geometries) and the
//!   [`Geom`] enum tying them together,
//! * [`Projection`] trait used to transform points while they are decoded.

pub mod error;
pub use error::GeowkbTypesError;

mod point;
pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point2d};

pub mod wkb_type;
pub use wkb_type::{Dimensions, GeometryKind, WkbType};

mod contour;
pub use contour::{ClosedContour, Contour};

mod polygon;
pub use polygon::Polygon;

mod multi_point;
pub use multi_point::MultiPoint;

mod multi_contour;
pub use multi_contour::MultiContour;

mod multi_polygon;
pub use multi_polygon::MultiPolygon;

mod geometry;
pub use geometry::Geom;

pub mod projection;
pub use projection::{IdentityProjection, Projection};

#[cfg(feature = "geo-types")]
mod geo_types;
