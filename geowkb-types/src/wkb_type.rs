//! Geometry type tag stored in the 4 bytes following the byte-order marker of every WKB geometry.
//!
//! Two encodings of the coordinate dimensions are in common use:
//! * ISO WKB adds `1000` (Z), `2000` (M) or `3000` (ZM) to the base geometry code,
//! * extended WKB (PostGIS, OGR "2.5D") sets the high bits `0x80000000` (Z) and `0x40000000` (M).
//!
//! Both are accepted when decoding, [`WkbType::code`] always produces the ISO variant.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::GeowkbTypesError;

const EWKB_Z_FLAG: u32 = 0x8000_0000;
const EWKB_M_FLAG: u32 = 0x4000_0000;
const ISO_DIMENSION_STEP: u32 = 1000;

/// Kind of the geometry, regardless of its coordinate dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u32)]
pub enum GeometryKind {
    /// Single point.
    Point = 1,
    /// Open sequence of points.
    LineString = 2,
    /// One outer ring and zero or more inner rings.
    Polygon = 3,
    /// Set of points.
    MultiPoint = 4,
    /// Set of line strings.
    MultiLineString = 5,
    /// Set of polygons.
    MultiPolygon = 6,
    /// Heterogeneous set of geometries.
    GeometryCollection = 7,
}

impl GeometryKind {
    /// Returns the kind for the base (2D) OGC geometry code.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::Point,
            2 => Self::LineString,
            3 => Self::Polygon,
            4 => Self::MultiPoint,
            5 => Self::MultiLineString,
            6 => Self::MultiPolygon,
            7 => Self::GeometryCollection,
            _ => return None,
        })
    }

    /// Base (2D) OGC geometry code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Whether the geometry consists of nested sub-geometries, each with its own WKB header.
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            Self::MultiPoint | Self::MultiLineString | Self::MultiPolygon | Self::GeometryCollection
        )
    }
}

/// Coordinate dimensions of a geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Dimensions {
    /// `x, y`
    #[default]
    Xy,
    /// `x, y, z`
    Xyz,
    /// `x, y, m`
    Xym,
    /// `x, y, z, m`
    Xyzm,
}

impl Dimensions {
    fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Self::Xy,
            (true, false) => Self::Xyz,
            (false, true) => Self::Xym,
            (true, true) => Self::Xyzm,
        }
    }

    /// Number of ordinates stored for each point.
    pub fn ordinates(self) -> usize {
        match self {
            Self::Xy => 2,
            Self::Xyz | Self::Xym => 3,
            Self::Xyzm => 4,
        }
    }

    /// Whether points have a `z` ordinate.
    pub fn has_z(self) -> bool {
        matches!(self, Self::Xyz | Self::Xyzm)
    }

    /// Whether points have an `m` ordinate.
    pub fn has_m(self) -> bool {
        matches!(self, Self::Xym | Self::Xyzm)
    }

    fn iso_offset(self) -> u32 {
        match self {
            Self::Xy => 0,
            Self::Xyz => ISO_DIMENSION_STEP,
            Self::Xym => 2 * ISO_DIMENSION_STEP,
            Self::Xyzm => 3 * ISO_DIMENSION_STEP,
        }
    }
}

/// Full WKB geometry type: kind plus dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct WkbType {
    /// Geometry kind.
    pub kind: GeometryKind,
    /// Coordinate dimensions.
    pub dimensions: Dimensions,
}

impl WkbType {
    /// Creates a new type tag.
    pub const fn new(kind: GeometryKind, dimensions: Dimensions) -> Self {
        Self { kind, dimensions }
    }

    /// Creates a 2D type tag of the given kind.
    pub const fn xy(kind: GeometryKind) -> Self {
        Self::new(kind, Dimensions::Xy)
    }

    /// Decodes a geometry type code in either ISO or extended WKB notation.
    pub fn from_code(code: u32) -> Result<Self, GeowkbTypesError> {
        let ewkb_z = code & EWKB_Z_FLAG != 0;
        let ewkb_m = code & EWKB_M_FLAG != 0;
        let base = code & !(EWKB_Z_FLAG | EWKB_M_FLAG);

        let kind = GeometryKind::from_code(base % ISO_DIMENSION_STEP)
            .ok_or(GeowkbTypesError::UnknownGeometryType(code))?;

        let dimensions = match (base / ISO_DIMENSION_STEP, ewkb_z || ewkb_m) {
            (0, _) => Dimensions::from_flags(ewkb_z, ewkb_m),
            (1, false) => Dimensions::Xyz,
            (2, false) => Dimensions::Xym,
            (3, false) => Dimensions::Xyzm,
            _ => return Err(GeowkbTypesError::UnknownGeometryType(code)),
        };

        Ok(Self { kind, dimensions })
    }

    /// ISO WKB geometry type code.
    pub fn code(self) -> u32 {
        self.kind.code() + self.dimensions.iso_offset()
    }

    /// Number of bytes taken by one point of this type.
    pub fn point_size(self) -> usize {
        self.dimensions.ordinates() * std::mem::size_of::<f64>()
    }
}

impl TryFrom<u32> for WkbType {
    type Error = GeowkbTypesError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl From<WkbType> for u32 {
    fn from(value: WkbType) -> Self {
        value.code()
    }
}

impl Display for WkbType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let suffix = match self.dimensions {
            Dimensions::Xy => "",
            Dimensions::Xyz => " Z",
            Dimensions::Xym => " M",
            Dimensions::Xyzm => " ZM",
        };
        write!(f, "{:?}{suffix}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn iso_codes() {
        assert_eq!(
            WkbType::from_code(1),
            Ok(WkbType::xy(GeometryKind::Point))
        );
        assert_eq!(
            WkbType::from_code(1003),
            Ok(WkbType::new(GeometryKind::Polygon, Dimensions::Xyz))
        );
        assert_eq!(
            WkbType::from_code(2005),
            Ok(WkbType::new(GeometryKind::MultiLineString, Dimensions::Xym))
        );
        assert_eq!(
            WkbType::from_code(3007),
            Ok(WkbType::new(GeometryKind::GeometryCollection, Dimensions::Xyzm))
        );
    }

    #[test]
    fn extended_codes() {
        assert_eq!(
            WkbType::from_code(0x8000_0002),
            Ok(WkbType::new(GeometryKind::LineString, Dimensions::Xyz))
        );
        assert_eq!(
            WkbType::from_code(0x4000_0001),
            Ok(WkbType::new(GeometryKind::Point, Dimensions::Xym))
        );
        assert_eq!(
            WkbType::from_code(0xC000_0006),
            Ok(WkbType::new(GeometryKind::MultiPolygon, Dimensions::Xyzm))
        );
    }

    #[test]
    fn code_is_iso() {
        let t = WkbType::from_code(0x8000_0003).unwrap();
        assert_eq!(t.code(), 1003);
        assert_eq!(u32::from(WkbType::xy(GeometryKind::MultiPoint)), 4);
    }

    #[test]
    fn unknown_codes() {
        for code in [0, 8, 17, 1000, 4001, 0x8000_1001, 0x2000_0001] {
            assert_matches!(
                WkbType::from_code(code),
                Err(GeowkbTypesError::UnknownGeometryType(c)) if c == code
            );
        }
    }

    #[test]
    fn point_size() {
        assert_eq!(WkbType::xy(GeometryKind::Point).point_size(), 16);
        assert_eq!(
            WkbType::new(GeometryKind::Point, Dimensions::Xyzm).point_size(),
            32
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            WkbType::new(GeometryKind::Polygon, Dimensions::Xyz).to_string(),
            "Polygon Z"
        );
        assert_eq!(WkbType::xy(GeometryKind::Point).to_string(), "Point");
    }
}
