//! Decoding of complete WKB geometries into [`Geom`].

use geowkb_types::{
    ClosedContour, Contour, Dimensions, Geom, GeometryKind, MultiPolygon, Point2d, Polygon,
};

use crate::const_ptr::{ConstWkbPtr, HEADER_SIZE};
use crate::error::{Result, WkbError};
use crate::options::WkbReadOptions;

const COUNT_SIZE: usize = 4;

/// Decodes a WKB geometry with default options.
///
/// Z and M ordinates are read and dropped. Bytes following the geometry are ignored.
///
/// ```
/// use geowkb::read_geometry;
/// use geowkb_types::{Geom, Point2d};
///
/// let mut wkb = vec![1u8];
/// wkb.extend_from_slice(&1u32.to_le_bytes());
/// wkb.extend_from_slice(&10.0f64.to_le_bytes());
/// wkb.extend_from_slice(&20.0f64.to_le_bytes());
///
/// assert_eq!(read_geometry(&wkb)?, Geom::Point(Point2d::new(10.0, 20.0)));
/// # Ok::<(), geowkb::WkbError>(())
/// ```
pub fn read_geometry(wkb: &[u8]) -> Result<Geom<Point2d>> {
    read_geometry_with_options(wkb, WkbReadOptions::default())
}

/// Decodes a WKB geometry.
pub fn read_geometry_with_options(wkb: &[u8], options: WkbReadOptions) -> Result<Geom<Point2d>> {
    let mut ptr = ConstWkbPtr::new(wkb).with_options(options);
    let geom = read_geometry_from(&mut ptr)?;

    if ptr.remaining() > 0 {
        log::debug!(
            "{} trailing bytes after WKB {:?} geometry",
            ptr.remaining(),
            geom.kind()
        );
    }

    Ok(geom)
}

/// Decodes one geometry starting at the cursor position, leaving the cursor right after it.
pub fn read_geometry_from(ptr: &mut ConstWkbPtr) -> Result<Geom<Point2d>> {
    read_geom(ptr, 0)
}

fn read_geom(ptr: &mut ConstWkbPtr, depth: usize) -> Result<Geom<Point2d>> {
    let max_depth = ptr.options().max_nesting_depth;
    if depth > max_depth {
        return Err(WkbError::NestingTooDeep(max_depth));
    }

    let wkb_type = ptr.read_header()?;
    let dimensions = wkb_type.dimensions;

    Ok(match wkb_type.kind {
        GeometryKind::Point => Geom::Point(ptr.read_point_of(dimensions)?),
        GeometryKind::LineString => Geom::Contour(read_contour(ptr, dimensions)?),
        GeometryKind::Polygon => Geom::Polygon(read_polygon(ptr, dimensions)?),
        GeometryKind::MultiPoint => Geom::MultiPoint(
            read_parts(ptr, depth, GeometryKind::Point, |g| match g {
                Geom::Point(p) => Some(p),
                _ => None,
            })?
            .into(),
        ),
        GeometryKind::MultiLineString => Geom::MultiContour(
            read_parts(ptr, depth, GeometryKind::LineString, |g| match g {
                Geom::Contour(c) => Some(c),
                _ => None,
            })?
            .into(),
        ),
        GeometryKind::MultiPolygon => Geom::MultiPolygon(MultiPolygon::from(read_parts(
            ptr,
            depth,
            GeometryKind::Polygon,
            |g| match g {
                Geom::Polygon(p) => Some(p),
                _ => None,
            },
        )?)),
        GeometryKind::GeometryCollection => Geom::GeometryCollection(read_parts(
            ptr,
            depth,
            GeometryKind::GeometryCollection,
            Some,
        )?),
    })
}

fn read_contour(ptr: &mut ConstWkbPtr, dimensions: Dimensions) -> Result<Contour<Point2d>> {
    Ok(Contour::from_line_points(ptr.read_point_sequence(dimensions, Ok)?))
}

fn read_polygon(ptr: &mut ConstWkbPtr, dimensions: Dimensions) -> Result<Polygon<Point2d>> {
    let ring_count = ptr.read_count(COUNT_SIZE)?;
    let mut rings = Vec::with_capacity(ring_count.min(ptr.remaining() / COUNT_SIZE));
    for _ in 0..ring_count {
        let points = ptr.read_point_sequence(dimensions, Ok)?;
        rings.push(ClosedContour::from_ring(points));
    }

    Ok(Polygon::from_rings(rings))
}

fn read_parts<T>(
    ptr: &mut ConstWkbPtr,
    depth: usize,
    expected: GeometryKind,
    mut extract: impl FnMut(Geom<Point2d>) -> Option<T>,
) -> Result<Vec<T>> {
    let count = ptr.read_count(HEADER_SIZE)?;
    let mut parts = Vec::with_capacity(count.min(ptr.remaining() / HEADER_SIZE));
    for _ in 0..count {
        let part = read_geom(ptr, depth + 1)?;
        let found = part.kind();
        match extract(part) {
            Some(v) => parts.push(v),
            None => return Err(WkbError::UnexpectedGeometryType { expected, found }),
        }
    }

    Ok(parts)
}
