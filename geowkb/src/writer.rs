//! Encoding of [`Geom`] into WKB in the native byte order of the running machine.

use geowkb_types::{ClosedContour, Geom, Point2d, Polygon, WkbType};

use crate::byte_order::ByteOrder;
use crate::const_ptr::HEADER_SIZE;
use crate::error::{Result, WkbError};
use crate::ptr::WkbPtr;

const COUNT_SIZE: usize = 4;
const POINT_SIZE: usize = 16;

/// Number of bytes [`write_geometry`] produces for the geometry.
pub fn wkb_size(geom: &Geom<Point2d>) -> usize {
    HEADER_SIZE
        + match geom {
            Geom::Point(_) => POINT_SIZE,
            Geom::MultiPoint(v) => COUNT_SIZE + v.points().len() * (HEADER_SIZE + POINT_SIZE),
            Geom::Contour(v) => COUNT_SIZE + v.closing_len() * POINT_SIZE,
            Geom::MultiContour(v) => {
                COUNT_SIZE
                    + v.contours()
                        .iter()
                        .map(|c| HEADER_SIZE + COUNT_SIZE + c.closing_len() * POINT_SIZE)
                        .sum::<usize>()
            }
            Geom::Polygon(v) => polygon_body_size(v),
            Geom::MultiPolygon(v) => {
                COUNT_SIZE
                    + v.parts()
                        .iter()
                        .map(|p| HEADER_SIZE + polygon_body_size(p))
                        .sum::<usize>()
            }
            Geom::GeometryCollection(v) => COUNT_SIZE + v.iter().map(wkb_size).sum::<usize>(),
        }
}

fn polygon_body_size(polygon: &Polygon<Point2d>) -> usize {
    COUNT_SIZE
        + rings(polygon)
            .map(|r| COUNT_SIZE + r.closing_len() * POINT_SIZE)
            .sum::<usize>()
}

fn rings(polygon: &Polygon<Point2d>) -> impl Iterator<Item = &ClosedContour<Point2d>> {
    polygon.iter_contours().take(polygon.ring_count())
}

/// Encodes the geometry into a buffer allocated to its exact size.
///
/// Rings and closed contours are written with their closing point. A polygon without any points is
/// written with no rings at all, so a polygon read from a single empty ring encodes shorter than its
/// source. An unclosed ring read from WKB is closed on write.
///
/// ```
/// use geowkb::{read_geometry, write_geometry};
/// use geowkb_types::{Geom, Point2d};
///
/// let point = Geom::Point(Point2d::new(10.0, 20.0));
/// let wkb = write_geometry(&point)?;
/// assert_eq!(wkb.len(), 21);
/// assert_eq!(read_geometry(&wkb)?, point);
/// # Ok::<(), geowkb::WkbError>(())
/// ```
pub fn write_geometry(geom: &Geom<Point2d>) -> Result<Vec<u8>> {
    let mut buf = vec![0; wkb_size(geom)];
    let mut ptr = WkbPtr::new(&mut buf);
    write_geometry_into(&mut ptr, geom)?;

    debug_assert_eq!(ptr.remaining(), 0, "WKB size estimate mismatch");
    log::trace!("Encoded {:?} into {} bytes", geom.kind(), ptr.written_size());

    Ok(buf)
}

/// Encodes the geometry at the cursor position. The cursor must have at least [`wkb_size`] bytes
/// left.
pub fn write_geometry_into(ptr: &mut WkbPtr, geom: &Geom<Point2d>) -> Result<()> {
    write_header(ptr, geom.wkb_type())?;

    match geom {
        Geom::Point(p) => write_point(ptr, p),
        Geom::MultiPoint(v) => {
            write_count(ptr, v.points().len())?;
            for p in v.points() {
                write_header(ptr, geom_part_type(geom))?;
                write_point(ptr, p)?;
            }
            Ok(())
        }
        Geom::Contour(v) => write_points(ptr, v.closing_len(), v.iter_points_closing()),
        Geom::MultiContour(v) => {
            write_count(ptr, v.contours().len())?;
            for c in v.contours() {
                write_header(ptr, geom_part_type(geom))?;
                write_points(ptr, c.closing_len(), c.iter_points_closing())?;
            }
            Ok(())
        }
        Geom::Polygon(v) => write_polygon_body(ptr, v),
        Geom::MultiPolygon(v) => {
            write_count(ptr, v.parts().len())?;
            for p in v.parts() {
                write_header(ptr, geom_part_type(geom))?;
                write_polygon_body(ptr, p)?;
            }
            Ok(())
        }
        Geom::GeometryCollection(v) => {
            write_count(ptr, v.len())?;
            for part in v {
                let encoded = write_geometry(part)?;
                ptr.write_bytes(&encoded)?;
            }
            Ok(())
        }
    }
}

fn geom_part_type(geom: &Geom<Point2d>) -> WkbType {
    use geowkb_types::GeometryKind as K;

    WkbType::xy(match geom.kind() {
        K::MultiPoint => K::Point,
        K::MultiLineString => K::LineString,
        K::MultiPolygon => K::Polygon,
        other => other,
    })
}

fn write_header(ptr: &mut WkbPtr, wkb_type: WkbType) -> Result<()> {
    ptr.write(ByteOrder::native().marker())?;
    ptr.write_wkb_type(wkb_type)
}

fn write_count(ptr: &mut WkbPtr, count: usize) -> Result<()> {
    let count = u32::try_from(count).map_err(|_| WkbError::TooLarge(count))?;
    ptr.write(count)
}

fn write_point(ptr: &mut WkbPtr, point: &Point2d) -> Result<()> {
    ptr.write(point.x())?;
    ptr.write(point.y())
}

fn write_points<'a>(
    ptr: &mut WkbPtr,
    count: usize,
    points: impl Iterator<Item = &'a Point2d>,
) -> Result<()> {
    write_count(ptr, count)?;
    for p in points {
        write_point(ptr, p)?;
    }

    Ok(())
}

fn write_polygon_body(ptr: &mut WkbPtr, polygon: &Polygon<Point2d>) -> Result<()> {
    write_count(ptr, polygon.ring_count())?;
    for ring in rings(polygon) {
        write_points(ptr, ring.closing_len(), ring.iter_points_closing())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geowkb_types::{Contour, MultiContour, MultiPoint, MultiPolygon};

    use super::*;
    use crate::reader::read_geometry;

    fn square(offset: f64) -> ClosedContour<Point2d> {
        ClosedContour::new(vec![
            Point2d::new(offset, offset),
            Point2d::new(offset + 1.0, offset),
            Point2d::new(offset + 1.0, offset + 1.0),
            Point2d::new(offset, offset + 1.0),
        ])
    }

    fn triangle_line() -> Contour<Point2d> {
        Contour::new(
            vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0), Point2d::new(1.0, 1.0)],
            true,
        )
    }

    fn samples() -> Vec<Geom<Point2d>> {
        vec![
            Geom::Point(Point2d::new(10.0, 20.0)),
            MultiPoint::from(vec![Point2d::new(1.0, 2.0), Point2d::new(-3.0, 4.5)]).into(),
            Contour::open(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]).into(),
            triangle_line().into(),
            MultiContour::from(vec![
                Contour::open(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]),
                triangle_line(),
                Contour::open(vec![]),
            ])
            .into(),
            Polygon::new(square(0.0), vec![square(0.25)]).into(),
            Polygon::<Point2d>::from_rings(vec![]).into(),
            MultiPolygon::from(vec![Polygon::from(square(0.0)), Polygon::from(square(5.0))]).into(),
            Geom::GeometryCollection(vec![
                Geom::Point(Point2d::new(1.0, 1.0)),
                Geom::GeometryCollection(vec![Polygon::from(square(2.0)).into()]),
            ]),
        ]
    }

    #[test]
    fn sizes_match_output() {
        for geom in samples() {
            let wkb = write_geometry(&geom).unwrap();
            assert_eq!(wkb.len(), wkb_size(&geom), "{geom:?}");
        }
    }

    #[test]
    fn encoded_geometries_decode_back() {
        for geom in samples() {
            let wkb = write_geometry(&geom).unwrap();
            assert_eq!(read_geometry(&wkb).unwrap(), geom);
        }
    }

    #[test]
    fn point_layout() {
        let wkb = write_geometry(&Geom::Point(Point2d::new(10.0, 20.0))).unwrap();
        assert_eq!(wkb[0], ByteOrder::native().marker());
        assert_eq!(wkb[1..5], 1u32.to_ne_bytes());
        assert_eq!(wkb[5..13], 10.0f64.to_ne_bytes());
        assert_eq!(wkb[13..21], 20.0f64.to_ne_bytes());
    }

    #[test]
    fn ring_is_closed_on_write() {
        let polygon: Geom<Point2d> = Polygon::from(square(0.0)).into();
        let wkb = write_geometry(&polygon).unwrap();
        // header + ring count + point count + 5 points
        assert_eq!(wkb.len(), 5 + 4 + 4 + 5 * 16);
        assert_eq!(wkb[13..29], wkb[77..93]);
    }

    #[test]
    fn closed_contour_repeats_first_point() {
        let line: Geom<Point2d> = triangle_line().into();
        let wkb = write_geometry(&line).unwrap();
        // header + point count + 4 points
        assert_eq!(wkb.len(), 5 + 4 + 4 * 16);
        assert_eq!(wkb[5..9], 4u32.to_ne_bytes());
        assert_eq!(wkb[9..25], wkb[57..73]);

        let Geom::Contour(decoded) = read_geometry(&wkb).unwrap() else {
            panic!("invalid geometry type");
        };
        assert!(decoded.is_closed());
        assert_eq!(decoded.len(), 3);
    }

    fn polygon_wkb(rings: &[&[(f64, f64)]]) -> Vec<u8> {
        let mut wkb = vec![ByteOrder::native().marker()];
        wkb.extend_from_slice(&3u32.to_ne_bytes());
        wkb.extend_from_slice(&(rings.len() as u32).to_ne_bytes());
        for ring in rings {
            wkb.extend_from_slice(&(ring.len() as u32).to_ne_bytes());
            for (x, y) in *ring {
                wkb.extend_from_slice(&x.to_ne_bytes());
                wkb.extend_from_slice(&y.to_ne_bytes());
            }
        }
        wkb
    }

    #[test]
    fn single_empty_ring_is_written_without_rings() {
        let source = polygon_wkb(&[&[]]);
        assert_eq!(source.len(), 13);

        let geom = read_geometry(&source).unwrap();
        let wkb = write_geometry(&geom).unwrap();
        assert_eq!(wkb.len(), 9);
        assert_eq!(wkb[5..9], 0u32.to_ne_bytes());
        assert_eq!(read_geometry(&wkb).unwrap(), geom);
    }

    #[test]
    fn unclosed_ring_is_closed_on_rewrite() {
        let source = polygon_wkb(&[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]]);
        assert_eq!(source.len(), 61);

        let geom = read_geometry(&source).unwrap();
        let wkb = write_geometry(&geom).unwrap();
        assert_eq!(wkb.len(), 77);
        assert_eq!(wkb[13..17], 4u32.to_ne_bytes());
        assert_eq!(wkb[17..33], wkb[65..81]);
    }

    #[test]
    fn buffer_too_small() {
        let geom = Geom::Point(Point2d::new(1.0, 2.0));
        let mut buf = [0u8; 20];
        let mut ptr = WkbPtr::new(&mut buf);
        assert_matches!(
            write_geometry_into(&mut ptr, &geom),
            Err(WkbError::Bounds {
                requested: 8,
                remaining: 7
            })
        );
    }
}
