//! Conversions between [`Geom`] and [`geo_types::Geometry`].

use geo_types::{point, Coord, CoordNum, LineString};

use crate::{
    CartesianPoint2d, ClosedContour, Contour, Geom, MultiPolygon, NewCartesianPoint2d, Point2d,
    Polygon,
};

impl<T: CoordNum> CartesianPoint2d for geo_types::Point<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.0.x
    }

    fn y(&self) -> Self::Num {
        self.0.y
    }
}

impl<T: CoordNum> NewCartesianPoint2d<T> for geo_types::Point<T> {
    fn new(x: T, y: T) -> Self {
        point!(x: x, y: y)
    }
}

impl<T: CoordNum> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl<T: CoordNum> NewCartesianPoint2d<T> for Coord<T> {
    fn new(x: T, y: T) -> Self {
        Coord { x, y }
    }
}

fn to_coord(p: &Point2d) -> Coord<f64> {
    Coord { x: p.x(), y: p.y() }
}

fn from_coord(c: &Coord<f64>) -> Point2d {
    Point2d::new(c.x, c.y)
}

fn contour_to_line_string(contour: &Contour<Point2d>) -> LineString<f64> {
    LineString::new(contour.iter_points_closing().map(to_coord).collect())
}

fn line_string_to_contour(line: &LineString<f64>) -> Contour<Point2d> {
    Contour::from_line_points(line.coords().map(from_coord).collect())
}

fn ring_to_line_string(ring: &ClosedContour<Point2d>) -> LineString<f64> {
    LineString::new(ring.iter_points_closing().map(to_coord).collect())
}

fn line_string_to_ring(line: &LineString<f64>) -> ClosedContour<Point2d> {
    ClosedContour::from_ring(line.coords().map(from_coord).collect())
}

fn to_geo_polygon(polygon: &Polygon<Point2d>) -> geo_types::Polygon<f64> {
    geo_types::Polygon::new(
        ring_to_line_string(&polygon.outer_contour),
        polygon.inner_contours.iter().map(ring_to_line_string).collect(),
    )
}

fn from_geo_polygon(polygon: &geo_types::Polygon<f64>) -> Polygon<Point2d> {
    Polygon::new(
        line_string_to_ring(polygon.exterior()),
        polygon.interiors().iter().map(line_string_to_ring).collect(),
    )
}

impl From<&Geom<Point2d>> for geo_types::Geometry<f64> {
    fn from(value: &Geom<Point2d>) -> Self {
        match value {
            Geom::Point(p) => geo_types::Point(to_coord(p)).into(),
            Geom::MultiPoint(v) => geo_types::MultiPoint::new(
                v.points().iter().map(|p| geo_types::Point(to_coord(p))).collect(),
            )
            .into(),
            Geom::Contour(v) => contour_to_line_string(v).into(),
            Geom::MultiContour(v) => geo_types::MultiLineString::new(
                v.contours().iter().map(contour_to_line_string).collect(),
            )
            .into(),
            Geom::Polygon(v) => to_geo_polygon(v).into(),
            Geom::MultiPolygon(v) => {
                geo_types::MultiPolygon::new(v.parts().iter().map(to_geo_polygon).collect()).into()
            }
            Geom::GeometryCollection(v) => geo_types::Geometry::GeometryCollection(
                geo_types::GeometryCollection::new_from(v.iter().map(Into::into).collect()),
            ),
        }
    }
}

impl From<&geo_types::Geometry<f64>> for Geom<Point2d> {
    fn from(value: &geo_types::Geometry<f64>) -> Self {
        use geo_types::Geometry as G;

        match value {
            G::Point(p) => Geom::Point(from_coord(&p.0)),
            G::Line(l) => Contour::open(vec![from_coord(&l.start), from_coord(&l.end)]).into(),
            G::LineString(l) => line_string_to_contour(l).into(),
            G::Polygon(p) => from_geo_polygon(p).into(),
            G::MultiPoint(v) => {
                Geom::MultiPoint(v.iter().map(|p| from_coord(&p.0)).collect::<Vec<_>>().into())
            }
            G::MultiLineString(v) => Geom::MultiContour(
                v.iter()
                    .map(line_string_to_contour)
                    .collect::<Vec<_>>()
                    .into(),
            ),
            G::MultiPolygon(v) => {
                MultiPolygon::from(v.iter().map(from_geo_polygon).collect::<Vec<_>>()).into()
            }
            G::GeometryCollection(v) => {
                Geom::GeometryCollection(v.iter().map(Into::into).collect())
            }
            G::Rect(r) => from_geo_polygon(&r.to_polygon()).into(),
            G::Triangle(t) => from_geo_polygon(&t.to_polygon()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use geo_types::{line_string, polygon};

    use super::*;
    use crate::{IdentityProjection, Projection};

    #[test]
    fn identity_to_geo_point() {
        let projection = IdentityProjection::<Point2d, geo_types::Point<f64>>::new();
        let p = projection.project(&Point2d::new(3.0, 4.0)).unwrap();
        assert_eq!(p, point!(x: 3.0, y: 4.0));
        assert_eq!(projection.unproject(&p), Some(Point2d::new(3.0, 4.0)));
    }

    #[test]
    fn polygon_round_trip() {
        let geo: geo_types::Geometry<f64> = polygon![
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 0.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 1.0)]],
        ]
        .into();

        let geom = Geom::from(&geo);
        let Geom::Polygon(polygon) = &geom else {
            panic!("invalid geometry type");
        };
        assert_eq!(polygon.outer_contour.points.len(), 3);
        assert_eq!(polygon.inner_contours.len(), 1);

        assert_eq!(geo_types::Geometry::from(&geom), geo);
    }

    #[test]
    fn closed_line_string_round_trip() {
        let geo: geo_types::Geometry<f64> = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ]
        .into();

        let geom = Geom::from(&geo);
        let Geom::Contour(contour) = &geom else {
            panic!("invalid geometry type");
        };
        assert!(contour.is_closed());
        assert_eq!(contour.len(), 3);

        assert_eq!(geo_types::Geometry::from(&geom), geo);
    }

    #[test]
    fn collection_round_trip() {
        let collection = geo_types::GeometryCollection::new_from(vec![
            point!(x: 1.0, y: 2.0).into(),
            line_string![(x: 0.0, y: 0.0), (x: 5.0, y: 5.0)].into(),
        ]);
        let geo = geo_types::Geometry::GeometryCollection(collection);

        let geom = Geom::from(&geo);
        assert_eq!(
            geom,
            Geom::GeometryCollection(vec![
                Geom::Point(Point2d::new(1.0, 2.0)),
                Contour::open(vec![Point2d::new(0.0, 0.0), Point2d::new(5.0, 5.0)]).into(),
            ])
        );
        assert_eq!(geo_types::Geometry::from(&geom), geo);
    }
}
