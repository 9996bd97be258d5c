use serde::{Deserialize, Serialize};

use crate::contour::Contour;
use crate::multi_contour::MultiContour;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;
use crate::projection::Projection;
use crate::wkb_type::{GeometryKind, WkbType};

/// Any geometry that can be stored in WKB.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom<P> {
    /// Point geometry.
    Point(P),
    /// MultiPoint geometry.
    MultiPoint(MultiPoint<P>),
    /// LineString geometry.
    Contour(Contour<P>),
    /// MultiLineString geometry.
    MultiContour(MultiContour<P>),
    /// Polygon geometry.
    Polygon(Polygon<P>),
    /// MultiPolygon geometry.
    MultiPolygon(MultiPolygon<P>),
    /// Collection of arbitrary geometries, possibly nested.
    GeometryCollection(Vec<Geom<P>>),
}

impl<P> Geom<P> {
    /// Geometry kind of the variant.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::Contour(_) => GeometryKind::LineString,
            Geom::MultiContour(_) => GeometryKind::MultiLineString,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geom::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// 2D WKB type of the geometry.
    pub fn wkb_type(&self) -> WkbType {
        WkbType::xy(self.kind())
    }

    /// Projects all points of the geometry. Returns `None` if any of the points cannot be projected.
    pub fn project<Proj>(&self, projection: &Proj) -> Option<Geom<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        Some(match self {
            Geom::Point(p) => Geom::Point(projection.project(p)?),
            Geom::MultiPoint(v) => Geom::MultiPoint(
                v.points()
                    .iter()
                    .map(|p| projection.project(p))
                    .collect::<Option<Vec<_>>>()?
                    .into(),
            ),
            Geom::Contour(v) => Geom::Contour(v.project_points(projection)?),
            Geom::MultiContour(v) => Geom::MultiContour(
                v.contours()
                    .iter()
                    .map(|c| c.project_points(projection))
                    .collect::<Option<Vec<_>>>()?
                    .into(),
            ),
            Geom::Polygon(v) => Geom::Polygon(v.project_points(projection)?),
            Geom::MultiPolygon(v) => Geom::MultiPolygon(
                v.parts()
                    .iter()
                    .map(|p| p.project_points(projection))
                    .collect::<Option<Vec<_>>>()?
                    .into(),
            ),
            Geom::GeometryCollection(v) => Geom::GeometryCollection(
                v.iter()
                    .map(|g| g.project(projection))
                    .collect::<Option<Vec<_>>>()?,
            ),
        })
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P> From<MultiContour<P>> for Geom<P> {
    fn from(value: MultiContour<P>) -> Self {
        Self::MultiContour(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClosedContour, Point2d};

    struct Shift(f64);

    impl Projection for Shift {
        type InPoint = Point2d;
        type OutPoint = Point2d;

        fn project(&self, input: &Point2d) -> Option<Point2d> {
            (input.x() >= 0.0).then(|| Point2d::new(input.x() + self.0, input.y()))
        }

        fn unproject(&self, input: &Point2d) -> Option<Point2d> {
            Some(Point2d::new(input.x() - self.0, input.y()))
        }
    }

    #[test]
    fn kinds() {
        let geom: Geom<Point2d> = Polygon::from(ClosedContour::<Point2d>::new(vec![])).into();
        assert_eq!(geom.kind(), GeometryKind::Polygon);
        assert_eq!(geom.wkb_type().code(), 3);
        assert_eq!(
            Geom::<Point2d>::GeometryCollection(vec![]).wkb_type().code(),
            7
        );
    }

    #[test]
    fn project_collection() {
        let geom = Geom::GeometryCollection(vec![
            Geom::Point(Point2d::new(1.0, 1.0)),
            Contour::open(vec![Point2d::new(0.0, 0.0), Point2d::new(2.0, 3.0)]).into(),
        ]);
        let projected = geom.project(&Shift(10.0)).unwrap();
        assert_eq!(
            projected,
            Geom::GeometryCollection(vec![
                Geom::Point(Point2d::new(11.0, 1.0)),
                Contour::open(vec![Point2d::new(10.0, 0.0), Point2d::new(12.0, 3.0)]).into(),
            ])
        );
    }

    #[test]
    fn failed_projection() {
        let geom: Geom<Point2d> =
            MultiPoint::from(vec![Point2d::new(1.0, 1.0), Point2d::new(-1.0, 0.0)]).into();
        assert!(geom.project(&Shift(1.0)).is_none());
    }
}
