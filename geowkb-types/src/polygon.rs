use serde::{Deserialize, Serialize};

use crate::contour::ClosedContour;
use crate::projection::Projection;

/// Polygon consists of one outer contour, and zero or more inner contours (holes).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: ClosedContour<P>,
    /// Inner contours.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Creates a polygon from rings in WKB order: the first ring is the outer one. An empty list of rings gives an
    /// empty polygon.
    pub fn from_rings(rings: Vec<ClosedContour<P>>) -> Self {
        let mut rings = rings.into_iter();
        let outer_contour = rings.next().unwrap_or_else(|| ClosedContour::new(vec![]));
        Self {
            outer_contour,
            inner_contours: rings.collect(),
        }
    }

    /// Whether the polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.outer_contour.points.is_empty() && self.inner_contours.is_empty()
    }

    /// Iterates over all contours of the polygon starting with the outer one.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    /// Number of rings as written to WKB. An empty polygon has no rings.
    pub fn ring_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            1 + self.inner_contours.len()
        }
    }

    /// Projects all points of the polygon.
    pub fn project_points<Out, Proj>(&self, projection: &Proj) -> Option<Polygon<Out>>
    where
        Proj: Projection<InPoint = P, OutPoint = Out> + ?Sized,
    {
        Some(Polygon {
            outer_contour: self.outer_contour.project_points(projection)?,
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| c.project_points(projection))
                .collect::<Option<Vec<_>>>()?,
        })
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2d;

    #[test]
    fn from_rings() {
        let outer = ClosedContour::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(4.0, 0.0),
            Point2d::new(0.0, 4.0),
        ]);
        let hole = ClosedContour::new(vec![
            Point2d::new(1.0, 1.0),
            Point2d::new(2.0, 1.0),
            Point2d::new(1.0, 2.0),
        ]);
        let polygon = Polygon::from_rings(vec![outer.clone(), hole.clone()]);
        assert_eq!(polygon.outer_contour, outer);
        assert_eq!(polygon.inner_contours, vec![hole]);
        assert_eq!(polygon.ring_count(), 2);
        assert_eq!(polygon.iter_contours().count(), 2);
    }

    #[test]
    fn empty_polygon_has_no_rings() {
        let polygon = Polygon::<Point2d>::from_rings(vec![]);
        assert!(polygon.is_empty());
        assert_eq!(polygon.ring_count(), 0);
    }
}
