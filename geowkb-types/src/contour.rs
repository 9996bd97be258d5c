//! Contour is a sequence of points.
//!
//! A WKB line string maps to an open [`Contour`], a polygon ring maps to a [`ClosedContour`]. Unlike the WKB ring
//! encoding, a closed contour does not repeat its first point at the end: the closing segment is implied.

use serde::{Deserialize, Serialize};

use crate::projection::Projection;

/// Sequence of points, either open or closed.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contour<Point> {
    points: Vec<Point>,
    is_closed: bool,
}

impl<Point> std::ops::Deref for Contour<Point> {
    type Target = Vec<Point>;

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<Point> std::ops::DerefMut for Contour<Point> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.points
    }
}

impl<Point> Contour<Point> {
    /// Creates a new contour.
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates a new open contour.
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    /// Whether the last point of the contour is connected to the first one.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Points of the contour.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points, repeating the first one at the end if the contour is closed. This is the way
    /// closed line strings are stored in WKB.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point> {
        let closing = if self.is_closed {
            self.points.first()
        } else {
            None
        };
        self.points.iter().chain(closing)
    }

    /// Number of points [`Contour::iter_points_closing`] yields.
    pub fn closing_len(&self) -> usize {
        match self.points.len() {
            0 => 0,
            n if self.is_closed => n + 1,
            n => n,
        }
    }

    /// Converts self into a `ClosedContour` instance if the contour is closed, or returns `None` if the contour is
    /// open.
    pub fn into_closed(self) -> Option<ClosedContour<Point>> {
        if self.is_closed {
            Some(ClosedContour {
                points: self.points,
            })
        } else {
            None
        }
    }

    /// Projects all the points of the contour with the given projection.
    pub fn project_points<P, Proj>(&self, projection: &Proj) -> Option<Contour<P>>
    where
        Proj: Projection<InPoint = Point, OutPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<P>>>()?;
        Some(Contour {
            points,
            is_closed: self.is_closed,
        })
    }
}

/// Closed contour (polygon ring).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClosedContour<Point> {
    /// Points of the contour, without the closing point.
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    /// Creates a new closed contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Iterates over the points, repeating the first one at the end the way rings are stored in WKB.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().chain(self.points.first())
    }

    /// Number of points the ring takes when the closing point is written out.
    pub fn closing_len(&self) -> usize {
        match self.points.len() {
            0 => 0,
            n => n + 1,
        }
    }

    /// Projects all the points of the contour with the given projection.
    pub fn project_points<P, Proj>(&self, projection: &Proj) -> Option<ClosedContour<P>>
    where
        Proj: Projection<InPoint = Point, OutPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<P>>>()?;
        Some(ClosedContour { points })
    }
}

impl<Point: PartialEq> ClosedContour<Point> {
    /// Creates a closed contour from a ring as stored in WKB, dropping the last point if it duplicates the first.
    pub fn from_ring(mut points: Vec<Point>) -> Self {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        Self { points }
    }
}

impl<Point: PartialEq> Contour<Point> {
    /// Creates a contour from a line string as stored in WKB. If the last point repeats the first one, the contour
    /// is closed and the repeated point is dropped.
    pub fn from_line_points(mut points: Vec<Point>) -> Self {
        let is_closed = points.len() > 1 && points.first() == points.last();
        if is_closed {
            points.pop();
        }

        Self { points, is_closed }
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            points: value.points,
            is_closed: true,
        }
    }
}
