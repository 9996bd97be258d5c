use num_traits::{Float, Num};
use serde::{Deserialize, Serialize};

/// Point in a 2d cartesian coordinate space.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

/// Point type that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// Simple 2d point, the type every decoded WKB coordinate pair ends up in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2d<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num: num_traits::Num + Copy> Point2d<Num> {
    /// Creates a new point.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> Num {
        self.y
    }
}

impl<Num: Float> Point2d<Num> {
    /// Converts coordinates into a different float type.
    pub fn cast<T: Float>(&self) -> Option<Point2d<T>> {
        Some(Point2d {
            x: T::from(self.x)?,
            y: T::from(self.y)?,
        })
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd> CartesianPoint2d for Point2d<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd> NewCartesianPoint2d<Num> for Point2d<Num> {
    fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

impl<Num> From<(Num, Num)> for Point2d<Num> {
    fn from((x, y): (Num, Num)) -> Self {
        Self { x, y }
    }
}

impl<Num> From<Point2d<Num>> for (Num, Num) {
    fn from(value: Point2d<Num>) -> Self {
        (value.x, value.y)
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Add<Point2d<Num>> for Point2d<Num> {
    type Output = Self;

    fn add(self, rhs: Point2d<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
