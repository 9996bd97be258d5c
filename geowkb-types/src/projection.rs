//! Point transformations applied while geometries are decoded or after they are built.

use std::marker::PhantomData;

use crate::point::NewCartesianPoint2d;

/// Projection converts points from one coordinate system (or point type) to another.
///
/// Returning `None` from [`Projection::project`] means that the point cannot be represented in the target system.
pub trait Projection {
    /// Input point type.
    type InPoint;
    /// Output point type.
    type OutPoint;

    /// Projects a point.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Reverses the projection of a point.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Projection that keeps the coordinates as they are, but can change the point type.
#[derive(Debug)]
pub struct IdentityProjection<IN, OUT, Num = f64> {
    phantom_in: PhantomData<IN>,
    phantom_out: PhantomData<OUT>,
    phantom_num: PhantomData<Num>,
}

impl<IN, OUT, Num> Default for IdentityProjection<IN, OUT, Num> {
    fn default() -> Self {
        Self::new()
    }
}

impl<IN, OUT, Num> IdentityProjection<IN, OUT, Num> {
    /// Creates a new projection.
    pub fn new() -> Self {
        Self {
            phantom_in: PhantomData,
            phantom_out: PhantomData,
            phantom_num: PhantomData,
        }
    }
}

impl<IN, OUT, Num> Projection for IdentityProjection<IN, OUT, Num>
where
    IN: NewCartesianPoint2d<Num>,
    OUT: NewCartesianPoint2d<Num>,
{
    type InPoint = IN;
    type OutPoint = OUT;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        Some(OUT::new(input.x(), input.y()))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        Some(IN::new(input.x(), input.y()))
    }
}
