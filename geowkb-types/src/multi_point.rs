use serde::{Deserialize, Serialize};

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint<P>(Vec<P>);

impl<P> From<Vec<P>> for MultiPoint<P> {
    fn from(value: Vec<P>) -> Self {
        Self(value)
    }
}

impl<P> MultiPoint<P> {
    /// Returns reference to the points.
    pub fn points(&self) -> &[P] {
        &self.0
    }

    /// Consumes self returning the points.
    pub fn into_inner(self) -> Vec<P> {
        self.0
    }
}
