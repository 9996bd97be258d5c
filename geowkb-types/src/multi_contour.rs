use serde::{Deserialize, Serialize};

use crate::contour::Contour;

/// A set of contours (WKB multi line string).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiContour<P>(Vec<Contour<P>>);

impl<P> From<Vec<Contour<P>>> for MultiContour<P> {
    fn from(value: Vec<Contour<P>>) -> Self {
        Self(value)
    }
}

impl<P> MultiContour<P> {
    /// Returns reference to the contours.
    pub fn contours(&self) -> &[Contour<P>] {
        &self.0
    }

    /// Consumes self returning the contours.
    pub fn into_inner(self) -> Vec<Contour<P>> {
        self.0
    }
}
