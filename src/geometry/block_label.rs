use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a block label in the geometry model.
    pub struct LabelId;
}

/// Marker placed inside a closed region to attach region properties to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLabel {
    /// Position of the label in model coordinates.
    pub point: Point2,
}

impl BlockLabel {
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        (self.point - point).norm()
    }
}
