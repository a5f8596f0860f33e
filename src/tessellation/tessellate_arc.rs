use crate::error::Result;
use crate::geometry::ArcId;
use crate::math::arc_2d::rotate_about;
use crate::model::GeometryModel;

use super::Polyline;

/// Tessellates an arc into a polyline with the arc's own segment count.
pub struct TessellateArc {
    arc: ArcId,
}

impl TessellateArc {
    /// Creates a new `TessellateArc` operation.
    #[must_use]
    pub fn new(arc: ArcId) -> Self {
        Self { arc }
    }

    /// Executes the tessellation, returning `segment_count + 1` points.
    ///
    /// Intermediate points are the start point rotated about the center in
    /// equal steps of the sweep. The first and last points are the exact
    /// endpoints from the arc's calculated geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc is not found or not calculated.
    pub fn execute(&self, model: &GeometryModel) -> Result<Polyline> {
        let arc = model.arc(self.arc)?;
        let g = arc.geometry()?;
        let count = arc.segment_count();
        let step = arc.sweep_angle().to_radians() / f64::from(count);

        let mut points = Vec::with_capacity(count as usize + 1);
        points.push(g.start);
        for i in 1..count {
            points.push(rotate_about(&g.start, &g.center, step * f64::from(i)));
        }
        points.push(g.end);
        Ok(Polyline { points })
    }
}
