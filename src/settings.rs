//! Tunable parameters of the kernel and of interactive picking.

use crate::geometry::DEFAULT_SEGMENT_COUNT;

/// Model-wide geometry parameters.
#[derive(Debug, Clone, Copy)]
pub struct KernelSettings {
    /// Extra distance beyond an arc's midpoint enclosed by its region polygon.
    pub region_margin: f64,
    /// Segment count given to arcs created without an explicit one.
    pub default_segment_count: u32,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            region_margin: 0.1,
            default_segment_count: DEFAULT_SEGMENT_COUNT,
        }
    }
}

/// Parameters for resolving a model-space point to a shape.
#[derive(Debug, Clone, Copy)]
pub struct PickSettings {
    /// Largest distance at which a shape counts as hit.
    pub tolerance: f64,
    /// Margin used when building arc region polygons. `None` uses the
    /// model's [`KernelSettings::region_margin`].
    pub region_margin: Option<f64>,
}

impl Default for PickSettings {
    fn default() -> Self {
        Self {
            tolerance: 0.1,
            region_margin: None,
        }
    }
}

impl PickSettings {
    /// Divisor mapping the view zoom factor to a pick tolerance.
    const ZOOM_DIVISOR: f64 = 25.0;

    /// Settings with a fixed pick tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Settings whose tolerance follows the view zoom, so the pick radius
    /// stays constant on screen.
    #[must_use]
    pub fn from_zoom(zoom_x: f64, zoom_y: f64) -> Self {
        Self::with_tolerance((zoom_x + zoom_y) / 2.0 / Self::ZOOM_DIVISOR)
    }

    /// Margin to use for this pick, whatever the model's settings.
    #[must_use]
    pub fn with_region_margin(mut self, margin: f64) -> Self {
        self.region_margin = Some(margin);
        self
    }

    /// The region margin in effect against a model with `kernel` settings.
    #[must_use]
    pub fn region_margin_for(&self, kernel: &KernelSettings) -> f64 {
        self.region_margin.unwrap_or(kernel.region_margin)
    }
}
