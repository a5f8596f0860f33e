mod distance;
mod window_select;

pub use distance::{ArcDistance, LineDistance};
pub use hit_test::{Hit, HitTest};
pub use window_select::{Selection, WindowSelect};
