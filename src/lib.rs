pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod region;
pub mod registry;
pub mod settings;
pub mod tessellation;

pub use error::{FemgeoError, Result};
