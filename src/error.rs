use thiserror::Error;

use crate::geometry::NodeId;

/// Top-level error type for the femgeo geometry kernel.
#[derive(Debug, Error)]
pub enum FemgeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("sweep angle {sweep_degrees} degrees does not define an arc")]
    DegenerateArc { sweep_degrees: f64 },

    #[error("arc center and radius have not been calculated")]
    ArcNotCalculated,

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to identity lookups in the node registry and geometry model.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("node ids are exhausted")]
    IdsExhausted,

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors related to region polygons.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("malformed region: {0}")]
    MalformedRegion(String),
}

/// Convenience type alias for results using [`FemgeoError`].
pub type Result<T> = std::result::Result<T, FemgeoError>;
