pub mod modification;
pub mod query;
pub mod transform;
