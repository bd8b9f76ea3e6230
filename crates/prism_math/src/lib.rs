// Re-export glam for convenience
pub use glam::*;

// prism math types
mod bounding_volume;
mod interval;
mod ray;

pub use bounding_volume::{BoundingVolume, PARALLEL_EPSILON};
pub use interval::Interval;
pub use ray::Ray;
