// Re-export glam for convenience
pub use glam::*;

// Speed Tracer math types
mod interval;
mod ray;
mod vector;
pub mod random;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{reflect, Vec3Ext, NEAR_ZERO_EPSILON};
