//! Speed renderer - CPU path tracing
//!
//! A Monte Carlo path tracer over spheres with diffuse, mirror and
//! emissive materials. Rows of the image are split across a fixed pool of
//! workers, each with its own seeded random generator.

mod camera;
mod error;
mod hittable;
mod material;
mod partition;
mod renderer;
mod scene;
mod sphere;

pub use camera::{Camera, FOCAL_LENGTH, VIEWPORT_HEIGHT};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable};
pub use material::{build_material, Absorbing, Color, Emissive, Lambertian, Material, Metal, ScatterResult};
pub use partition::{partition_rows, render_rows, RowRange};
pub use renderer::{
    color_to_rgb, ray_color, render, render_pixel, sky_gradient, ImageBuffer, RenderConfig,
    DEFAULT_WORKERS, T_MIN,
};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from speed_math
pub use speed_math::{Interval, Ray, Vec3};
