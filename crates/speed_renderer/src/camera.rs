//! Camera for ray generation.
//!
//! The camera sits at the origin looking down +Z with a viewport two units
//! tall at unit focal distance. There is no orientation control.

use crate::error::{RenderError, RenderResult};
use rand::RngCore;
use speed_math::random::gen_f32;
use speed_math::{Ray, Vec3};

/// Height of the viewport in world units.
pub const VIEWPORT_HEIGHT: f32 = 2.0;

/// Distance from the camera center to the viewport.
pub const FOCAL_LENGTH: f32 = 1.0;

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    /// Maximum number of bounces per path
    pub max_depth: u32,

    // Cached computed values (set by initialize())
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    samples_scale: f32,
}

impl Camera {
    /// Create a new camera for a `width` x `height` image with default quality.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image_width: width,
            image_height: height,
            samples_per_pixel: 10,
            max_depth: 4,
            // Cached values (initialized to defaults)
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            samples_scale: 0.1,
        }
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Check the image settings before a render is dispatched.
    pub fn validate(&self) -> RenderResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSampleCount);
        }
        Ok(())
    }

    /// Initialize the camera (must be called before generating rays).
    ///
    /// Computes the viewport geometry once; `get_ray` only reads it.
    pub fn initialize(&mut self) {
        self.samples_scale = 1.0 / self.samples_per_pixel as f32;
        self.center = Vec3::ZERO;

        let aspect_ratio = self.image_width as f32 / self.image_height as f32;
        let viewport_width = VIEWPORT_HEIGHT * aspect_ratio;

        // Across the image left to right, and down it top to bottom
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -VIEWPORT_HEIGHT, 0.0);

        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        let viewport_upper_left =
            self.center + Vec3::new(0.0, 0.0, FOCAL_LENGTH) - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Generate a ray for pixel (i, j) jittered within the pixel square.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);
        self.ray_through(i as f32 + offset.x, j as f32 + offset.y)
    }

    /// Ray from the camera center through fractional pixel coordinates
    /// `(x, y)`; `(i, j)` hits the center of pixel `(i, j)`.
    pub fn ray_through(&self, x: f32, y: f32) -> Ray {
        let pixel_sample = self.pixel00_loc + x * self.pixel_delta_u + y * self.pixel_delta_v;
        Ray::new(self.center, pixel_sample - self.center)
    }

    /// Get the samples scale factor (1 / samples_per_pixel).
    pub fn samples_scale(&self) -> f32 {
        self.samples_scale
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// World position of the center of pixel (0, 0).
    pub fn pixel00_loc(&self) -> Vec3 {
        self.pixel00_loc
    }

    pub fn pixel_delta_u(&self) -> Vec3 {
        self.pixel_delta_u
    }

    pub fn pixel_delta_v(&self) -> Vec3 {
        self.pixel_delta_v
    }
}

/// Sample a random point in the square [-0.5, 0.5] x [-0.5, 0.5].
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5, 0.0)
}
