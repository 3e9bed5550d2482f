//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive radiance estimation with a hard depth cutoff
//! - Analytic sky gradient for rays that escape the scene
//! - Anti-aliasing via jittered multi-sampling
//! - Parallel rendering over disjoint row ranges

use std::time::Instant;

use crate::error::{RenderError, RenderResult};
use crate::partition::{partition_rows, render_rows};
use crate::{Camera, Color, HitRecord, Hittable};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use speed_math::{Interval, Ray};

/// Lower bound on hit parameters, so bounced rays don't re-hit the surface
/// they left.
pub const T_MIN: f32 = 0.003;

/// Number of row ranges (and worker threads) a render is split into.
pub const DEFAULT_WORKERS: usize = 8;

/// Byte range pixel channels are clamped into.
const BYTE_RANGE: Interval = Interval { min: 0.0, max: 255.0 };

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of parallel workers, each owning one contiguous row range
    pub workers: usize,
    /// Base seed for the per-worker generators; `None` draws one from entropy
    pub seed: Option<u64>,
    /// Sky color straight down (gradient parameter 0)
    pub horizon_color: Color,
    /// Sky color straight up (gradient parameter 1)
    pub zenith_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            seed: None,
            horizon_color: Color::new(1.0, 1.0, 1.0),
            zenith_color: Color::new(0.5, 0.7, 1.0),
        }
    }
}

impl RenderConfig {
    /// Set the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Fix the base seed so renders are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the dispatch settings before a render is started.
    pub fn validate(&self) -> RenderResult<()> {
        if self.workers == 0 {
            return Err(RenderError::InvalidWorkerCount);
        }
        Ok(())
    }
}

/// Compute the radiance arriving along a ray.
///
/// Returns black once `depth` reaches zero or when a material absorbs the
/// ray; otherwise the scattered estimate is multiplied by the material's
/// attenuation.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();

    if !world.hit(ray, Interval::new(T_MIN, f32::INFINITY), &mut rec) {
        return sky_gradient(ray, config);
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * ray_color(&result.scattered, world, depth - 1, config, rng)
        }
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
///
/// Blends from the horizon color (direction straight down) to the zenith
/// color (straight up) by the normalized direction's y component.
pub fn sky_gradient(ray: &Ray, config: &RenderConfig) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * config.horizon_color + a * config.zenith_color
}

/// Convert a linear color to 8-bit RGB.
///
/// Each channel is `floor(255.999 * c)` clamped to [0, 255]. No gamma.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let to_byte = |c: f32| BYTE_RANGE.clamp((255.999 * c).floor()) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// The camera must already be initialized.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth, config, rng);
    }

    pixel_color * camera.samples_scale()
}

/// Finished 8-bit RGB image, row-major with the top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// `width * height * 3` bytes
    pub data: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Bytes per row.
    pub fn row_stride(&self) -> usize {
        self.width as usize * 3
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Hand the raw bytes to an encoder or display.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }
}

/// Render the entire scene to an image buffer.
///
/// Initializes the camera, splits the rows into `config.workers` disjoint
/// ranges and renders each on its own worker with its own seeded RNG. Returns
/// once every worker has finished.
pub fn render(
    camera: &mut Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    camera.validate()?;
    config.validate()?;

    camera.initialize();
    let camera: &Camera = camera;

    if let Ok(n) = std::thread::available_parallelism() {
        log::debug!("Hardware concurrency: {} threads (using {} workers)", n, config.workers);
    }

    let base_seed = config.seed.unwrap_or_else(rand::random);
    log::debug!("Base seed: {}", base_seed);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} workers",
        camera.image_width,
        camera.image_height,
        camera.samples_per_pixel,
        camera.max_depth,
        config.workers
    );

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let row_stride = image.row_stride();
    let ranges = partition_rows(camera.image_height, config.workers);

    // Carve the buffer into one disjoint slice per range
    let mut chunks = Vec::with_capacity(ranges.len());
    let mut remaining: &mut [u8] = &mut image.data;
    for range in ranges {
        let (rows, rest) = std::mem::take(&mut remaining).split_at_mut(range.len() * row_stride);
        remaining = rest;
        chunks.push((range, rows));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("speed-worker-{}", i))
        .build()?;

    let start = Instant::now();
    pool.scope(|s| {
        for (range, rows) in chunks {
            s.spawn(move |_| {
                let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(range.index as u64));
                render_rows(&range, camera, world, config, &mut rng, rows);
                log::debug!("Worker {} finished rows {}..{}", range.index, range.start, range.end);
            });
        }
    });

    log::info!("Rendered in {} ms", start.elapsed().as_millis());
    Ok(image)
}
