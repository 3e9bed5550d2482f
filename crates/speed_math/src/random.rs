//! Random number helpers for Monte Carlo sampling.
//!
//! Every generator takes the caller's RNG so each render worker can own an
//! independent, seedable stream.

use crate::{Vec3, NEAR_ZERO_EPSILON};
use rand::{Rng, RngCore};

/// Uniform `f32` in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform `f32` in `[min, max)`.
#[inline]
pub fn gen_f32_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// A vector with each component uniform in `[0, 1)` (the unit cube).
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng))
}

/// A vector with each component uniform in `[min, max)`.
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_f32_range(rng, min, max),
        gen_f32_range(rng, min, max),
        gen_f32_range(rng, min, max),
    )
}

/// Generate a random unit vector on the unit sphere.
///
/// Rejection sampling: candidates come from the `[-1, 1]` cube and the first
/// one whose squared length lies in `(epsilon, 1]` is normalized. Sampling
/// the full cube (rather than `[0, 1]`) keeps the distribution uniform over
/// every octant.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let v = random_vec3_range(rng, -1.0, 1.0);
        let len_sq = v.length_squared();
        if len_sq > NEAR_ZERO_EPSILON && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
