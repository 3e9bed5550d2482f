//! Material trait for surface scattering.

use std::sync::Arc;

use crate::hittable::HitRecord;
use rand::RngCore;
use speed_core::MaterialKind;
use speed_math::random::random_unit_vector;
use speed_math::{reflect, Ray, Vec3, Vec3Ext};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Multiplier applied to the radiance carried back along `scattered`
    pub attenuation: Color,
    /// The outgoing ray
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials are immutable once built and shared between spheres through
/// `Arc<dyn Material>`.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `Some(ScatterResult)` if the ray scatters,
    /// or `None` if the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;
}

/// A material that absorbs every ray.
///
/// Used where no real material is attached; paths ending here contribute
/// no light.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absorbing;

impl Material for Absorbing {
    fn scatter(&self, _ray_in: &Ray, _rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterResult> {
        None
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, diffuse_direction(rec.normal, rng)),
        })
    }
}

/// Metal (specular) material.
///
/// A perfect mirror; there is no roughness term.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
}

impl Metal {
    /// Create a new Metal material with the given tint.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction(), rec.normal);
        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, reflected),
        })
    }
}

/// Emissive material.
///
/// Scatters diffusely like [`Lambertian`], but folds its emission into the
/// attenuation (`albedo + emission`) instead of adding a separate emitted
/// term. Emission above 1 therefore amplifies whatever the bounce returns.
#[derive(Debug, Clone)]
pub struct Emissive {
    albedo: Color,
    emission: Color,
}

impl Emissive {
    /// Create a new Emissive material.
    pub fn new(albedo: Color, emission: Color) -> Self {
        Self { albedo, emission }
    }
}

impl Material for Emissive {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        Some(ScatterResult {
            attenuation: self.albedo + self.emission,
            scattered: Ray::new(rec.p, diffuse_direction(rec.normal, rng)),
        })
    }
}

/// Build a shared material from its scene description.
pub fn build_material(kind: &MaterialKind) -> Arc<dyn Material> {
    match *kind {
        MaterialKind::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialKind::Metal { albedo } => Arc::new(Metal::new(albedo)),
        MaterialKind::Emissive { albedo, emission } => Arc::new(Emissive::new(albedo, emission)),
    }
}

/// Normal plus a random unit vector, falling back to the normal when the
/// sum degenerates.
#[inline]
fn diffuse_direction(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    let direction = normal + random_unit_vector(rng);
    if direction.near_zero() {
        normal
    } else {
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record_facing_up() -> HitRecord<'static> {
        HitRecord {
            p: Vec3::new(0.0, -0.5, 1.0),
            normal: Vec3::Y,
            t: 1.0,
            front_face: true,
            ..HitRecord::default()
        }
    }

    #[test]
    fn test_lambertian_scatter() {
        let material = Lambertian::new(Color::new(0.5, 0.25, 0.1));
        let rec = record_facing_up();
        let ray_in = Ray::new(Vec3::ZERO, Vec3::new(0.0, -0.5, 1.0));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let result = material.scatter(&ray_in, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::new(0.5, 0.25, 0.1));
            assert_eq!(result.scattered.origin(), rec.p);
            // normal + unit vector never points below the surface
            assert!(result.scattered.direction().dot(rec.normal) >= -1e-6);
        }
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let material = Metal::new(Color::new(0.8, 0.6, 0.2));
        let rec = record_facing_up();
        let ray_in = Ray::new(Vec3::new(-1.0, 0.5, 1.0), Vec3::new(1.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(0);

        let result = material.scatter(&ray_in, &rec, &mut rng).unwrap();

        assert_eq!(result.attenuation, Color::new(0.8, 0.6, 0.2));
        assert_eq!(result.scattered.direction(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(result.scattered.origin(), rec.p);
    }

    #[test]
    fn test_emissive_attenuation_is_additive() {
        let material = Emissive::new(Color::new(0.2, 0.2, 0.2), Color::new(0.7, 0.2, 0.2));
        let rec = record_facing_up();
        let ray_in = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rng = StdRng::seed_from_u64(9);

        let result = material.scatter(&ray_in, &rec, &mut rng).unwrap();

        assert!((result.attenuation - Color::new(0.9, 0.4, 0.4)).length() < 1e-6);
    }

    #[test]
    fn test_absorbing_never_scatters() {
        let rec = record_facing_up();
        let ray_in = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(Absorbing.scatter(&ray_in, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_build_material_from_description() {
        let kind = MaterialKind::Metal { albedo: Color::splat(0.8) };
        let material = build_material(&kind);
        let rec = record_facing_up();
        let ray_in = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        let mut rng = StdRng::seed_from_u64(1);

        let result = material.scatter(&ray_in, &rec, &mut rng).unwrap();
        assert_eq!(result.attenuation, Color::splat(0.8));
        assert_eq!(result.scattered.direction(), Vec3::Y);
    }
}
