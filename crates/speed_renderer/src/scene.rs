//! The scene aggregate: every hittable the renderer tests rays against.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RenderResult;
use crate::hittable::{HitRecord, Hittable};
use crate::material::{build_material, Material};
use crate::sphere::Sphere;
use speed_core::{SceneDescription, SceneError};
use speed_math::{Interval, Ray};

/// An ordered list of hittable objects, searched linearly for the nearest hit.
///
/// Read-only while a render pass is running; `Hittable: Sync` lets every
/// worker share it by reference.
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Build a scene from a description.
    ///
    /// One material instance is created per described material and shared
    /// by every sphere that names it.
    pub fn from_description(description: &SceneDescription) -> RenderResult<Self> {
        description.validate()?;

        let materials: HashMap<&str, Arc<dyn Material>> = description
            .materials
            .iter()
            .map(|m| (m.name.as_str(), build_material(&m.kind)))
            .collect();

        let mut scene = Scene::new();
        for (index, sphere) in description.spheres.iter().enumerate() {
            let material = materials
                .get(sphere.material.as_str())
                .ok_or_else(|| SceneError::UnknownMaterial {
                    sphere: index,
                    material: sphere.material.clone(),
                })?;
            scene.add(Box::new(Sphere::new(sphere.center, sphere.radius, material.clone())));
        }

        log::info!(
            "Built scene '{}': {} objects sharing {} materials",
            description.name,
            scene.len(),
            materials.len()
        );
        Ok(scene)
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the scene.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for Scene {
    /// Nearest hit in `ray_t`. Each object is tested against
    /// `(ray_t.min, closest_so_far)`, so only strictly closer hits replace
    /// the current one.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if object.hit(ray, ray_t.with_max(closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}
