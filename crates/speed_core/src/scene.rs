//! Scene description types for Speed Tracer.
//!
//! A description is plain data: materials are named once and spheres refer
//! to them by name, so the renderer can share one material instance across
//! every sphere that uses it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use speed_math::Vec3;

use crate::loader::{SceneError, SceneResult};

/// The scattering model of a described material.
///
/// Serialized with an internal `"type"` tag, e.g.
/// `{"type": "emissive", "albedo": [0.6, 0.6, 0.6], "emission": [0.2, 0.2, 10.0]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialKind {
    /// Diffuse reflector
    Lambertian { albedo: Vec3 },
    /// Perfect mirror tinted by `albedo`
    Metal { albedo: Vec3 },
    /// Diffuse scatterer whose attenuation is `albedo + emission`
    Emissive { albedo: Vec3, emission: Vec3 },
}

/// A named material definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// Name spheres use to reference this material
    pub name: String,

    #[serde(flatten)]
    pub kind: MaterialKind,
}

impl MaterialDescription {
    /// Create a Lambertian material description.
    pub fn lambertian(name: impl Into<String>, albedo: Vec3) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Lambertian { albedo },
        }
    }

    /// Create a Metal material description.
    pub fn metal(name: impl Into<String>, albedo: Vec3) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Metal { albedo },
        }
    }

    /// Create an Emissive material description.
    pub fn emissive(name: impl Into<String>, albedo: Vec3, emission: Vec3) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Emissive { albedo, emission },
        }
    }
}

/// A sphere placed in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,

    /// Negative radii are accepted here and clamped to zero by the renderer
    pub radius: f32,

    /// Name of a material in the same description
    pub material: String,
}

impl SphereDescription {
    pub fn new(center: Vec3, radius: f32, material: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

/// A complete scene: named materials plus the spheres that use them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (preset name or file stem)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub materials: Vec<MaterialDescription>,

    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a material definition.
    pub fn add_material(&mut self, material: MaterialDescription) {
        self.materials.push(material);
    }

    /// Add a sphere.
    pub fn add_sphere(&mut self, sphere: SphereDescription) {
        self.spheres.push(sphere);
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> Option<&MaterialDescription> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Get material count.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Check that material names are unique and every sphere references a
    /// defined material.
    pub fn validate(&self) -> SceneResult<()> {
        let mut names = HashSet::with_capacity(self.materials.len());
        for material in &self.materials {
            if !names.insert(material.name.as_str()) {
                return Err(SceneError::DuplicateMaterial(material.name.clone()));
            }
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !names.contains(sphere.material.as_str()) {
                return Err(SceneError::UnknownMaterial {
                    sphere: index,
                    material: sphere.material.clone(),
                });
            }
            if sphere.radius < 0.0 {
                log::warn!(
                    "Sphere {} in scene '{}' has negative radius {}, it will be clamped to 0",
                    index,
                    self.name,
                    sphere.radius
                );
            }
        }

        Ok(())
    }
}
