//! JSON scene loading.
//!
//! Scene files are JSON documents matching [`SceneDescription`]:
//!
//! ```json
//! {
//!   "name": "basic",
//!   "materials": [{ "name": "yellow", "type": "lambertian", "albedo": [0.8, 0.8, 0.0] }],
//!   "spheres": [{ "center": [0.0, 0.0, 1.2], "radius": 0.5, "material": "yellow" }]
//! }
//! ```

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sphere {sphere} references unknown material '{material}'")]
    UnknownMaterial { sphere: usize, material: String },

    #[error("Material '{0}' is defined more than once")]
    DuplicateMaterial(String),

    #[error("Unknown preset scene '{0}'")]
    UnknownPreset(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene description from a JSON file.
///
/// If the document has no `name`, the file stem is used.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;

    if scene.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            scene.name = stem.to_string_lossy().into_owned();
        }
    }

    log::info!(
        "Loaded scene '{}' from {}: {} materials, {} spheres",
        scene.name,
        path.display(),
        scene.material_count(),
        scene.sphere_count()
    );
    Ok(scene)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_from_str(text: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(text)?;
    scene.validate()?;
    Ok(scene)
}
