//! Speed Tracer Core - Scene descriptions for the CPU path tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `MaterialDescription`,
//!   `SphereDescription`, renderer-agnostic and serde-deserializable
//! - **JSON loading**: `load_scene` / `load_scene_from_str`
//! - **Presets**: the built-in demo scenes, selectable by name
//!
//! # Example
//!
//! ```ignore
//! use speed_core::{load_scene, preset};
//!
//! // Load a scene from disk, or fall back to a preset
//! let scene = load_scene("scene.json").or_else(|_| preset("sample", 0))?;
//! println!("Loaded {} spheres, {} materials",
//!     scene.sphere_count(),
//!     scene.material_count());
//! ```

pub mod loader;
pub mod preset;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use preset::{preset, PRESET_NAMES};
pub use scene::{MaterialDescription, MaterialKind, SceneDescription, SphereDescription};
