//! Built-in demo scenes.
//!
//! All presets place their spheres in front of a camera sitting at the
//! origin and looking down +Z.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use speed_math::Vec3;

use crate::loader::{SceneError, SceneResult};
use crate::scene::{MaterialDescription, SceneDescription, SphereDescription};

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 5] = ["basic", "sample", "test", "room", "lots_of_balls"];

/// Build a preset scene by name.
///
/// `seed` only affects presets with random placement (`lots_of_balls`).
pub fn preset(name: &str, seed: u64) -> SceneResult<SceneDescription> {
    let scene = match name {
        "basic" => basic(),
        "sample" => sample(),
        "test" => test(),
        "room" => room(),
        "lots_of_balls" => lots_of_balls(seed),
        _ => return Err(SceneError::UnknownPreset(name.to_string())),
    };
    log::debug!(
        "Built preset '{}': {} materials, {} spheres",
        scene.name,
        scene.material_count(),
        scene.sphere_count()
    );
    Ok(scene)
}

/// One yellow diffuse sphere.
pub fn basic() -> SceneDescription {
    let mut scene = SceneDescription::new("basic");
    scene.add_material(MaterialDescription::lambertian("ground", Vec3::new(0.8, 0.8, 0.0)));
    scene.add_sphere(SphereDescription::new(Vec3::new(0.0, 0.0, 1.2), 0.5, "ground"));
    scene
}

/// Diffuse center sphere flanked by two metals on a large ground sphere.
pub fn sample() -> SceneDescription {
    let mut scene = SceneDescription::new("sample");
    scene.add_material(MaterialDescription::lambertian("ground", Vec3::new(0.8, 0.8, 0.8)));
    scene.add_material(MaterialDescription::lambertian("center", Vec3::new(0.1, 0.2, 0.5)));
    scene.add_material(MaterialDescription::metal("left", Vec3::new(0.8, 0.8, 0.8)));
    scene.add_material(MaterialDescription::metal("right", Vec3::new(0.8, 0.6, 0.2)));

    scene.add_sphere(SphereDescription::new(Vec3::new(0.0, -100.5, 1.0), 100.0, "ground"));
    scene.add_sphere(SphereDescription::new(Vec3::new(0.0, 0.0, 1.2), 0.5, "center"));
    scene.add_sphere(SphereDescription::new(Vec3::new(-1.0, 0.0, 1.0), 0.5, "left"));
    scene.add_sphere(SphereDescription::new(Vec3::new(1.0, 0.0, 1.0), 0.5, "right"));
    scene
}

/// One of each material kind on a pale ground.
pub fn test() -> SceneDescription {
    let mut scene = SceneDescription::new("test");
    scene.add_material(MaterialDescription::lambertian("ground", Vec3::new(0.94, 0.94, 0.96)));
    scene.add_material(MaterialDescription::emissive(
        "red",
        Vec3::new(0.2, 0.2, 0.2),
        Vec3::new(0.7, 0.2, 0.2),
    ));
    scene.add_material(MaterialDescription::metal("metallic", Vec3::new(0.8, 0.8, 0.8)));
    scene.add_material(MaterialDescription::lambertian("black", Vec3::new(0.1, 0.1, 0.1)));

    scene.add_sphere(SphereDescription::new(Vec3::new(0.0, -100.5, 1.0), 100.0, "ground"));
    scene.add_sphere(SphereDescription::new(Vec3::new(0.0, 0.0, 1.5), 0.6, "red"));
    scene.add_sphere(SphereDescription::new(Vec3::new(-1.3, 0.0, 1.5), 0.8, "metallic"));
    scene.add_sphere(SphereDescription::new(Vec3::new(2.0, 0.7, 2.0), 0.5, "black"));
    scene
}

/// A glowing sphere enclosed by six huge wall spheres.
pub fn room() -> SceneDescription {
    let mut scene = SceneDescription::new("room");
    scene.add_material(MaterialDescription::lambertian("wall", Vec3::new(0.8, 0.8, 0.0)));
    scene.add_material(MaterialDescription::emissive(
        "blue_glow",
        Vec3::new(0.6, 0.6, 0.6),
        Vec3::new(0.2, 30.0, 30.0),
    ));

    let walls = [
        Vec3::new(0.0, 70.0, 1.0),
        Vec3::new(0.0, -70.0, 1.0),
        Vec3::new(70.0, 0.0, 1.0),
        Vec3::new(-70.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 70.0),
        Vec3::new(0.0, 0.0, -70.0),
    ];
    for center in walls {
        scene.add_sphere(SphereDescription::new(center, 64.0, "wall"));
    }

    scene.add_sphere(SphereDescription::new(Vec3::new(0.0, 0.0, 1.2), 0.5, "blue_glow"));
    scene
}

/// Randomly scattered glowing, metal and diffuse balls.
///
/// Every ball lands in `x, y in [-5, 5)`, `z in [5, 15)`.
pub fn lots_of_balls(seed: u64) -> SceneDescription {
    let mut rng = StdRng::seed_from_u64(seed);
    let random_center = |rng: &mut StdRng| {
        Vec3::new(
            rng.gen::<f32>() * 10.0 - 5.0,
            rng.gen::<f32>() * 10.0 - 5.0,
            5.0 + rng.gen::<f32>() * 10.0,
        )
    };

    let mut scene = SceneDescription::new("lots_of_balls");
    scene.add_material(MaterialDescription::emissive(
        "blue_glow",
        Vec3::new(0.6, 0.6, 0.6),
        Vec3::new(0.2, 0.2, 10.0),
    ));
    scene.add_material(MaterialDescription::metal("metallic", Vec3::new(0.8, 0.8, 0.8)));
    scene.add_material(MaterialDescription::lambertian("white", Vec3::new(0.8, 0.8, 0.8)));

    for (material, count) in [("blue_glow", 4), ("metallic", 4), ("white", 8)] {
        for _ in 0..count {
            let center = random_center(&mut rng);
            scene.add_sphere(SphereDescription::new(center, 0.5, material));
        }
    }

    // Each of these gets its own random color
    for i in 0..8 {
        let name = format!("random_{}", i);
        let center = random_center(&mut rng);
        let albedo = Vec3::new(rng.gen(), rng.gen(), rng.gen());
        scene.add_material(MaterialDescription::lambertian(name.clone(), albedo));
        scene.add_sphere(SphereDescription::new(center, 0.5, name));
    }

    scene
}
