//! Whole-image renders checked against expected radiometric behaviour.

use std::sync::Arc;

use speed_renderer::{
    color_to_rgb, render, sky_gradient, Camera, ImageBuffer, Lambertian, RenderConfig, Scene,
    Sphere, Vec3,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One grey diffuse sphere straight ahead of the camera.
fn grey_sphere_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, 1.0),
        0.5,
        Arc::new(Lambertian::new(Vec3::splat(0.5))),
    )));
    scene
}

fn render_with(width: u32, height: u32, samples: u32, workers: usize, seed: u64) -> ImageBuffer {
    let world = grey_sphere_scene();
    let mut camera = Camera::new(width, height).with_quality(samples, 4);
    let config = RenderConfig::default().with_workers(workers).with_seed(seed);
    render(&mut camera, &world, &config).unwrap()
}

/// Per-row mean of one channel, on the 0-255 scale.
fn row_means(image: &ImageBuffer, channel: usize) -> Vec<f64> {
    image
        .data
        .chunks(image.row_stride())
        .map(|row| {
            let sum: f64 = row.chunks(3).map(|px| px[channel] as f64).sum();
            sum / image.width as f64
        })
        .collect()
}

#[test]
fn diffuse_sphere_is_darker_than_sky() {
    init_logging();

    let world = grey_sphere_scene();
    let mut camera = Camera::new(400, 225).with_quality(16, 4);
    let config = RenderConfig::default().with_seed(2024);

    let image = render(&mut camera, &world, &config).unwrap();
    assert_eq!(image.width, 400);
    assert_eq!(image.height, 225);
    assert_eq!(image.data.len(), 400 * 225 * 3);

    let (x, y) = (200, 112);
    let pixel = image.get(x, y);
    let sky = color_to_rgb(sky_gradient(&camera.ray_through(x as f32, y as f32), &config));

    for c in 0..3 {
        assert!(pixel[c] < sky[c], "channel {}: {} vs sky {}", c, pixel[c], sky[c]);
        assert!(pixel[c] > 0 && pixel[c] < 255);
    }
}

#[test]
fn corners_show_the_sky() {
    init_logging();

    let image = render_with(64, 36, 4, 8, 5);

    // Corners miss the sphere; the sky's blue channel is always saturated
    for (x, y) in [(0, 0), (63, 0), (0, 35), (63, 35)] {
        assert_eq!(image.get(x, y)[2], 255);
    }
    // Top of the frame looks up, towards the bluer zenith
    assert!(image.get(0, 0)[0] < image.get(0, 35)[0]);
}

#[test]
fn more_samples_reduce_variance() {
    init_logging();

    const SEEDS: u64 = 8;
    const SIZE: u32 = 8;

    // Variance across seeds of every pixel's red channel, summed over the image
    let total_variance = |samples: u32| -> f64 {
        let renders: Vec<ImageBuffer> =
            (0..SEEDS).map(|seed| render_with(SIZE, SIZE, samples, 4, seed)).collect();

        (0..renders[0].data.len())
            .step_by(3)
            .map(|i| {
                let values: Vec<f64> = renders.iter().map(|r| r.data[i] as f64).collect();
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
            })
            .sum()
    };

    let mean_red = |samples: u32| -> f64 {
        let image = render_with(SIZE, SIZE, samples, 4, 99);
        row_means(&image, 0).iter().sum::<f64>() / SIZE as f64
    };

    let low = total_variance(4);
    let high = total_variance(256);
    assert!(high < low, "variance at 256 spp ({}) not below 4 spp ({})", high, low);

    // Same expected color either way
    assert!((mean_red(4) - mean_red(256)).abs() < 10.0);
}

#[test]
fn worker_count_does_not_bias_the_image() {
    init_logging();

    let single = render_with(32, 20, 64, 1, 11);
    let parallel = render_with(32, 20, 64, 8, 11);

    for channel in 0..3 {
        let a = row_means(&single, channel);
        let b = row_means(&parallel, channel);
        for (row, (x, y)) in a.iter().zip(&b).enumerate() {
            assert!(
                (x - y).abs() < 6.0,
                "row {} channel {}: {} vs {}",
                row,
                channel,
                x,
                y
            );
        }
    }
}

#[test]
fn same_seed_same_image() {
    init_logging();

    let a = render_with(24, 16, 8, 8, 314);
    let b = render_with(24, 16, 8, 8, 314);
    let c = render_with(24, 16, 8, 8, 315);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn more_workers_than_rows() {
    init_logging();

    let image = render_with(5, 3, 2, 8, 0);
    assert_eq!(image.data.len(), 5 * 3 * 3);
    // Every row was written: the sky is never black
    assert!(image.data.chunks(3).all(|px| px[2] > 0));
}
