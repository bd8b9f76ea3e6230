//! Simple ray casting example.
//!
//! Builds a small scene in code (a floor, a tilted triangle casting a shadow
//! onto it, two point lights) and saves it as PNG.

use std::sync::Arc;

use prism_core::Material;
use prism_renderer::{
    render, Camera, ImagePlane, LightSource, PointLight, Primitive, RenderConfig, Scene,
    Triangle, Vec3,
};

fn main() {
    println!("prism ray caster - simple example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig {
        width: 400,
        height: 400,
        ..Default::default()
    };
    let camera = Camera::new(
        Vec3::ZERO,
        ImagePlane::new(
            config.width,
            config.height,
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
        ),
    );

    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.png";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let grey = Arc::new(Material::new(Vec3::splat(180.0)));
    let orange = Arc::new(
        Material::new(Vec3::new(230.0, 120.0, 40.0))
            .with_coefficients(0.15, 0.7, 0.4)
            .with_specular(Vec3::splat(255.0), 64.0),
    );

    let mut primitives: Vec<Box<dyn Primitive>> = Vec::new();

    // Floor: two triangles in the plane y = 1, rows grow towards +y
    let a = Vec3::new(-3.0, 1.0, -1.5);
    let b = Vec3::new(3.0, 1.0, -1.5);
    let c = Vec3::new(3.0, 1.0, -8.0);
    let d = Vec3::new(-3.0, 1.0, -8.0);
    primitives.push(Box::new(Triangle::new(a, c, b, Arc::clone(&grey))));
    primitives.push(Box::new(Triangle::new(a, d, c, grey)));

    // Tilted triangle floating above the floor
    primitives.push(Box::new(Triangle::new(
        Vec3::new(-0.8, 0.6, -3.5),
        Vec3::new(0.8, 0.6, -3.5),
        Vec3::new(0.0, -0.6, -4.0),
        orange,
    )));

    let lights: Vec<Box<dyn LightSource>> = vec![
        Box::new(PointLight::new(Vec3::new(0.0, -4.0, -3.0))),
        Box::new(PointLight::new(Vec3::new(-3.0, -2.0, 0.0))),
    ];

    Scene::new(primitives, lights).expect("scene has lights")
}
