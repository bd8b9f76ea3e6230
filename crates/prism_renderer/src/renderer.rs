//! Core ray casting renderer.
//!
//! One primary ray per pixel, nearest-hit search, Phong shading with hard
//! shadows. No recursion and no multi-sampling.

use prism_core::RenderSettings;
use prism_math::Ray;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::image_buffer::{ImageBuffer, Pixel, WHITE};
use crate::shading::phong;
use crate::{Camera, Scene};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Raster width in pixels
    pub width: u32,
    /// Raster height in pixels
    pub height: u32,
    /// Colour written when a primary ray hits nothing
    pub background: Pixel,
    /// Edge length of the square buckets rendered in parallel
    pub bucket_size: u32,
    /// Reject primary rays that miss the scene bounds before searching primitives.
    ///
    /// Off by default: the bounds test treats rays that are nearly parallel to
    /// an axis as exactly parallel and can reject a few edge pixels.
    pub bounds_culling: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            background: WHITE,
            bucket_size: DEFAULT_BUCKET_SIZE,
            bounds_culling: false,
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            background: image::Rgb(settings.background),
            bucket_size: settings.bucket_size,
            bounds_culling: settings.bounds_culling,
        }
    }
}

/// Compute the colour seen along a primary ray.
pub fn trace(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Pixel {
    if config.bounds_culling && !scene.bounds().hit(ray) {
        return config.background;
    }

    match scene.find_closest(ray, f32::INFINITY) {
        Some(hit) => {
            let normal = hit.primitive.normal_at(hit.point(ray));
            phong(scene, ray, hit.primitive, normal, hit.distance)
        }
        None => config.background,
    }
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    column: u32,
    row: u32,
    config: &RenderConfig,
) -> Pixel {
    let ray = camera.generate_ray(column, row);
    trace(&ray, scene, config)
}

/// The raster actually rendered: the camera's image plane defines it, so
/// every pixel maps to a point on the plane.
fn raster_config(camera: &Camera, config: &RenderConfig) -> RenderConfig {
    let plane = camera.plane();
    if plane.columns() == config.width && plane.rows() == config.height {
        return config.clone();
    }

    log::warn!(
        "Camera image plane is {}x{} but the raster is {}x{}, rendering {}x{}",
        plane.columns(),
        plane.rows(),
        config.width,
        config.height,
        plane.columns(),
        plane.rows()
    );
    RenderConfig {
        width: plane.columns(),
        height: plane.rows(),
        ..config.clone()
    }
}

/// Render the entire scene, rendering buckets in parallel.
///
/// Produces exactly the same image as [`render_serial`].
///
/// If the raster size in `config` disagrees with the camera's image plane,
/// the plane's size wins.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let config = &raster_config(camera, config);

    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    log::debug!(
        "Rendering {}x{} in {} buckets",
        config.width,
        config.height,
        buckets.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, camera, scene, config))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height, config.background);
    for result in &results {
        image.write_bucket(result);
    }

    image
}

/// Render the entire scene on the calling thread, row by row.
pub fn render_serial(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let config = &raster_config(camera, config);

    let mut image = ImageBuffer::new(config.width, config.height, config.background);

    for row in 0..config.height {
        for column in 0..config.width {
            let pixel = render_pixel(camera, scene, column, row, config);
            image.set(row, column, pixel);
        }
    }

    image
}
