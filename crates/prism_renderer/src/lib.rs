//! prism renderer - CPU Phong ray caster
//!
//! Casts one primary ray per pixel through an image plane, finds the nearest
//! triangle, and shades it with the Phong model and hard shadows from point
//! lights. Buckets of pixels are rendered in parallel with rayon.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_description;
//! use prism_renderer::{build_camera, build_scene, render, RenderConfig};
//!
//! let description = load_description("scenes/bunny.json")?;
//! let scene = build_scene(&description)?;
//! let camera = build_camera(&description);
//! let image = render(&camera, &scene, &RenderConfig::from(&description.render));
//! image.save("result.png")?;
//! ```

mod bucket;
mod builder;
mod camera;
mod image_buffer;
mod light;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use builder::{build_camera, build_scene};
pub use camera::{Camera, ImagePlane};
pub use image_buffer::{ImageBuffer, Pixel, WHITE};
pub use light::{LightSource, PointLight};
pub use primitive::{Hit, Primitive};
pub use renderer::{render, render_pixel, render_serial, trace, RenderConfig};
pub use scene::{Scene, SceneError, SHADOW_EPSILON};
pub use shading::{clamp_channel, color_to_pixel, phong, Color};
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{BoundingVolume, Interval, Ray, Vec3};
