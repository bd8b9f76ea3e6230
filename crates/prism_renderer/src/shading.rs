//! Phong shading with hard shadows.

use image::Rgb;
use prism_math::{Ray, Vec3};

use crate::image_buffer::Pixel;
use crate::primitive::Primitive;
use crate::scene::Scene;

/// Floating-point RGB on the 0-255 channel scale.
pub type Color = Vec3;

/// Clamp an integer channel value into the 0-255 pixel range.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value >= 255 {
        255
    } else {
        value as u8
    }
}

/// Convert a floating-point colour to a pixel.
///
/// Channels are truncated towards zero before clamping; NaN becomes 0.
pub fn color_to_pixel(color: Color) -> Pixel {
    Rgb(color.to_array().map(|c| clamp_channel(c as i32)))
}

/// Evaluate the Phong model at the point `t` along `ray` on `primitive`.
///
/// Every light contributes diffuse and specular terms unless something blocks
/// the segment between the point and the light. The summed contributions are
/// divided by the number of lights before the ambient term is added, so adding
/// lights redistributes rather than adds energy.
pub fn phong(scene: &Scene, ray: &Ray, primitive: &dyn Primitive, normal: Vec3, t: f32) -> Pixel {
    let material = primitive.material();
    let lights = scene.lights();
    debug_assert!(!lights.is_empty(), "scene must have at least one light");

    let point = ray.at(t);
    let normal = normal.normalize();
    let view_dir = (ray.origin() - point).normalize();

    let diffuse_and_specular = lights.iter().fold(Color::ZERO, |acc, light| {
        let light_vector = light.light_vector(point);
        let light_distance = light_vector.length();
        let light_dir = light_vector.normalize();

        let shadow_ray = Ray::new(point, light_dir);
        let (diffuse, specular) = if scene.is_shadowed(&shadow_ray, light_distance) {
            (0.0, 0.0)
        } else {
            let cos_theta = light_dir.dot(normal);
            let reflected = (2.0 * cos_theta * normal - light_dir).normalize();
            (
                cos_theta.max(0.0),
                reflected
                    .dot(view_dir)
                    .max(0.0)
                    .powf(material.specular_exponent),
            )
        };

        acc + material.kd * material.diffuse_color * diffuse
            + material.ks * material.specular_color * specular
    });

    color_to_pixel(material.ka * material.ambient_color + diffuse_and_specular / lights.len() as f32)
}
