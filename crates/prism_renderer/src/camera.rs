//! Camera and image plane for primary ray generation.

use prism_core::CameraSettings;
use prism_math::{Ray, Vec3};

/// A rectangle in world space sampled by the raster.
///
/// Columns advance along x, rows along y (and z, for tilted planes). Pixel
/// (0, 0) sits next to `min_corner`.
#[derive(Debug, Clone, Copy)]
pub struct ImagePlane {
    columns: u32,
    rows: u32,
    // Cached computed values
    pixel00_loc: Vec3,
    pixel_delta_column: Vec3,
    pixel_delta_row: Vec3,
}

impl ImagePlane {
    /// Create an image plane of `columns` x `rows` pixels spanning the two corners.
    pub fn new(columns: u32, rows: u32, min_corner: Vec3, max_corner: Vec3) -> Self {
        let extent = max_corner - min_corner;
        let pixel_delta_column = Vec3::new(extent.x / columns as f32, 0.0, 0.0);
        let pixel_delta_row = Vec3::new(0.0, extent.y / rows as f32, extent.z / rows as f32);
        let pixel00_loc = min_corner + 0.5 * (pixel_delta_column + pixel_delta_row);

        Self {
            columns,
            rows,
            pixel00_loc,
            pixel_delta_column,
            pixel_delta_row,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// World-space position of the centre of pixel (column, row).
    pub fn generate_pixel_position(&self, column: u32, row: u32) -> Vec3 {
        self.pixel00_loc
            + column as f32 * self.pixel_delta_column
            + row as f32 * self.pixel_delta_row
    }
}

/// Pinhole camera generating one primary ray per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    plane: ImagePlane,
}

impl Camera {
    pub fn new(position: Vec3, plane: ImagePlane) -> Self {
        Self { position, plane }
    }

    /// Build a camera for a `width` x `height` raster from scene settings.
    pub fn from_settings(settings: &CameraSettings, width: u32, height: u32) -> Self {
        let plane = ImagePlane::new(width, height, settings.plane_min, settings.plane_max);
        Self::new(settings.position, plane)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn plane(&self) -> &ImagePlane {
        &self.plane
    }

    /// Generate the primary ray through pixel (column, row).
    ///
    /// The direction runs from the camera to the pixel centre and is not
    /// normalized.
    pub fn generate_ray(&self, column: u32, row: u32) -> Ray {
        let pixel = self.plane.generate_pixel_position(column, row);
        Ray::new(self.position, pixel - self.position)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default(), 500, 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_positions() {
        let plane = ImagePlane::new(4, 2, Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, -1.0));

        assert_eq!(plane.generate_pixel_position(0, 0), Vec3::new(-0.75, -0.5, -1.0));
        assert_eq!(plane.generate_pixel_position(3, 1), Vec3::new(0.75, 0.5, -1.0));
    }

    #[test]
    fn test_camera_ray_direction() {
        let camera = Camera::from_settings(&CameraSettings::default(), 100, 100);
        let ray = camera.generate_ray(50, 50);

        assert_eq!(ray.origin(), Vec3::ZERO);
        // Center ray points roughly towards -Z
        assert!(ray.direction().z < 0.0);
        assert!(ray.direction().x.abs() < 0.05);
        assert!(ray.direction().y.abs() < 0.05);
    }

    #[test]
    fn test_camera_rays_reach_plane() {
        let settings = CameraSettings {
            position: Vec3::new(0.0, 0.0, 2.0),
            ..Default::default()
        };
        let camera = Camera::from_settings(&settings, 10, 10);
        let ray = camera.generate_ray(9, 0);

        // t = 1 lands exactly on the pixel centre
        assert_eq!(ray.at(1.0), camera.plane().generate_pixel_position(9, 0));
    }
}
