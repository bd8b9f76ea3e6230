//! Phong surface material.

use glam::Vec3;
use serde::Deserialize;

/// Phong reflectance parameters for a surface.
///
/// Colours are RGB triples on the 0-255 channel scale of the output raster.
/// One material is shared (behind an `Arc`) by every triangle of a mesh.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Ambient colour
    pub ambient_color: Vec3,

    /// Diffuse colour
    pub diffuse_color: Vec3,

    /// Specular highlight colour
    pub specular_color: Vec3,

    /// Ambient reflectance coefficient
    pub ka: f32,

    /// Diffuse reflectance coefficient
    pub kd: f32,

    /// Specular reflectance coefficient
    pub ks: f32,

    /// Phong exponent; larger values give tighter highlights
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::splat(200.0),
            diffuse_color: Vec3::splat(200.0),
            specular_color: Vec3::splat(255.0),
            ka: 0.1,
            kd: 0.7,
            ks: 0.2,
            specular_exponent: 32.0,
        }
    }
}

impl Material {
    /// Create a material that uses `color` for both ambient and diffuse terms.
    pub fn new(color: Vec3) -> Self {
        Self {
            ambient_color: color,
            diffuse_color: color,
            ..Default::default()
        }
    }

    /// Set the reflectance coefficients.
    pub fn with_coefficients(mut self, ka: f32, kd: f32, ks: f32) -> Self {
        self.ka = ka;
        self.kd = kd;
        self.ks = ks;
        self
    }

    /// Set the specular colour and exponent.
    pub fn with_specular(mut self, color: Vec3, exponent: f32) -> Self {
        self.specular_color = color;
        self.specular_exponent = exponent;
        self
    }

    /// Returns a description of the first invalid parameter, if any.
    ///
    /// Coefficients and the exponent must be finite and non-negative.
    pub fn check(&self) -> Option<String> {
        let scalars = [
            ("ka", self.ka),
            ("kd", self.kd),
            ("ks", self.ks),
            ("specular_exponent", self.specular_exponent),
        ];
        scalars
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(field, value)| format!("{} must be finite and non-negative, got {}", field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_new() {
        let m = Material::new(Vec3::new(255.0, 0.0, 0.0)).with_coefficients(0.2, 0.5, 0.3);

        assert_eq!(m.ambient_color, Vec3::new(255.0, 0.0, 0.0));
        assert_eq!(m.diffuse_color, Vec3::new(255.0, 0.0, 0.0));
        assert_eq!(m.ka, 0.2);
        assert_eq!(m.kd, 0.5);
        assert_eq!(m.ks, 0.3);
        assert!(m.check().is_none());
    }

    #[test]
    fn test_material_check_rejects_negative() {
        let m = Material::default().with_specular(Vec3::ONE, -1.0);
        let problem = m.check().unwrap();
        assert!(problem.contains("specular_exponent"));

        let m = Material::default().with_coefficients(f32::NAN, 0.5, 0.5);
        assert!(m.check().unwrap().contains("ka"));
    }

    #[test]
    fn test_material_deserialize_partial() {
        let m: Material =
            serde_json::from_str(r#"{ "diffuse_color": [10, 20, 30], "kd": 0.9 }"#).unwrap();

        assert_eq!(m.diffuse_color, Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(m.kd, 0.9);
        // Unspecified fields keep their defaults
        assert_eq!(m.ks, Material::default().ks);
    }
}
