//! Light sources.

use prism_math::Vec3;

/// Trait for lights that illuminate shaded points.
pub trait LightSource: Send + Sync {
    /// Vector from `point` to the light. Its length is the distance to the
    /// light, used to bound the shadow ray.
    fn light_vector(&self, point: Vec3) -> Vec3;
}

/// A point light emitting equally in all directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl LightSource for PointLight {
    fn light_vector(&self, point: Vec3) -> Vec3 {
        self.position - point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_vector() {
        let light = PointLight::new(Vec3::new(0.0, 10.0, 0.0));
        let v = light.light_vector(Vec3::new(0.0, 4.0, 0.0));

        assert_eq!(v, Vec3::new(0.0, 6.0, 0.0));
        assert_eq!(v.length(), 6.0);
    }
}
