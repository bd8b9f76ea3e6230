//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use prism_core::Material;
use prism_math::{BoundingVolume, Ray, Vec3};

use crate::primitive::Primitive;

/// Determinants below this mean the ray runs parallel to the triangle's plane.
const PARALLEL_DETERMINANT: f32 = 1e-8;

/// A triangle primitive.
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Face normal `(v1 - v0) x (v2 - v0)`, unnormalized
    normal: Vec3,
    /// Material shared with the rest of the mesh
    material: Arc<Material>,
    bounds: BoundingVolume,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The winding order decides which side the normal faces: counter-clockwise
    /// vertices seen from a viewpoint give a normal pointing towards it.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0);
        let bounds = BoundingVolume::from_points(v0.min(v1).min(v2), v0.max(v1).max(v2));

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
            bounds,
        }
    }

    /// True when the vertices are collinear (zero area).
    pub fn is_degenerate(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
        (v1 - v0).cross(v2 - v0).length_squared() <= f32::EPSILON * f32::EPSILON
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }
}

impl Primitive for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_DETERMINANT {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        (t > 0.0).then_some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn bounds(&self) -> BoundingVolume {
        self.bounds
    }
}
