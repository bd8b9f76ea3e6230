//! Primitive trait and hit record for ray-object intersection.

use prism_core::Material;
use prism_math::{BoundingVolume, Ray, Vec3};

/// Trait for drawable objects that rays can hit.
///
/// Primitives are built once by the scene loader and only read while
/// rendering, so they must be shareable across render threads.
pub trait Primitive: Send + Sync {
    /// Smallest strictly positive parametric distance at which `ray` hits
    /// this primitive, or `None`.
    ///
    /// A hit exactly at the ray origin (t == 0) is not reported.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward surface normal at a point on the primitive.
    ///
    /// Not necessarily unit length; callers normalize.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// The material shared by this primitive.
    fn material(&self) -> &Material;

    /// Axis-aligned bounds of the primitive.
    fn bounds(&self) -> BoundingVolume;
}

/// Nearest intersection found along a ray.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive that was hit
    pub primitive: &'a dyn Primitive,
    /// Parametric distance along the ray
    pub distance: f32,
}

impl<'a> Hit<'a> {
    /// Point of intersection on `ray`.
    #[inline]
    pub fn point(&self, ray: &Ray) -> Vec3 {
        ray.at(self.distance)
    }
}
