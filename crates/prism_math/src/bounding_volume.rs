use crate::{Interval, Ray, Vec3};

/// Direction components smaller than this are treated as parallel to a slab.
pub const PARALLEL_EPSILON: f32 = 1e-3;

/// Axis-aligned bounding box used as a cheap pre-filter before exact
/// primitive intersection.
///
/// Stored as two corners with `min[i] <= max[i]` on every axis. The only value
/// that breaks the ordering is [`BoundingVolume::EMPTY`], the identity for
/// [`BoundingVolume::surrounding`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingVolume {
    min: Vec3,
    max: Vec3,
}

impl BoundingVolume {
    /// Create a box from two opposite corners, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing every point. Returns [`Self::EMPTY`] for no points.
    pub fn from_point_cloud<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, |bounds, p| bounds.include(*p))
    }

    /// Create a box that surrounds two other boxes.
    pub fn surrounding(a: &BoundingVolume, b: &BoundingVolume) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// Grow the box to contain `point`.
    pub fn include(&self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// True for the empty box (contains nothing).
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Test whether the ray, restricted to t >= 0, passes through the box.
    ///
    /// Slab method: each axis narrows the accepted parametric interval. An axis
    /// whose direction component is below [`PARALLEL_EPSILON`] is never divided
    /// by; the ray is then parallel to that slab and only passes if its origin
    /// already lies between the two planes.
    pub fn hit(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }

        let origin = ray.origin();
        let direction = ray.direction();
        let mut ray_t = Interval::UNIVERSE;

        for axis in 0..3 {
            let slab = Interval::new(self.min[axis], self.max[axis]);

            if direction[axis].abs() < PARALLEL_EPSILON {
                if !slab.contains(origin[axis]) {
                    return false;
                }
                continue;
            }

            let mut t0 = (slab.min - origin[axis]) / direction[axis];
            let mut t1 = (slab.max - origin[axis]) / direction[axis];
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t = ray_t.intersect(&Interval::new(t0, t1));
            if ray_t.is_empty() || ray_t.max < 0.0 {
                return false;
            }
        }

        true
    }

    pub const EMPTY: BoundingVolume = BoundingVolume {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };
}
