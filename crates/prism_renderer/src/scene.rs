//! Renderable scene: primitives plus lights, with nearest-hit and shadow queries.

use prism_math::{BoundingVolume, Interval, Ray};
use thiserror::Error;

use crate::light::LightSource;
use crate::primitive::{Hit, Primitive};

/// Shadow-ray hits closer than this belong to the surface being shaded.
pub const SHADOW_EPSILON: f32 = 1e-4;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Scene has no light sources")]
    NoLights,
}

impl From<SceneError> for prism_core::LoadError {
    fn from(err: SceneError) -> Self {
        match err {
            SceneError::NoLights => prism_core::LoadError::NoLights,
        }
    }
}

/// The fixed set of primitives and lights for one render.
///
/// Nothing in a scene changes while it renders, so it is shared read-only by
/// every render thread.
pub struct Scene {
    primitives: Vec<Box<dyn Primitive>>,
    lights: Vec<Box<dyn LightSource>>,
    bounds: BoundingVolume,
}

impl Scene {
    /// Create a scene. At least one light is required: shading averages over
    /// the light count.
    pub fn new(
        primitives: Vec<Box<dyn Primitive>>,
        lights: Vec<Box<dyn LightSource>>,
    ) -> Result<Self, SceneError> {
        if lights.is_empty() {
            return Err(SceneError::NoLights);
        }

        let bounds = primitives
            .iter()
            .fold(BoundingVolume::EMPTY, |acc, p| {
                BoundingVolume::surrounding(&acc, &p.bounds())
            });

        Ok(Self {
            primitives,
            lights,
            bounds,
        })
    }

    pub fn primitives(&self) -> &[Box<dyn Primitive>] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Box<dyn LightSource>] {
        &self.lights
    }

    /// Bounds of every primitive in the scene.
    pub fn bounds(&self) -> BoundingVolume {
        self.bounds
    }

    /// Find the nearest primitive hit by `ray` with 0 < t < `max_distance`.
    ///
    /// Ties keep the earliest primitive in list order.
    pub fn find_closest(&self, ray: &Ray, max_distance: f32) -> Option<Hit<'_>> {
        self.primitives
            .iter()
            .fold(None, |closest: Option<Hit<'_>>, primitive| {
                let bound = closest.map_or(max_distance, |hit| hit.distance);
                match primitive.intersect(ray) {
                    Some(t) if Interval::new(0.0, bound).surrounds(t) => Some(Hit {
                        primitive: primitive.as_ref(),
                        distance: t,
                    }),
                    _ => closest,
                }
            })
    }

    /// True if any primitive blocks `ray` strictly between the shaded point
    /// and a light `light_distance` away.
    ///
    /// `ray` must have a unit direction so that t is a world distance.
    pub fn is_shadowed(&self, ray: &Ray, light_distance: f32) -> bool {
        let window = Interval::new(SHADOW_EPSILON, light_distance);
        self.primitives
            .iter()
            .any(|primitive| primitive.intersect(ray).is_some_and(|t| window.surrounds(t)))
    }
}
