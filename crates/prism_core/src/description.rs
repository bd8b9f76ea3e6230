//! Scene description file format.
//!
//! A scene is described by a single JSON document naming the render settings,
//! the camera, a table of materials, the geometry (OBJ meshes and inline
//! triangles) and the lights. Every section except `lights` is optional.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::Deserialize;

use crate::loader::{LoadError, LoadResult};
use crate::material::Material;

/// Top-level scene description.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub render: RenderSettings,
    pub camera: CameraSettings,
    pub materials: BTreeMap<String, Material>,
    pub meshes: Vec<MeshInstance>,
    pub triangles: Vec<TriangleDescription>,
    pub lights: Vec<LightDescription>,
}

/// Output raster settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Colour written where no primitive is hit
    pub background: [u8; 3],
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
    /// Skip primary rays that miss the scene's bounding volume
    pub bounds_culling: bool,
    /// Where the CLI saves the image; the extension picks the format
    pub output: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            background: [255, 255, 255],
            bucket_size: 64,
            bounds_culling: false,
            output: PathBuf::from("result.png"),
        }
    }
}

/// Pinhole camera looking through a rectangular image plane.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    /// Image plane corner mapped to pixel (column 0, row 0)
    pub plane_min: Vec3,
    /// Opposite image plane corner
    pub plane_max: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            plane_min: Vec3::new(-1.0, -1.0, -1.0),
            plane_max: Vec3::new(1.0, 1.0, -1.0),
        }
    }
}

/// An OBJ file placed in the scene.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeshInstance {
    pub path: PathBuf,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default = "default_scale")]
    pub scale: f32,
    pub material: String,
}

fn default_scale() -> f32 {
    1.0
}

/// A single triangle given inline in the description.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TriangleDescription {
    pub vertices: [Vec3; 3],
    pub material: String,
}

/// A light source.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightDescription {
    Point { position: Vec3 },
}

impl SceneDescription {
    /// Parse a description from a JSON string and validate it.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        let description: SceneDescription = serde_json::from_str(json)?;
        description.validate()?;
        Ok(description)
    }

    /// Check cross references and preconditions the renderer relies on.
    pub fn validate(&self) -> LoadResult<()> {
        if self.lights.is_empty() {
            return Err(LoadError::NoLights);
        }

        if self.render.width == 0 || self.render.height == 0 {
            return Err(LoadError::InvalidSettings(format!(
                "raster must be at least 1x1, got {}x{}",
                self.render.width, self.render.height
            )));
        }

        if self.render.bucket_size == 0 {
            return Err(LoadError::InvalidSettings("bucket_size must be positive".into()));
        }

        for (name, material) in &self.materials {
            if let Some(problem) = material.check() {
                return Err(LoadError::InvalidMaterial {
                    name: name.clone(),
                    problem,
                });
            }
        }

        let referenced = self
            .meshes
            .iter()
            .map(|m| &m.material)
            .chain(self.triangles.iter().map(|t| &t.material));
        for name in referenced {
            if !self.materials.contains_key(name) {
                return Err(LoadError::UnknownMaterial(name.clone()));
            }
        }

        Ok(())
    }

    /// Make relative mesh paths relative to `base_dir` instead of the
    /// working directory.
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        for mesh in &mut self.meshes {
            if mesh.path.is_relative() {
                mesh.path = base_dir.join(&mesh.path);
            }
        }
    }
}
