//! prism core - scene description, materials and mesh loading.
//!
//! This crate provides:
//!
//! - **Scene description**: the JSON document naming render settings,
//!   camera, materials, geometry and lights
//! - **Geometry loading**: Wavefront OBJ files via `tobj`
//! - **Validation**: everything is checked here so the renderer can assume
//!   well-formed input
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{load_description, load_obj};
//!
//! let description = load_description("scenes/bunny.json")?;
//! for instance in &description.meshes {
//!     let mesh = load_obj(&instance.path, instance.position, instance.scale)?;
//!     println!("{} triangles", mesh.triangle_count());
//! }
//! ```

pub mod description;
pub mod loader;
pub mod material;
pub mod mesh;

// Re-export commonly used types
pub use description::{
    CameraSettings, LightDescription, MeshInstance, RenderSettings, SceneDescription,
    TriangleDescription,
};
pub use loader::{load_description, load_obj, parse_obj, LoadError, LoadResult};
pub use material::Material;
pub use mesh::Mesh;
