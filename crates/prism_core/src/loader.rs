//! Scene and mesh loading.
//!
//! Everything the renderer consumes is validated here, so malformed input is
//! rejected before any primitive is built.

use std::io::BufRead;
use std::path::Path;

use glam::Vec3;
use thiserror::Error;

use crate::description::SceneDescription;
use crate::mesh::Mesh;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene description error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("OBJ error: {0}")]
    Obj(tobj::LoadError),

    #[error("No geometry found")]
    NoGeometry,

    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    #[error("Vertex index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Invalid material '{name}': {problem}")]
    InvalidMaterial { name: String, problem: String },

    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("Scene has no light sources")]
    NoLights,
}

impl From<tobj::LoadError> for LoadError {
    fn from(err: tobj::LoadError) -> Self {
        match err {
            // tobj checks face indices while parsing, before a mesh exists
            tobj::LoadError::FaceVertexOutOfBounds => {
                LoadError::IndexOutOfRange("a face references an undefined vertex".into())
            }
            other => LoadError::Obj(other),
        }
    }
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a JSON scene description.
///
/// Relative mesh paths are resolved against the description's directory.
pub fn load_description<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let mut description = SceneDescription::from_json(&json)?;

    if let Some(dir) = path.parent() {
        description.resolve_paths(dir);
    }

    log::info!(
        "Loaded scene description {}: {} meshes, {} triangles, {} lights",
        path.display(),
        description.meshes.len(),
        description.triangles.len(),
        description.lights.len()
    );

    Ok(description)
}

fn obj_load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load an OBJ file into a single mesh, placing it in the scene.
///
/// Each vertex becomes `(x * scale, -y * scale, z * scale) + position`. The
/// y axis is flipped because image rows grow along +y in camera space.
pub fn load_obj<P: AsRef<Path>>(path: P, position: Vec3, scale: f32) -> LoadResult<Mesh> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(path, &obj_load_options())?;

    let mesh = build_mesh(&models, position, scale)?;
    log::info!(
        "Loaded {}: {} vertices, {} triangles, bounds {} to {}",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.bounds.min(),
        mesh.bounds.max()
    );
    Ok(mesh)
}

/// Parse OBJ data from a reader. Material libraries are ignored.
pub fn parse_obj<R: BufRead>(reader: &mut R, position: Vec3, scale: f32) -> LoadResult<Mesh> {
    let (models, _materials) = tobj::load_obj_buf(reader, &obj_load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;

    build_mesh(&models, position, scale)
}

/// Merge every model of an OBJ file into one validated mesh.
fn build_mesh(models: &[tobj::Model], position: Vec3, scale: f32) -> LoadResult<Mesh> {
    let transform = Vec3::new(scale, -scale, scale);
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for model in models {
        let base = positions.len() as u32;
        positions.extend(
            model
                .mesh
                .positions
                .chunks_exact(3)
                .map(|p| Vec3::from_slice(p) * transform + position),
        );
        indices.extend(model.mesh.indices.iter().map(|i| base + i));
    }

    let mesh = Mesh::new(positions, indices);
    mesh.validate()?;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TRIANGLE_OBJ: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";

    #[test]
    fn test_parse_obj_transform() {
        let mesh = parse_obj(
            &mut Cursor::new(TRIANGLE_OBJ),
            Vec3::new(10.0, 20.0, 30.0),
            2.0,
        )
        .unwrap();

        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.positions[0], Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(mesh.positions[1], Vec3::new(12.0, 20.0, 30.0));
        // y is flipped before the offset
        assert_eq!(mesh.positions[2], Vec3::new(10.0, 18.0, 30.0));
    }

    #[test]
    fn test_parse_obj_quad_is_triangulated() {
        let obj = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";
        let mesh = parse_obj(&mut Cursor::new(obj), Vec3::ZERO, 1.0).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_parse_obj_slash_formats() {
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
vt 0 0
f 1/1/1 2/1/1 3/1/1
";
        let mesh = parse_obj(&mut Cursor::new(obj), Vec3::ZERO, 1.0).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_parse_obj_rejects_bad_index() {
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 7
";
        assert!(matches!(
            parse_obj(&mut Cursor::new(obj), Vec3::ZERO, 1.0),
            Err(LoadError::IndexOutOfRange(_))
        ));
    }

    #[test]
    fn test_load_obj_rejects_bad_index() {
        let path = std::env::temp_dir().join(format!("prism_bad_index_{}.obj", std::process::id()));
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nf 1 3 9\n").unwrap();

        let result = load_obj(&path, Vec3::ZERO, 1.0);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(LoadError::IndexOutOfRange(_))));
    }

    #[test]
    fn test_other_obj_errors_pass_through() {
        let err = LoadError::from(tobj::LoadError::PositionParseError);
        assert!(matches!(err, LoadError::Obj(tobj::LoadError::PositionParseError)));
    }

    #[test]
    fn test_parse_obj_rejects_no_faces() {
        let obj = "v 0 0 0\nv 1 0 0\n";
        assert!(matches!(
            parse_obj(&mut Cursor::new(obj), Vec3::ZERO, 1.0),
            Err(LoadError::NoGeometry)
        ));
    }

    #[test]
    fn test_load_description_resolves_mesh_paths() {
        let dir = std::env::temp_dir().join(format!("prism_loader_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let scene_path = dir.join("scene.json");
        std::fs::write(
            &scene_path,
            r#"{
                "materials": { "grey": {} },
                "meshes": [ { "path": "tri.obj", "material": "grey" } ],
                "lights": [ { "type": "point", "position": [0, 0, 0] } ]
            }"#,
        )
        .unwrap();
        std::fs::write(dir.join("tri.obj"), TRIANGLE_OBJ).unwrap();

        let description = load_description(&scene_path).unwrap();
        let mesh_path = &description.meshes[0].path;
        assert_eq!(mesh_path, &dir.join("tri.obj"));

        let mesh = load_obj(mesh_path, Vec3::ZERO, 1.0).unwrap();
        assert_eq!(mesh.triangle_count(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_description_missing_file() {
        let result = load_description("/definitely/not/here/scene.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
