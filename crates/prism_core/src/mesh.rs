//! Triangle mesh geometry.
//!
//! A mesh is the loader-side representation of geometry: flat vertex
//! positions plus triangle indices. The renderer turns it into one
//! triangle primitive per face.

use glam::Vec3;
use prism_math::BoundingVolume;

use crate::loader::{LoadError, LoadResult};

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Axis-aligned bounding box
    pub bounds: BoundingVolume,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    ///
    /// Indices are not checked here; call [`Mesh::validate`] before handing
    /// the mesh to a renderer.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let bounds = BoundingVolume::from_point_cloud(&positions);
        Self {
            positions,
            indices,
            bounds,
        }
    }

    /// Check that the mesh has faces and every index references a vertex.
    pub fn validate(&self) -> LoadResult<()> {
        if self.indices.is_empty() {
            return Err(LoadError::NoGeometry);
        }

        if self.indices.len() % 3 != 0 {
            return Err(LoadError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        let vertex_count = self.positions.len();
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(LoadError::IndexOutOfRange(format!(
                "face references vertex {} but the mesh has {} vertices",
                bad, vertex_count
            )));
        }

        Ok(())
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over triangles as `[v0, v1, v2]` vertex triplets.
    ///
    /// Faces with out-of-range indices are skipped with a warning; validated
    /// meshes never hit that path.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(move |face| {
            let i0 = face[0] as usize;
            let i1 = face[1] as usize;
            let i2 = face[2] as usize;

            match (
                self.positions.get(i0),
                self.positions.get(i1),
                self.positions.get(i2),
            ) {
                (Some(&v0), Some(&v1), Some(&v2)) => Some([v0, v1, v2]),
                _ => {
                    log::warn!(
                        "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                        i0,
                        i1,
                        i2,
                        self.positions.len()
                    );
                    None
                }
            }
        })
    }
}
