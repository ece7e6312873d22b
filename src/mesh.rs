//! Mesh store: input vertices, the index list, primitive topology, the
//! world matrix, and the per-frame output-vertex scratch buffer.

use std::path::Path;

use crate::error::RendererError;
use crate::math::{ColorRgb, Matrix, Vector2, Vector3, Vector4};
use crate::obj_loader::load_obj_mesh;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrimitiveTopology {
    TriangleList,
    TriangleStrip,
}

#[derive(Copy, Clone, Debug)]
pub struct Vertex {
    pub position: Vector3,
    pub color: ColorRgb,
    pub uv: Vector2,
    pub normal: Vector3,
    pub tangent: Vector3,
}

impl Vertex {
    pub fn new(position: Vector3, uv: Vector2, normal: Vector3, tangent: Vector3) -> Self {
        Vertex {
            position,
            color: ColorRgb::WHITE,
            uv,
            normal,
            tangent,
        }
    }
}

/// Processed vertex: `position` holds clip-space xyzw before the
/// perspective divide, and post-divide NDC xyz (with the original clip w
/// retained in `.w`) afterward.
#[derive(Copy, Clone, Debug)]
pub struct VertexOut {
    pub position: Vector4,
    pub color: ColorRgb,
    pub uv: Vector2,
    pub normal: Vector3,
    pub tangent: Vector3,
    pub view_direction: Vector3,
}

#[derive(Debug)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: PrimitiveTopology,
    pub world_matrix: Matrix,
    pub vertices_out: Vec<VertexOut>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>, topology: PrimitiveTopology) -> Self {
        debug_assert!(
            match topology {
                PrimitiveTopology::TriangleList => indices.len() % 3 == 0,
                PrimitiveTopology::TriangleStrip => indices.len() >= 3,
            },
            "index buffer length invalid for topology"
        );

        Mesh {
            vertices,
            indices,
            topology,
            world_matrix: Matrix::identity(),
            vertices_out: Vec::new(),
        }
    }

    /// Loads an OBJ file via the OBJ loader collaborator into a
    /// `TriangleList` mesh.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, RendererError> {
        let (vertices, indices) = load_obj_mesh(path)?;
        Ok(Mesh::new(vertices, indices, PrimitiveTopology::TriangleList))
    }

    /// Every triangle's three indices into `vertices_out`/`indices`, in
    /// emission order, expanding triangle-strip winding so every emitted
    /// triangle is counter-clockwise-consistent (see spec §4.5).
    pub fn triangle_index_triples(&self) -> Vec<(usize, usize, usize)> {
        let mut triples = Vec::new();
        match self.topology {
            PrimitiveTopology::TriangleList => {
                let mut i = 0;
                while i + 2 < self.indices.len() {
                    triples.push((i, i + 1, i + 2));
                    i += 3;
                }
            }
            PrimitiveTopology::TriangleStrip => {
                if self.indices.len() >= 3 {
                    for i in 0..self.indices.len() - 2 {
                        let swap = (i & 1) != 0;
                        if swap {
                            triples.push((i, i + 2, i + 1));
                        } else {
                            triples.push((i, i + 1, i + 2));
                        }
                    }
                }
            }
        }
        triples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_vertex() -> Vertex {
        Vertex::new(Vector3::zeros(), Vector2::zeros(), Vector3::new(0.0, 0.0, -1.0), Vector3::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn triangle_list_expands_sequentially() {
        let mesh = Mesh::new(vec![dummy_vertex(); 6], vec![0, 1, 2, 3, 4, 5], PrimitiveTopology::TriangleList);
        assert_eq!(mesh.triangle_index_triples(), vec![(0, 1, 2), (3, 4, 5)]);
    }

    #[test]
    fn triangle_strip_matches_manually_expanded_triangle_list() {
        // Spec scenario 4: strip [0,1,2,3,4,5] matches the list
        // [0,1,2, 2,1,3, 2,3,4, 4,3,5].
        let mesh = Mesh::new(
            vec![dummy_vertex(); 6],
            vec![0, 1, 2, 3, 4, 5],
            PrimitiveTopology::TriangleStrip,
        );
        assert_eq!(
            mesh.triangle_index_triples(),
            vec![(0, 1, 2), (1, 3, 2), (2, 3, 4), (3, 5, 4)]
        );
    }
}
