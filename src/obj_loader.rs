//! OBJ mesh loading. `obj-rs` decodes positions/normals/uvs; tangents are
//! not part of the OBJ format, so they're derived per-triangle from the UV
//! gradient and accumulated per vertex before normalizing, the standard
//! technique used by the original `Utils::ParseOBJ` collaborator.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use obj::{load_obj, Obj, TexturedVertex};

use crate::error::RendererError;
use crate::math::{ColorRgb, Vector2, Vector3};
use crate::mesh::Vertex;

pub fn load_obj_mesh<P: AsRef<Path>>(path: P) -> Result<(Vec<Vertex>, Vec<u32>), RendererError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| RendererError::AssetNotFound { path: path.to_path_buf() })?;

    let obj: Obj<TexturedVertex> = load_obj(BufReader::new(file)).map_err(|e| RendererError::MeshParseFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut vertices: Vec<Vertex> = obj
        .vertices
        .iter()
        .map(|v| Vertex {
            position: Vector3::new(v.position[0], v.position[1], v.position[2]),
            color: ColorRgb::WHITE,
            uv: Vector2::new(v.texture[0], 1.0 - v.texture[1]),
            normal: Vector3::new(v.normal[0], v.normal[1], v.normal[2]),
            tangent: Vector3::zeros(),
        })
        .collect();

    let indices: Vec<u32> = obj.indices.iter().map(|&i| i as u32).collect();
    accumulate_tangents(&mut vertices, &indices);

    Ok((vertices, indices))
}

fn accumulate_tangents(vertices: &mut [Vertex], indices: &[u32]) {
    let mut accumulated = vec![Vector3::zeros(); vertices.len()];

    for triangle in indices.chunks_exact(3) {
        let (i0, i1, i2) = (triangle[0] as usize, triangle[1] as usize, triangle[2] as usize);
        let (p0, p1, p2) = (vertices[i0].position, vertices[i1].position, vertices[i2].position);
        let (uv0, uv1, uv2) = (vertices[i0].uv, vertices[i1].uv, vertices[i2].uv);

        let edge1 = p1 - p0;
        let edge2 = p2 - p0;
        let delta_uv1 = uv1 - uv0;
        let delta_uv2 = uv2 - uv0;

        let denom = delta_uv1.x * delta_uv2.y - delta_uv2.x * delta_uv1.y;
        if denom.abs() < f32::EPSILON {
            continue;
        }
        let r = 1.0 / denom;
        let tangent = (edge1 * delta_uv2.y - edge2 * delta_uv1.y) * r;

        accumulated[i0] += tangent;
        accumulated[i1] += tangent;
        accumulated[i2] += tangent;
    }

    for (vertex, sum) in vertices.iter_mut().zip(accumulated) {
        vertex.tangent = if sum.norm() > f32::EPSILON { sum.normalize() } else { Vector3::new(1.0, 0.0, 0.0) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_tangents_is_orthogonal_ish_to_flat_normal_for_planar_quad() {
        let mut vertices = vec![
            Vertex::new(Vector3::new(0.0, 0.0, 0.0), Vector2::new(0.0, 1.0), Vector3::new(0.0, 0.0, -1.0), Vector3::zeros()),
            Vertex::new(Vector3::new(1.0, 0.0, 0.0), Vector2::new(1.0, 1.0), Vector3::new(0.0, 0.0, -1.0), Vector3::zeros()),
            Vertex::new(Vector3::new(1.0, 1.0, 0.0), Vector2::new(1.0, 0.0), Vector3::new(0.0, 0.0, -1.0), Vector3::zeros()),
            Vertex::new(Vector3::new(0.0, 1.0, 0.0), Vector2::new(0.0, 0.0), Vector3::new(0.0, 0.0, -1.0), Vector3::zeros()),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        accumulate_tangents(&mut vertices, &indices);

        for vertex in &vertices {
            assert!((vertex.tangent.norm() - 1.0).abs() < 1e-4);
            assert!(vertex.tangent.dot(&vertex.normal).abs() < 1e-4);
        }
    }

    #[test]
    fn degenerate_uv_triangle_leaves_fallback_tangent() {
        let mut vertices = vec![
            Vertex::new(Vector3::new(0.0, 0.0, 0.0), Vector2::new(0.5, 0.5), Vector3::new(0.0, 0.0, -1.0), Vector3::zeros()),
            Vertex::new(Vector3::new(1.0, 0.0, 0.0), Vector2::new(0.5, 0.5), Vector3::new(0.0, 0.0, -1.0), Vector3::zeros()),
            Vertex::new(Vector3::new(0.0, 1.0, 0.0), Vector2::new(0.5, 0.5), Vector3::new(0.0, 0.0, -1.0), Vector3::zeros()),
        ];
        let indices = vec![0, 1, 2];
        accumulate_tangents(&mut vertices, &indices);

        for vertex in &vertices {
            assert_eq!(vertex.tangent, Vector3::new(1.0, 0.0, 0.0));
        }
    }
}
