//! Vertex processor: world*view*projection transform, clip-space w capture,
//! perspective divide, and normal/tangent transform by the world matrix.

use crate::camera::Camera;
use crate::math::{Vector3, Vector4};
use crate::mesh::{Mesh, VertexOut};

pub fn transform_vertices(mesh: &mut Mesh, camera: &Camera) {
    mesh.vertices_out.clear();
    mesh.vertices_out.reserve(mesh.vertices.len());

    let wvp = mesh.world_matrix * camera.view_matrix * camera.projection_matrix;

    for vertex in &mesh.vertices {
        let clip = wvp.transform_point4(Vector4::new(vertex.position.x, vertex.position.y, vertex.position.z, 1.0));

        let view_direction = Vector3::new(clip.x, clip.y, clip.z).normalize();

        let normal = mesh.world_matrix.transform_vector(vertex.normal);
        let tangent = mesh.world_matrix.transform_vector(vertex.tangent);

        let position = Vector4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, clip.w);

        mesh.vertices_out.push(VertexOut {
            position,
            color: vertex.color,
            uv: vertex.uv,
            normal,
            tangent,
            view_direction,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::config::RendererConfig;
    use crate::math::{ColorRgb, Vector2, Vector3};
    use crate::mesh::{Mesh, PrimitiveTopology, Vertex};

    fn straight_ahead_camera() -> Camera {
        Camera::new(&RendererConfig::default(), 1.0)
    }

    #[test]
    fn perspective_divide_preserves_w_and_normalizes_xyz() {
        let camera = straight_ahead_camera();
        let mut mesh = Mesh::new(
            vec![Vertex::new(
                Vector3::new(0.0, 0.0, 2.0),
                Vector2::zeros(),
                Vector3::new(0.0, 0.0, -1.0),
                Vector3::new(1.0, 0.0, 0.0),
            )],
            vec![0],
            PrimitiveTopology::TriangleList,
        );

        transform_vertices(&mut mesh, &camera);

        let out = &mesh.vertices_out[0];
        // Point on the camera's forward axis projects to NDC (0,0,*).
        assert!(out.position.x.abs() < 1e-4);
        assert!(out.position.y.abs() < 1e-4);
        assert!(out.position.w > 0.0);
    }

    #[test]
    fn normal_and_tangent_are_rotated_by_world_matrix_only() {
        use crate::math::Matrix;
        let camera = straight_ahead_camera();
        let mut mesh = Mesh::new(
            vec![Vertex {
                position: Vector3::new(0.0, 0.0, 5.0),
                color: ColorRgb::WHITE,
                uv: Vector2::zeros(),
                normal: Vector3::new(0.0, 0.0, 1.0),
                tangent: Vector3::new(1.0, 0.0, 0.0),
            }],
            vec![0],
            PrimitiveTopology::TriangleList,
        );
        mesh.world_matrix = Matrix::rotation_y(std::f32::consts::FRAC_PI_2);

        transform_vertices(&mut mesh, &camera);

        let out = &mesh.vertices_out[0];
        assert!((out.normal - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-4);
    }
}
