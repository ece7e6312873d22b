use super::{Vector3, Vector4};
use nalgebra::{Matrix4, RowVector4};

/// A 4x4 transform represented, per the data model, as four row basis
/// vectors: `right`, `up`, `forward`, `translation`. Composition and
/// point/vector transforms use row-vector convention (`v_row * M`) so that
/// `world * view * projection` applies `world` first, exactly as the
/// camera's ONB-as-rows construction requires.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix(pub Matrix4<f32>);

impl Matrix {
    pub fn identity() -> Matrix {
        Matrix(Matrix4::identity())
    }

    /// Builds a matrix whose rows are the given basis vectors, matching the
    /// camera's `invViewMatrix = (right, up, forward, origin)` construction.
    pub fn from_basis(right: Vector4, up: Vector4, forward: Vector4, translation: Vector4) -> Matrix {
        Matrix(Matrix4::from_rows(&[
            right.transpose(),
            up.transpose(),
            forward.transpose(),
            translation.transpose(),
        ]))
    }

    pub fn translation(t: Vector3) -> Matrix {
        Matrix(Matrix4::from_rows(&[
            RowVector4::new(1.0, 0.0, 0.0, 0.0),
            RowVector4::new(0.0, 1.0, 0.0, 0.0),
            RowVector4::new(0.0, 0.0, 1.0, 0.0),
            RowVector4::new(t.x, t.y, t.z, 1.0),
        ]))
    }

    pub fn scale(s: Vector3) -> Matrix {
        Matrix(Matrix4::from_rows(&[
            RowVector4::new(s.x, 0.0, 0.0, 0.0),
            RowVector4::new(0.0, s.y, 0.0, 0.0),
            RowVector4::new(0.0, 0.0, s.z, 0.0),
            RowVector4::new(0.0, 0.0, 0.0, 1.0),
        ]))
    }

    pub fn rotation_x(radians: f32) -> Matrix {
        let (s, c) = radians.sin_cos();
        Matrix(Matrix4::from_rows(&[
            RowVector4::new(1.0, 0.0, 0.0, 0.0),
            RowVector4::new(0.0, c, s, 0.0),
            RowVector4::new(0.0, -s, c, 0.0),
            RowVector4::new(0.0, 0.0, 0.0, 1.0),
        ]))
    }

    pub fn rotation_y(radians: f32) -> Matrix {
        let (s, c) = radians.sin_cos();
        Matrix(Matrix4::from_rows(&[
            RowVector4::new(c, 0.0, -s, 0.0),
            RowVector4::new(0.0, 1.0, 0.0, 0.0),
            RowVector4::new(s, 0.0, c, 0.0),
            RowVector4::new(0.0, 0.0, 0.0, 1.0),
        ]))
    }

    pub fn rotation_z(radians: f32) -> Matrix {
        let (s, c) = radians.sin_cos();
        Matrix(Matrix4::from_rows(&[
            RowVector4::new(c, s, 0.0, 0.0),
            RowVector4::new(-s, c, 0.0, 0.0),
            RowVector4::new(0.0, 0.0, 1.0, 0.0),
            RowVector4::new(0.0, 0.0, 0.0, 1.0),
        ]))
    }

    /// Combined rotation, applying pitch (X) then yaw (Y) then roll (Z),
    /// matching `pitchMatrix * yawMatrix * rollMatrix` in row-vector
    /// convention (pitch applied first).
    pub fn rotation(pitch: f32, yaw: f32, roll: f32) -> Matrix {
        Matrix::rotation_x(pitch) * Matrix::rotation_y(yaw) * Matrix::rotation_z(roll)
    }

    /// Left-handed perspective projection for a horizontal FOV given in
    /// degrees. Maps view-space z in `[near, far]` to post-divide NDC z in
    /// `[0, 1]`; the input z is carried into clip-space w.
    pub fn perspective_fov_lh(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Matrix {
        let fov = (fov_degrees * super::TO_RADIANS / 2.0).tan();
        Matrix(Matrix4::from_rows(&[
            RowVector4::new(1.0 / (aspect * fov), 0.0, 0.0, 0.0),
            RowVector4::new(0.0, 1.0 / fov, 0.0, 0.0),
            RowVector4::new(0.0, 0.0, far / (far - near), 1.0),
            RowVector4::new(0.0, 0.0, -far * near / (far - near), 0.0),
        ]))
    }

    /// Transforms a point, treating `v` as `(x, y, z, 1)` and discarding the
    /// resulting w (it is always 1 for an affine matrix, which all builders
    /// above produce).
    pub fn transform_point(&self, v: Vector3) -> Vector3 {
        let v4 = Vector4::new(v.x, v.y, v.z, 1.0);
        let row = v4.transpose() * self.0;
        Vector3::new(row[0], row[1], row[2])
    }

    /// Transforms a full homogeneous point, returning the computed w
    /// (needed for the clip-space position before perspective divide).
    pub fn transform_point4(&self, v: Vector4) -> Vector4 {
        let row = v.transpose() * self.0;
        Vector4::new(row[0], row[1], row[2], row[3])
    }

    /// Transforms a direction, treating `v` as `(x, y, z, 0)` so the
    /// translation row never contributes.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let v4 = Vector4::new(v.x, v.y, v.z, 0.0);
        let row = v4.transpose() * self.0;
        Vector3::new(row[0], row[1], row[2])
    }

    /// Fast inverse for a rigid transform whose first three rows form an
    /// orthonormal basis (e.g. a camera's `invViewMatrix`): the rotation
    /// block's inverse is its transpose, and the translation row is
    /// re-projected onto the transposed basis.
    pub fn inverse_rigid(&self) -> Matrix {
        let row3 = |i: usize| Vector3::new(self.0[(i, 0)], self.0[(i, 1)], self.0[(i, 2)]);
        let r0 = row3(0);
        let r1 = row3(1);
        let r2 = row3(2);
        let t = row3(3);

        Matrix(Matrix4::from_rows(&[
            RowVector4::new(r0.x, r1.x, r2.x, 0.0),
            RowVector4::new(r0.y, r1.y, r2.y, 0.0),
            RowVector4::new(r0.z, r1.z, r2.z, 0.0),
            RowVector4::new(-t.dot(&r0), -t.dot(&r1), -t.dot(&r2), 1.0),
        ]))
    }

    /// General 4x4 inverse via Gauss-Jordan elimination with partial
    /// pivoting. Returns `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Matrix> {
        let mut a = self.0;
        let mut inv = Matrix4::identity();

        for col in 0..4 {
            let pivot_row = (col..4)
                .max_by(|&r1, &r2| a[(r1, col)].abs().partial_cmp(&a[(r2, col)].abs()).unwrap())
                .unwrap();

            if a[(pivot_row, col)].abs() < f32::EPSILON {
                return None;
            }

            if pivot_row != col {
                a.swap_rows(pivot_row, col);
                inv.swap_rows(pivot_row, col);
            }

            let pivot = a[(col, col)];
            for j in 0..4 {
                a[(col, j)] /= pivot;
                inv[(col, j)] /= pivot;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = a[(row, col)];
                for j in 0..4 {
                    a[(row, j)] -= factor * a[(col, j)];
                    inv[(row, j)] -= factor * inv[(col, j)];
                }
            }
        }

        Some(Matrix(inv))
    }
}

impl std::ops::Mul for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_moves_a_point() {
        let m = Matrix::translation(Vector3::new(1.0, 2.0, 3.0));
        let p = m.transform_point(Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(p, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn transform_vector_ignores_translation() {
        let m = Matrix::translation(Vector3::new(5.0, 5.0, 5.0));
        let v = m.transform_vector(Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(v, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_y_quarter_turn_maps_forward_to_right() {
        let m = Matrix::rotation_y(std::f32::consts::FRAC_PI_2);
        let v = m.transform_vector(Vector3::new(0.0, 0.0, 1.0));
        assert!((v.x - 1.0).abs() < 1e-5);
        assert!(v.z.abs() < 1e-5);
    }

    #[test]
    fn inverse_rigid_round_trips_an_onb() {
        let right = Vector4::new(0.0, 0.0, 1.0, 0.0);
        let up = Vector4::new(0.0, 1.0, 0.0, 0.0);
        let forward = Vector4::new(-1.0, 0.0, 0.0, 0.0);
        let origin = Vector4::new(3.0, 1.0, -2.0, 1.0);

        let inv_view = Matrix::from_basis(right, up, forward, origin);
        let view = inv_view.inverse_rigid();

        let world_point = Vector3::new(3.0, 1.0, -2.0);
        let cam_space = view.transform_point(world_point);
        assert!(cam_space.norm() < 1e-5);

        let round_trip = view.transform_point(inv_view.transform_point(Vector3::new(1.0, 2.0, 3.0)));
        let identity_check = inv_view.transform_point(view.transform_point(Vector3::new(1.0, 2.0, 3.0)));
        assert!((round_trip - Vector3::new(1.0, 2.0, 3.0)).norm() < 1e-4);
        assert!((identity_check - Vector3::new(1.0, 2.0, 3.0)).norm() < 1e-4);
    }

    #[test]
    fn general_inverse_undoes_scale_and_translation() {
        let m = Matrix::scale(Vector3::new(2.0, 4.0, 0.5)) * Matrix::translation(Vector3::new(1.0, 0.0, -1.0));
        let inv = m.inverse().expect("invertible");
        let p = Vector3::new(3.0, -2.0, 5.0);
        let round_trip = inv.transform_point(m.transform_point(p));
        assert!((round_trip - p).norm() < 1e-4);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Matrix::scale(Vector3::new(0.0, 1.0, 1.0));
        assert!(m.inverse().is_none());
    }

    #[test]
    fn perspective_fov_lh_maps_near_plane_to_zero_depth() {
        let proj = Matrix::perspective_fov_lh(90.0, 1.0, 1.0, 100.0);
        let clip = proj.transform_point4(Vector4::new(0.0, 0.0, 1.0, 1.0));
        assert!((clip.z / clip.w).abs() < 1e-4);
    }
}
