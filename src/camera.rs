//! Camera: origin/orientation/FOV/aspect, and the view / inverse-view /
//! projection matrices derived from them. Consumes per-frame input deltas
//! rather than polling a platform keyboard/mouse API itself.

use crate::config::RendererConfig;
use crate::math::{Matrix, Vector3, Vector4, TO_RADIANS};

/// Mutually-exclusive mouse button state for a single frame, matching the
/// original "switch on the pressed-button mask" dispatch: at most one of
/// these is acted on per `update` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseButtons {
    None,
    Left,
    Right,
    /// The "extra" / back-side mouse button (SDL's `X2`).
    X2,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub mouse_buttons: Option<MouseButtons>,
}

#[derive(Debug)]
pub struct Camera {
    pub origin: Vector3,
    pub forward: Vector3,
    pub up: Vector3,
    pub right: Vector3,

    pub total_pitch_degrees: f32,
    pub total_yaw_degrees: f32,

    pub fov_degrees: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub move_speed: f32,
    pub mouse_move_speed: f32,
    pub rotation_speed_degrees: f32,

    pub view_matrix: Matrix,
    pub inv_view_matrix: Matrix,
    pub projection_matrix: Matrix,
}

impl Camera {
    pub fn new(config: &RendererConfig, aspect: f32) -> Camera {
        let mut camera = Camera {
            origin: config.camera_origin,
            forward: Vector3::new(0.0, 0.0, 1.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            right: Vector3::new(1.0, 0.0, 0.0),
            total_pitch_degrees: 0.0,
            total_yaw_degrees: 0.0,
            fov_degrees: config.fov_degrees,
            fov: (config.fov_degrees * TO_RADIANS / 2.0).tan(),
            aspect,
            near: config.near,
            far: config.far,
            move_speed: config.move_speed,
            mouse_move_speed: config.mouse_move_speed,
            rotation_speed_degrees: config.rotation_speed_degrees,
            view_matrix: Matrix::identity(),
            inv_view_matrix: Matrix::identity(),
            projection_matrix: Matrix::identity(),
        };
        camera.calculate_view_matrix();
        camera.calculate_projection_matrix();
        camera
    }

    pub fn calculate_view_matrix(&mut self) {
        self.right = Vector3::new(0.0, 1.0, 0.0).cross(&self.forward).normalize();
        self.up = self.forward.cross(&self.right);

        self.inv_view_matrix = Matrix::from_basis(
            Vector4::new(self.right.x, self.right.y, self.right.z, 0.0),
            Vector4::new(self.up.x, self.up.y, self.up.z, 0.0),
            Vector4::new(self.forward.x, self.forward.y, self.forward.z, 0.0),
            Vector4::new(self.origin.x, self.origin.y, self.origin.z, 1.0),
        );
        self.view_matrix = self.inv_view_matrix.inverse_rigid();
    }

    pub fn calculate_projection_matrix(&mut self) {
        self.projection_matrix = Matrix::perspective_fov_lh(self.fov_degrees, self.aspect, self.near, self.far);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.calculate_projection_matrix();
    }

    pub fn update(&mut self, input: &InputState, delta_time: f32) {
        if input.forward {
            self.origin += self.forward * self.move_speed * delta_time;
        }
        if input.back {
            self.origin -= self.forward * self.move_speed * delta_time;
        }
        if input.right {
            self.origin += self.right * self.move_speed * delta_time;
        }
        if input.left {
            self.origin -= self.right * self.move_speed * delta_time;
        }

        match input.mouse_buttons {
            Some(MouseButtons::Left) => {
                self.origin -= self.forward * (input.mouse_dy * self.mouse_move_speed * delta_time);
                self.total_yaw_degrees += input.mouse_dx * self.rotation_speed_degrees;
            }
            Some(MouseButtons::Right) => {
                self.total_yaw_degrees += input.mouse_dx * self.rotation_speed_degrees;
                self.total_pitch_degrees -= input.mouse_dy * self.rotation_speed_degrees;
            }
            Some(MouseButtons::X2) => {
                self.origin += self.up * (input.mouse_dy * self.mouse_move_speed * delta_time);
            }
            Some(MouseButtons::None) | None => {}
        }

        let rotation = Matrix::rotation(
            self.total_pitch_degrees * TO_RADIANS,
            self.total_yaw_degrees * TO_RADIANS,
            0.0,
        );
        self.forward = rotation.transform_vector(Vector3::new(0.0, 0.0, 1.0));

        self.calculate_view_matrix();
        self.calculate_projection_matrix();
    }
}
