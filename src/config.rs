//! Renderer configuration. Passed directly as a struct rather than loaded
//! from a file or environment: none of the close examples in this niche
//! (single-binary CPU rasterizers) reach for a config-file crate, they
//! construct their settings as struct literals at startup, so this keeps
//! that convention rather than inventing one.

use crate::math::Vector3;

#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,

    pub move_speed: f32,
    pub mouse_move_speed: f32,
    pub rotation_speed_degrees: f32,

    pub mesh_rotation_degrees_per_second: f32,

    /// Near-plane remap bound used by `RenderMode::Depth` visualization;
    /// the far bound is implicitly 1.0 (post-divide NDC z never exceeds it).
    pub depth_visualization_near: f32,

    pub normal_map_enabled_default: bool,
    pub rotation_enabled_default: bool,

    pub camera_origin: Vector3,
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            move_speed: 7.0,
            mouse_move_speed: 2.0,
            rotation_speed_degrees: 5.0,
            mesh_rotation_degrees_per_second: 50.0,
            depth_visualization_near: 0.985,
            normal_map_enabled_default: true,
            rotation_enabled_default: true,
            camera_origin: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}
