//! Top-level orchestration: owns the framebuffer, the four bound textures,
//! the camera, the mesh, and the render/color-mode + toggle state. Mirrors
//! the original `Renderer` class's responsibilities, with texture lifetime
//! handled by ordinary RAII instead of manual `delete`.

use std::path::Path;

use crate::camera::{Camera, InputState};
use crate::config::RendererConfig;
use crate::error::RendererError;
use crate::framebuffer::Framebuffer;
use crate::math::Matrix;
use crate::mesh::Mesh;
use crate::rasterizer::{rasterize_mesh, RasterSettings};
use crate::shading::{ColorMode, RenderMode};
use crate::texture::Texture;
use crate::vertex_processor::transform_vertices;

#[derive(Debug)]
pub struct Renderer {
    config: RendererConfig,
    framebuffer: Framebuffer,
    camera: Camera,
    mesh: Mesh,

    diffuse_map: Texture,
    normal_map: Texture,
    specular_map: Texture,
    gloss_map: Texture,

    render_mode: RenderMode,
    color_mode: ColorMode,
    normal_map_enabled: bool,
    rotation_enabled: bool,
}

impl Renderer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: RendererConfig,
        window_width: usize,
        window_height: usize,
        diffuse_path: impl AsRef<Path>,
        normal_path: impl AsRef<Path>,
        specular_path: impl AsRef<Path>,
        gloss_path: impl AsRef<Path>,
        mesh: Mesh,
    ) -> Result<Renderer, RendererError> {
        let aspect = window_width as f32 / window_height as f32;
        let camera = Camera::new(&config, aspect);
        let framebuffer = Framebuffer::new(window_width, window_height, [25, 25, 25]);

        let diffuse_map = Texture::load_from_file(diffuse_path)?;
        let normal_map = Texture::load_from_file(normal_path)?;
        let specular_map = Texture::load_from_file(specular_path)?;
        let gloss_map = Texture::load_from_file(gloss_path)?;

        let normal_map_enabled = config.normal_map_enabled_default;
        let rotation_enabled = config.rotation_enabled_default;

        Ok(Renderer {
            config,
            framebuffer,
            camera,
            mesh,
            diffuse_map,
            normal_map,
            specular_map,
            gloss_map,
            render_mode: RenderMode::Texture,
            color_mode: ColorMode::ObservedArea,
            normal_map_enabled,
            rotation_enabled,
        })
    }

    pub fn update(&mut self, input: &InputState, delta_time: f32) {
        self.camera.update(input, delta_time);

        if self.rotation_enabled {
            let spin = Matrix::rotation_y(self.config.mesh_rotation_degrees_per_second.to_radians() * delta_time);
            self.mesh.world_matrix = self.mesh.world_matrix * spin;
        }
    }

    pub fn render(&mut self) -> &[u32] {
        self.framebuffer.clear();
        transform_vertices(&mut self.mesh, &self.camera);

        let settings = RasterSettings {
            render_mode: self.render_mode,
            color_mode: self.color_mode,
            normal_map_enabled: self.normal_map_enabled,
            depth_visualization_near: self.config.depth_visualization_near,
            diffuse_map: &self.diffuse_map,
            normal_map: &self.normal_map,
            specular_map: &self.specular_map,
            gloss_map: &self.gloss_map,
        };

        rasterize_mesh(&self.mesh, &mut self.framebuffer, &settings);
        self.framebuffer.color_buffer()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    pub fn toggle_render_mode(&mut self) {
        self.render_mode = self.render_mode.cycle();
        log::info!("render mode -> {:?}", self.render_mode);
    }

    pub fn toggle_color_mode(&mut self) {
        self.color_mode = self.color_mode.cycle();
        log::info!("color mode -> {:?}", self.color_mode);
    }

    pub fn toggle_normal_map(&mut self) {
        self.normal_map_enabled = !self.normal_map_enabled;
        log::info!("normal map enabled -> {}", self.normal_map_enabled);
    }

    pub fn toggle_rotation(&mut self) {
        self.rotation_enabled = !self.rotation_enabled;
        log::info!("rotation enabled -> {}", self.rotation_enabled);
    }

    pub fn save_color_buffer_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RendererError> {
        let path = path.as_ref();
        let width = self.framebuffer.width() as u32;
        let height = self.framebuffer.height() as u32;

        let mut buffer = image::RgbImage::new(width, height);
        for (i, pixel) in self.framebuffer.color_buffer().iter().enumerate() {
            let r = ((pixel >> 16) & 0xff) as u8;
            let g = ((pixel >> 8) & 0xff) as u8;
            let b = (pixel & 0xff) as u8;
            buffer.put_pixel(i as u32 % width, i as u32 / width, image::Rgb([r, g, b]));
        }

        buffer
            .save(path)
            .map_err(|source| RendererError::AssetDecodeFailure { path: path.to_path_buf(), source })
    }
}
