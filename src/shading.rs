//! Pixel shader: render-mode/color-mode dispatch, Lambert/Phong shading,
//! and tangent-space normal mapping.

use crate::math::{ColorRgb, Vector2, Vector3};
use crate::texture::Texture;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Texture,
    Depth,
}

impl RenderMode {
    pub fn cycle(self) -> RenderMode {
        match self {
            RenderMode::Texture => RenderMode::Depth,
            RenderMode::Depth => RenderMode::Texture,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    ObservedArea,
    Diffuse,
    Specular,
    FinalColor,
}

impl ColorMode {
    pub fn cycle(self) -> ColorMode {
        match self {
            ColorMode::ObservedArea => ColorMode::Diffuse,
            ColorMode::Diffuse => ColorMode::Specular,
            ColorMode::Specular => ColorMode::FinalColor,
            ColorMode::FinalColor => ColorMode::ObservedArea,
        }
    }
}

const LIGHT_INTENSITY: f32 = 7.0;
const GLOSS_BASE: f32 = 25.0;

fn light_direction() -> Vector3 {
    Vector3::new(0.577, -0.577, 0.577).normalize()
}

/// Inputs to the texture-mode pixel shader, already perspective-correctly
/// interpolated (uv, normal, tangent, view_direction re-normalized).
pub struct ShadingInput<'a> {
    pub uv: Vector2,
    pub normal: Vector3,
    pub tangent: Vector3,
    pub view_direction: Vector3,
    pub color_mode: ColorMode,
    pub normal_map_enabled: bool,
    pub diffuse_map: &'a Texture,
    pub normal_map: &'a Texture,
    pub specular_map: &'a Texture,
    pub gloss_map: &'a Texture,
}

/// Evaluates the selected `ColorMode` formula for `RenderMode::Texture`.
pub fn shade_pixel(input: &ShadingInput) -> ColorRgb {
    let normal = if input.normal_map_enabled {
        sample_normal_map(input.normal_map, input.uv, input.normal, input.tangent)
    } else {
        input.normal
    };

    let light = light_direction();
    let observed_area = (normal.dot(&-light)).max(0.0);

    let mut color = match input.color_mode {
        ColorMode::ObservedArea => ColorRgb::gray(observed_area),
        ColorMode::Diffuse => {
            let diffuse = input.diffuse_map.sample(input.uv);
            diffuse * (LIGHT_INTENSITY / std::f32::consts::PI) * observed_area
        }
        ColorMode::Specular => {
            let specular = input.specular_map.sample(input.uv);
            let gloss = input.gloss_map.sample(input.uv).r * GLOSS_BASE;
            specular * phong(1.0, gloss, -light, input.view_direction, normal)
        }
        ColorMode::FinalColor => {
            let diffuse = input.diffuse_map.sample(input.uv);
            let specular = input.specular_map.sample(input.uv);
            let gloss = input.gloss_map.sample(input.uv).r * GLOSS_BASE;
            let specular_term = specular * phong(1.0, gloss, -light, input.view_direction, normal);
            (diffuse * (LIGHT_INTENSITY / std::f32::consts::PI) + specular_term) * observed_area
        }
    };

    color.max_to_one();
    color
}

/// Visualizes an interpolated `[0,1]` depth as grayscale, remapping
/// `[near, 1.0]` to `[0, 1]` so near-plane detail isn't crushed black.
pub fn shade_depth(interpolated_z: f32, near_vis: f32) -> ColorRgb {
    let remapped = remap(interpolated_z, near_vis, 1.0);
    ColorRgb::gray(remapped)
}

fn remap(value: f32, from_low: f32, from_high: f32) -> f32 {
    ((value - from_low) / (from_high - from_low)).clamp(0.0, 1.0)
}

/// `ks * max(0, dot(R, V))^exp`, `R = reflect(light, N) = light - 2*dot(N,light)*N`.
fn phong(ks: f32, exponent: f32, light: Vector3, view: Vector3, normal: Vector3) -> ColorRgb {
    let reflected = light - normal * (2.0 * normal.dot(&light));
    let cos_angle = reflected.dot(&view).max(0.0);
    ColorRgb::gray(ks * cos_angle.powf(exponent))
}

fn sample_normal_map(normal_map: &Texture, uv: Vector2, normal: Vector3, tangent: Vector3) -> Vector3 {
    let binormal = normal.cross(&tangent);
    let sample = normal_map.sample(uv);
    let tangent_space_normal = Vector3::new(2.0 * sample.r - 1.0, 2.0 * sample.g - 1.0, 2.0 * sample.b - 1.0);

    let world_normal = tangent * tangent_space_normal.x + binormal * tangent_space_normal.y + normal * tangent_space_normal.z;
    world_normal.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;

    fn flat_texture(rgb: [u8; 4]) -> Texture {
        Texture::from_rgba(1, 1, vec![rgb])
    }

    #[test]
    fn observed_area_formula_is_gray_dot_product() {
        let normal = Vector3::new(0.0, 0.0, -1.0);
        let expected = normal.dot(&-light_direction()).max(0.0);
        let input = ShadingInput {
            uv: Vector2::new(0.5, 0.5),
            normal,
            tangent: Vector3::new(1.0, 0.0, 0.0),
            view_direction: Vector3::new(0.0, 0.0, -1.0),
            color_mode: ColorMode::ObservedArea,
            normal_map_enabled: false,
            diffuse_map: &flat_texture([255, 0, 0, 255]),
            normal_map: &flat_texture([128, 128, 255, 255]),
            specular_map: &flat_texture([255, 255, 255, 255]),
            gloss_map: &flat_texture([255, 255, 255, 255]),
        };
        let color = shade_pixel(&input);
        assert!((color.r - expected).abs() < 1e-4);
        assert_eq!(color.r, color.g);
        assert_eq!(color.g, color.b);
    }

    #[test]
    fn constant_normal_map_sample_of_flat_up_leaves_shading_unchanged() {
        // Spec scenario 5: a normal map sampling to n_ts=(0,0,1) must be a
        // no-op once re-expressed in world space when N=(0,0,1) and T=(1,0,0).
        let normal = Vector3::new(0.0, 0.0, 1.0);
        let tangent = Vector3::new(1.0, 0.0, 0.0);
        let flat_normal_map = flat_texture([128, 128, 255, 255]);

        let diffuse_map = flat_texture([200, 200, 200, 255]);
        let specular_map = flat_texture([255, 255, 255, 255]);
        let gloss_map = flat_texture([255, 255, 255, 255]);

        let make_input = |normal_map_enabled: bool| ShadingInput {
            uv: Vector2::new(0.5, 0.5),
            normal,
            tangent,
            view_direction: Vector3::new(0.0, 0.0, -1.0),
            color_mode: ColorMode::ObservedArea,
            normal_map_enabled,
            diffuse_map: &diffuse_map,
            normal_map: &flat_normal_map,
            specular_map: &specular_map,
            gloss_map: &gloss_map,
        };

        let a = shade_pixel(&make_input(false));
        let b = shade_pixel(&make_input(true));
        assert!((a.r - b.r).abs() < 1e-5);
    }

    #[test]
    fn depth_visualization_remaps_near_to_zero_and_far_to_one() {
        let near = shade_depth(0.985, 0.985);
        let far = shade_depth(1.0, 0.985);
        assert_eq!(near.r, 0.0);
        assert_eq!(far.r, 1.0);
    }

    #[test]
    fn render_mode_and_color_mode_cycle_back_to_start() {
        let mut rm = RenderMode::Texture;
        rm = rm.cycle();
        rm = rm.cycle();
        assert_eq!(rm, RenderMode::Texture);

        let mut cm = ColorMode::ObservedArea;
        for _ in 0..4 {
            cm = cm.cycle();
        }
        assert_eq!(cm, ColorMode::ObservedArea);
    }
}
