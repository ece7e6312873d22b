//! Triangle rasterizer: topology expansion, trivial reject, screen mapping,
//! edge functions, the bounding-box scan, perspective-correct barycentric
//! interpolation, depth test, and pixel-shader dispatch.

use crate::framebuffer::Framebuffer;
use crate::math::{cross2d, Vector2, Vector3};
use crate::mesh::{Mesh, VertexOut};
use crate::shading::{shade_depth, shade_pixel, ColorMode, RenderMode, ShadingInput};
use crate::texture::Texture;

/// Triangles whose screen-space area is smaller than this are skipped
/// rather than risk a divide-by-zero in the barycentric weights.
const DEGENERATE_AREA_EPSILON: f32 = 1e-6;

fn position_outside_frustum(position: crate::math::Vector4) -> bool {
    position.x < -1.0 || position.x > 1.0 || position.y < -1.0 || position.y > 1.0
}

fn to_screen_space(ndc: Vector2, width: usize, height: usize) -> Vector2 {
    Vector2::new((ndc.x + 1.0) * 0.5 * width as f32, (1.0 - ndc.y) * 0.5 * height as f32)
}

pub struct RasterSettings<'a> {
    pub render_mode: RenderMode,
    pub color_mode: ColorMode,
    pub normal_map_enabled: bool,
    pub depth_visualization_near: f32,
    pub diffuse_map: &'a Texture,
    pub normal_map: &'a Texture,
    pub specular_map: &'a Texture,
    pub gloss_map: &'a Texture,
}

/// Rasterizes every triangle of `mesh` (its `vertices_out` must already be
/// populated by the vertex processor) into `framebuffer`.
pub fn rasterize_mesh(mesh: &Mesh, framebuffer: &mut Framebuffer, settings: &RasterSettings) {
    let width = framebuffer.width();
    let height = framebuffer.height();

    let screen_vertices: Vec<Vector2> = mesh
        .vertices_out
        .iter()
        .map(|v| to_screen_space(Vector2::new(v.position.x, v.position.y), width, height))
        .collect();

    for (i0, i1, i2) in mesh.triangle_index_triples() {
        let a = mesh.indices[i0] as usize;
        let b = mesh.indices[i1] as usize;
        let c = mesh.indices[i2] as usize;

        rasterize_triangle(
            &mesh.vertices_out[a],
            &mesh.vertices_out[b],
            &mesh.vertices_out[c],
            screen_vertices[a],
            screen_vertices[b],
            screen_vertices[c],
            framebuffer,
            settings,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn rasterize_triangle(
    va: &VertexOut,
    vb: &VertexOut,
    vc: &VertexOut,
    s0: Vector2,
    s1: Vector2,
    s2: Vector2,
    framebuffer: &mut Framebuffer,
    settings: &RasterSettings,
) {
    if position_outside_frustum(va.position) || position_outside_frustum(vb.position) || position_outside_frustum(vc.position) {
        return;
    }

    let edge0 = s1 - s0;
    let edge1 = s2 - s1;
    let edge2 = s0 - s2;
    let area = cross2d(edge0, edge1);

    if area.abs() < DEGENERATE_AREA_EPSILON {
        return;
    }

    let width = framebuffer.width();
    let height = framebuffer.height();

    let min_bb = Vector2::new(s0.x.min(s1.x).min(s2.x), s0.y.min(s1.y).min(s2.y));
    let max_bb = Vector2::new(s0.x.max(s1.x).max(s2.x), s0.y.max(s1.y).max(s2.y));

    let start_x = ((min_bb.x as i64) - 1).clamp(0, width as i64) as usize;
    let start_y = ((min_bb.y as i64) - 1).clamp(0, height as i64) as usize;
    let end_x = ((max_bb.x as i64) + 1).clamp(0, width as i64) as usize;
    let end_y = ((max_bb.y as i64) + 1).clamp(0, height as i64) as usize;

    for py in start_y..end_y {
        for px in start_x..end_x {
            let pixel = Vector2::new(px as f32, py as f32);

            let edge0_cross = cross2d(edge0, pixel - s0);
            let edge1_cross = cross2d(edge1, pixel - s1);
            let edge2_cross = cross2d(edge2, pixel - s2);

            if !(edge0_cross > 0.0 && edge1_cross > 0.0 && edge2_cross > 0.0) {
                continue;
            }

            let w0 = edge1_cross / area;
            let w1 = edge2_cross / area;
            let w2 = edge0_cross / area;

            let interpolated_z = 1.0 / (w0 / va.position.z + w1 / vb.position.z + w2 / vc.position.z);

            if !(0.0..=1.0).contains(&interpolated_z) {
                continue;
            }

            let index = framebuffer.index_of(px, py);
            if interpolated_z >= framebuffer.depth_at(index) {
                continue;
            }

            let color = match settings.render_mode {
                RenderMode::Depth => shade_depth(interpolated_z, settings.depth_visualization_near),
                RenderMode::Texture => {
                    let w_interp = 1.0 / (w0 / va.position.w + w1 / vb.position.w + w2 / vc.position.w);

                    let uv = perspective_interpolate_uv(va, vb, vc, w0, w1, w2, w_interp);
                    let normal = perspective_interpolate_vec3(va.normal, vb.normal, vc.normal, va.position.w, vb.position.w, vc.position.w, w0, w1, w2, w_interp)
                        .normalize();
                    let tangent = perspective_interpolate_vec3(va.tangent, vb.tangent, vc.tangent, va.position.w, vb.position.w, vc.position.w, w0, w1, w2, w_interp)
                        .normalize();
                    let view_direction = perspective_interpolate_vec3(
                        va.view_direction,
                        vb.view_direction,
                        vc.view_direction,
                        va.position.w,
                        vb.position.w,
                        vc.position.w,
                        w0,
                        w1,
                        w2,
                        w_interp,
                    )
                    .normalize();

                    let input = ShadingInput {
                        uv,
                        normal,
                        tangent,
                        view_direction,
                        color_mode: settings.color_mode,
                        normal_map_enabled: settings.normal_map_enabled,
                        diffuse_map: settings.diffuse_map,
                        normal_map: settings.normal_map,
                        specular_map: settings.specular_map,
                        gloss_map: settings.gloss_map,
                    };
                    shade_pixel(&input)
                }
            };

            framebuffer.write(index, interpolated_z, color.to_rgb8());
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn perspective_interpolate_vec3(
    a: Vector3,
    b: Vector3,
    c: Vector3,
    wa: f32,
    wb: f32,
    wc: f32,
    weight0: f32,
    weight1: f32,
    weight2: f32,
    w_interp: f32,
) -> Vector3 {
    ((a / wa) * weight0 + (b / wb) * weight1 + (c / wc) * weight2) * w_interp
}

#[allow(clippy::too_many_arguments)]
fn perspective_interpolate_uv(va: &VertexOut, vb: &VertexOut, vc: &VertexOut, w0: f32, w1: f32, w2: f32, w_interp: f32) -> Vector2 {
    let a = va.uv / va.position.w * w0;
    let b = vb.uv / vb.position.w * w1;
    let c = vc.uv / vc.position.w * w2;
    (a + b + c) * w_interp
}
