use std::env;

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use renderer::camera::{InputState, MouseButtons};
use renderer::config::RendererConfig;
use renderer::mesh::{Mesh, PrimitiveTopology, Vertex};
use renderer::timer::Timer;
use renderer::{math::Vector2, math::Vector3, Renderer};

const WIN_WIDTH: usize = 800;
const WIN_HEIGHT: usize = 600;
const FPS: usize = 60;

fn default_triangle_mesh() -> Mesh {
    let v0 = Vertex::new(Vector3::new(0.0, 2.0, 2.0), Vector2::new(0.5, 0.0), Vector3::new(0.0, 0.0, -1.0), Vector3::new(1.0, 0.0, 0.0));
    let v1 = Vertex::new(Vector3::new(1.5, -1.0, 2.0), Vector2::new(1.0, 1.0), Vector3::new(0.0, 0.0, -1.0), Vector3::new(1.0, 0.0, 0.0));
    let v2 = Vertex::new(Vector3::new(-1.5, -1.0, 2.0), Vector2::new(0.0, 1.0), Vector3::new(0.0, 0.0, -1.0), Vector3::new(1.0, 0.0, 0.0));
    Mesh::new(vec![v0, v1, v2], vec![0, 1, 2], PrimitiveTopology::TriangleList)
}

fn load_mesh_from_args(args: &[String]) -> Mesh {
    match args.get(1) {
        Some(path) => match Mesh::from_obj(path) {
            Ok(mesh) => {
                log::info!("loaded {} with {} vertices", path, mesh.vertices.len());
                mesh
            }
            Err(err) => {
                log::warn!("failed to load {}: {}, falling back to the default mesh", path, err);
                default_triangle_mesh()
            }
        },
        None => {
            log::info!("no mesh path given, loading the default mesh");
            default_triangle_mesh()
        }
    }
}

fn poll_input(window: &Window, previous_mouse: (f32, f32)) -> (InputState, (f32, f32)) {
    let mouse_pos = window.get_mouse_pos(MouseMode::Pass).unwrap_or(previous_mouse);

    let mouse_buttons = if window.get_mouse_down(MouseButton::Left) {
        Some(MouseButtons::Left)
    } else if window.get_mouse_down(MouseButton::Right) {
        Some(MouseButtons::Right)
    } else if window.get_mouse_down(MouseButton::Middle) {
        Some(MouseButtons::X2)
    } else {
        None
    };

    let input = InputState {
        forward: window.is_key_down(Key::W),
        back: window.is_key_down(Key::S),
        left: window.is_key_down(Key::A),
        right: window.is_key_down(Key::D),
        mouse_dx: mouse_pos.0 - previous_mouse.0,
        mouse_dy: mouse_pos.1 - previous_mouse.1,
        mouse_buttons,
    };

    (input, mouse_pos)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mesh = load_mesh_from_args(&args);

    let mut window = Window::new(
        "rustaster - F4 render mode, F5 color mode, F6 normal map, F7 rotation, Esc quit",
        WIN_WIDTH,
        WIN_HEIGHT,
        WindowOptions::default(),
    )
    .unwrap_or_else(|e| panic!("failed to create window: {}", e));
    window.set_target_fps(FPS);

    let mut renderer = Renderer::new(
        RendererConfig::default(),
        WIN_WIDTH,
        WIN_HEIGHT,
        "resources/diffuse.png",
        "resources/normal.png",
        "resources/specular.png",
        "resources/gloss.png",
        mesh,
    )
    .unwrap_or_else(|e| panic!("failed to initialize renderer: {}", e));

    let mut timer = Timer::new();
    let mut previous_mouse = window.get_mouse_pos(MouseMode::Pass).unwrap_or((0.0, 0.0));
    let mut previous_f4 = false;
    let mut previous_f5 = false;
    let mut previous_f6 = false;
    let mut previous_f7 = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let delta_time = timer.tick();
        let (input, mouse_pos) = poll_input(&window, previous_mouse);
        previous_mouse = mouse_pos;

        let f4 = window.is_key_down(Key::F4);
        if f4 && !previous_f4 {
            renderer.toggle_render_mode();
        }
        previous_f4 = f4;

        let f5 = window.is_key_down(Key::F5);
        if f5 && !previous_f5 {
            renderer.toggle_color_mode();
        }
        previous_f5 = f5;

        let f6 = window.is_key_down(Key::F6);
        if f6 && !previous_f6 {
            renderer.toggle_normal_map();
        }
        previous_f6 = f6;

        let f7 = window.is_key_down(Key::F7);
        if f7 && !previous_f7 {
            renderer.toggle_rotation();
        }
        previous_f7 = f7;

        renderer.update(&input, delta_time);
        let buffer = renderer.render();

        window
            .update_with_buffer(buffer, WIN_WIDTH, WIN_HEIGHT)
            .unwrap_or_else(|e| log::error!("failed to blit frame: {}", e));
    }
}
