//! CPU software rasterizer: mesh + camera + textures -> shaded color image.
//!
//! The library is windowing-agnostic; `main.rs` owns the `minifb` window,
//! input polling, and the frame loop, and drives this crate's `Renderer`.

pub mod camera;
pub mod config;
pub mod error;
pub mod framebuffer;
pub mod math;
pub mod mesh;
pub mod obj_loader;
pub mod rasterizer;
pub mod renderer;
pub mod shading;
pub mod texture;
pub mod timer;
pub mod vertex_processor;

pub use camera::{Camera, InputState, MouseButtons};
pub use config::RendererConfig;
pub use error::RendererError;
pub use mesh::{Mesh, PrimitiveTopology, Vertex};
pub use renderer::Renderer;
pub use shading::{ColorMode, RenderMode};
