//! Fatal startup error kinds. The per-frame rasterizer core has no
//! recoverable error path (spec: malformed indices / degenerate triangles
//! are programmer preconditions); everything here is produced once, before
//! the first frame, by a collaborator (texture loader, OBJ loader, window
//! creation).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("asset not found: {path}")]
    AssetNotFound { path: PathBuf },

    #[error("failed to decode asset {path}")]
    AssetDecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to parse OBJ mesh {path}: {message}")]
    MeshParseFailure { path: PathBuf, message: String },

    #[error("failed to create window: {0}")]
    WindowCreateFailure(String),

    #[error("framebuffer unavailable")]
    FramebufferUnavailable,
}
