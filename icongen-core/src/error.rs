use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// No rasterizer backend is available in this build.
    #[error("rasterizer unavailable: {reason}")]
    MissingCapability { reason: String },
    #[error("failed to parse vector description: {0}")]
    Parse(String),
    #[error("invalid pixel size {0}, must be positive")]
    InvalidSize(u32),
    #[error("failed to allocate {px}x{px} pixmap")]
    Allocate { px: u32 },
    #[error("failed to encode PNG: {0}")]
    Encode(String),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
