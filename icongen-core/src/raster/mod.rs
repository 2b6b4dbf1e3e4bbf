//! Rasterization capability: turns SVG bytes into an encoded square PNG.

use crate::error::{RenderError, Result};

#[cfg(feature = "resvg")]
mod svg_backend;

#[cfg(feature = "resvg")]
pub use svg_backend::ResvgRasterizer;

pub trait Rasterizer {
    fn name(&self) -> &'static str;

    /// Startup probe. An error here means nothing may be rendered.
    fn check(&self) -> Result<()>;

    /// Encoded PNG bytes of exactly `px` x `px` pixels.
    fn rasterize(&self, svg: &[u8], px: u32) -> Result<Vec<u8>>;
}

/// Acquire the rasterizer compiled into this build. Its `check()` runs when
/// it is handed to an `IconRenderer`.
pub fn probe() -> Result<Box<dyn Rasterizer>> {
    let rasterizer = builtin()?;
    log::info!("using {} rasterizer", rasterizer.name());
    Ok(rasterizer)
}

#[cfg(feature = "resvg")]
fn builtin() -> Result<Box<dyn Rasterizer>> {
    Ok(Box::new(ResvgRasterizer::new()))
}

#[cfg(not(feature = "resvg"))]
fn builtin() -> Result<Box<dyn Rasterizer>> {
    Err(RenderError::MissingCapability {
        reason: "built without an SVG backend; reinstall with \
                 `cargo install icongen-cli --features resvg` and run again"
            .into(),
    })
}

#[cfg(any(test, feature = "resvg"))]
pub(crate) fn ensure_size(px: u32) -> Result<()> {
    if px == 0 {
        return Err(RenderError::InvalidSize(px));
    }
    Ok(())
}


#[cfg(all(test, not(feature = "resvg")))]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_missing_backend() {
        match probe() {
            Err(RenderError::MissingCapability { reason }) => assert!(reason.contains("resvg")),
            other => panic!("expected MissingCapability, got {:?}", other.map(|r| r.name())),
        }
    }
}
