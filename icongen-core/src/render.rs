//! The icon renderer: rasterizes the logo for each size table entry and writes
//! the PNG into the project tree. Strictly sequential; the first failure aborts
//! the run and files already written are left in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::logo;
use crate::raster::Rasterizer;
use crate::targets::{Platform, Target};

/// A bitmap that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub target: Target,
    pub bytes: usize,
}

pub struct IconRenderer {
    rasterizer: Box<dyn Rasterizer>,
    svg: &'static [u8],
    root: PathBuf,
}

impl IconRenderer {
    /// Fails with the rasterizer's own error if its startup check does not pass.
    pub fn new<P: Into<PathBuf>>(rasterizer: Box<dyn Rasterizer>, root: P) -> Result<Self> {
        rasterizer.check()?;
        Ok(Self { rasterizer, svg: logo::encode(), root: root.into() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn render_and_save(&self, target: &Target) -> Result<Written> {
        let png = self.rasterizer.rasterize(self.svg, target.px)?;
        if let Some(dir) = target.path.parent() {
            fs::create_dir_all(dir).map_err(|source| RenderError::Io { path: dir.to_path_buf(), source })?;
        }
        fs::write(&target.path, &png).map_err(|source| RenderError::Io { path: target.path.clone(), source })?;
        log::debug!("wrote {} ({} bytes)", target.path.display(), png.len());
        Ok(Written { target: target.clone(), bytes: png.len() })
    }

    pub fn render_platform<F>(&self, platform: Platform, mut on_written: F) -> Result<Vec<Written>>
    where
        F: FnMut(&Written),
    {
        let mut out = Vec::with_capacity(platform.sizes().len());
        for target in platform.targets(&self.root) {
            let w = self.render_and_save(&target)?;
            on_written(&w);
            out.push(w);
        }
        Ok(out)
    }

    /// Android first, then iOS.
    pub fn render_all<F>(&self, mut on_written: F) -> Result<Vec<Written>>
    where
        F: FnMut(&Written),
    {
        let mut out = Vec::new();
        for platform in Platform::ALL {
            out.extend(self.render_platform(platform, &mut on_written)?);
        }
        Ok(out)
    }
}
