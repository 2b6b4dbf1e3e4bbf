use resvg::{tiny_skia, usvg};

use super::{ensure_size, Rasterizer};
use crate::error::{RenderError, Result};
use crate::logo;

/// SVG rendering through resvg/tiny-skia, scaled to fill the square.
#[derive(Debug, Default)]
pub struct ResvgRasterizer {
    _priv: (),
}

impl ResvgRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse(&self, svg: &[u8]) -> Result<usvg::Tree> {
        let opt = usvg::Options::default();
        usvg::Tree::from_data(svg, &opt).map_err(|e| RenderError::Parse(e.to_string()))
    }
}

impl Rasterizer for ResvgRasterizer {
    fn name(&self) -> &'static str {
        "resvg"
    }

    fn check(&self) -> Result<()> {
        // Smoke render of the real logo so a broken backend fails before any write.
        self.rasterize(logo::encode(), 1).map(|_| ())
    }

    fn rasterize(&self, svg: &[u8], px: u32) -> Result<Vec<u8>> {
        ensure_size(px)?;
        let tree = self.parse(svg)?;
        let size = tree.size();
        let sx = px as f32 / size.width();
        let sy = px as f32 / size.height();

        let mut pixmap = tiny_skia::Pixmap::new(px, px).ok_or(RenderError::Allocate { px })?;
        resvg::render(&tree, tiny_skia::Transform::from_scale(sx, sy), &mut pixmap.as_mut());
        log::debug!("rasterized {}x{} from {}x{} viewbox", px, px, size.width(), size.height());

        pixmap.encode_png().map_err(|e| RenderError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn decode(png: &[u8]) -> image::DynamicImage {
        image::load_from_memory_with_format(png, image::ImageFormat::Png).unwrap()
    }

    #[test]
    fn output_is_exactly_requested_square() {
        let r = ResvgRasterizer::new();
        for px in [1, 20, 29, 167, 192] {
            let png = r.rasterize(logo::encode(), px).unwrap();
            assert_eq!(decode(&png).dimensions(), (px, px));
        }
    }

    #[test]
    fn rounded_corner_is_transparent_and_top_circle_is_white() {
        let r = ResvgRasterizer::new();
        let img = decode(&r.rasterize(logo::encode(), logo::LOGICAL_SIZE).unwrap()).to_rgba8();
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        let c = img.get_pixel(96, 70);
        assert!(c[0] > 240 && c[1] > 240 && c[2] > 240, "{:?}", c);
        // background gradient starts red
        let bg = img.get_pixel(40, 20);
        assert!(bg[0] > 200 && bg[1] < 100 && bg[3] == 255, "{:?}", bg);
    }

    #[test]
    fn same_input_renders_identical_bytes() {
        let r = ResvgRasterizer::new();
        let a = r.rasterize(logo::encode(), 87).unwrap();
        let b = r.rasterize(logo::encode(), 87).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_size_is_rejected() {
        let r = ResvgRasterizer::new();
        assert!(matches!(r.rasterize(logo::encode(), 0), Err(RenderError::InvalidSize(0))));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let r = ResvgRasterizer::new();
        assert!(matches!(r.rasterize(b"<svg", 48), Err(RenderError::Parse(_))));
    }

    #[test]
    fn check_passes_for_builtin_logo() {
        ResvgRasterizer::new().check().unwrap();
    }
}
