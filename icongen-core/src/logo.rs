//! The app logo: a 192x192 SVG with a rounded red gradient tile, three white
//! circles and a gold accent (two strokes plus a small triangle).

pub const LOGO_SVG: &str = include_str!("../assets/logo.svg");

/// Side length of the SVG viewBox.
pub const LOGICAL_SIZE: u32 = 192;

pub fn encode() -> &'static [u8] {
    LOGO_SVG.as_bytes()
}
