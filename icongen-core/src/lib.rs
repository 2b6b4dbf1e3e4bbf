pub mod error;
pub mod logo;
pub mod raster;
pub mod render;
pub mod targets;
pub mod verify;

pub use error::RenderError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
