pub mod binding;
pub mod constants;
pub mod driver;
pub mod params;
pub mod preset;
pub mod scene;
pub mod state;

pub static PREVIEW_WGSL: &str = include_str!("../shaders/preview.wgsl");

pub use binding::*;
pub use constants::*;
pub use driver::*;
pub use params::*;
pub use preset::*;
pub use scene::*;
pub use state::*;
