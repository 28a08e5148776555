mod clear_color;
mod filter_mode;
mod frame;
mod letterbox;
mod pipeline;
mod renderer;
mod scene_size;
mod texture;
mod viewport;

pub use clear_color::*;
pub use filter_mode::*;
pub use frame::*;
pub use letterbox::*;
pub use pipeline::*;
pub use renderer::*;
pub use scene_size::*;
pub use texture::*;
pub use viewport::*;
