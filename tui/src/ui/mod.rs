//! Terminal input and rendering.

mod keymapper;
mod renderer;

pub use keymapper::{InputEvent, KeyMapper};
pub use renderer::Renderer;
