pub mod input_render;
mod input_state;

pub use input_render::render_input;
pub use input_state::SearchInput;
