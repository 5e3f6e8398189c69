pub mod components;
pub mod render;
pub mod theme;

pub use render::render_to_string;
pub use theme::Theme;
