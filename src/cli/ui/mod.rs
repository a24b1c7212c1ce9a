pub mod banner;
pub mod menu_renderer;
pub mod panel;
