pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use terminal::TuiManager;
