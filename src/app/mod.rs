pub mod app;
pub mod render_state;
pub mod state;

pub use app::App;
pub use render_state::RenderState;
pub use state::TokenStore;
