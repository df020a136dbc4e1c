pub mod app;
pub mod formula;
pub mod input;
pub mod suggest;
pub mod ui;
