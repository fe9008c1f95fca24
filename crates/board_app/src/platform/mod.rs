mod app;
mod config;
mod effects;
mod logging;
mod script;
mod ui;

pub use app::run_app;
