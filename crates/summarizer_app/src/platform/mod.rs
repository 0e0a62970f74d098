mod app;
mod effects;
mod intake;
mod logging;
mod ui;

pub use app::run_app;
