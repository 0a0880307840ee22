//! Main application entry point.

mod app;
mod ui;

fn main() {
    env_logger::init();
    log::info!("Starting slide-to-confirm demo");

    app::App::run();
}
