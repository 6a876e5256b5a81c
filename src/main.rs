//! Thermodial - thermostat-style value controls
//! Built with iced: a circular dial, a stagger slider and a dual-mode gauge

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;
mod utils;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(520.0, 760.0))
        .antialiasing(true)
        .run()
}
