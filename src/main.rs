mod app;
mod components;
mod image_pipeline;
mod message;
mod model;
mod service;
mod utils;
mod views;

pub fn main() -> iced::Result {
    app::run()
}
