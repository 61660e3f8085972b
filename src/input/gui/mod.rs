//! Windowed input adapter: winit for the window and events, pixels for the
//! framebuffer, egui for the status overlay.

pub mod errors;
pub mod key_bindings;
mod run_gui;

pub use run_gui::run_gui;
