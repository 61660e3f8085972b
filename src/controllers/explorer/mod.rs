//! Single-owner controller for interactive exploration.
//!
//! The controller owns the view state and the framebuffer. Input adapters
//! feed it `ViewCommand`s; at each idle point the event loop asks it to
//! redraw, which renders only when a command has left the state dirty and
//! then hands the frame to a `FrameSink`.

mod controller;
pub mod data;
pub mod ports;

pub use controller::ExplorerController;
