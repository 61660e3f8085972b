//! Input adapters for the fractal viewer.
//!
//! This module contains adapters that receive input from the command line
//! and the window system and translate them into view commands.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
