use std::error::Error;
use std::fmt;

use winit::error::{EventLoopError, OsError};

use crate::core::config::ConfigError;
use crate::presenters::pixels::presenter::PresentError;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Resize(pixels::TextureError),
    Config(ConfigError),
    Present(PresentError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "failed to create pixels surface: {}", err),
            Self::Resize(err) => write!(f, "failed to resize surface: {}", err),
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::Present(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Resize(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Resize(err)
    }
}

impl From<ConfigError> for GuiError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<PresentError> for GuiError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}
