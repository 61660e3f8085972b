use crate::controllers::explorer::data::frame_data::FrameData;
use std::error::Error;

/// Receives each completed frame. Called once per render, on the owning thread.
pub trait FrameSink {
    type Error: Error + 'static;

    fn present(&mut self, frame: &FrameData<'_>) -> Result<(), Self::Error>;
}
