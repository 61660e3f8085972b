use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::view_state::ViewState;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData<'a> {
    /// Starts at 1 for the first frame.
    pub frame_number: u64,
    pub pixel_buffer: &'a PixelBuffer,
    pub view: &'a ViewState,
    pub render_duration: Duration,
}
