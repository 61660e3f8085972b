use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_sink::FrameSink;
use crate::core::actions::render_frame::{RenderMode, render};
use crate::core::config::{ConfigError, ExplorerConfig};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::view_state::{ViewCommand, ViewState};
use std::time::Instant;

pub struct ExplorerController<S: FrameSink> {
    config: ExplorerConfig,
    state: ViewState,
    buffer: PixelBuffer,
    render_mode: RenderMode,
    sink: S,
    frames_rendered: u64,
}

impl<S: FrameSink> ExplorerController<S> {
    pub fn new(
        config: ExplorerConfig,
        fractal: FractalKinds,
        render_mode: RenderMode,
        sink: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let buffer = PixelBuffer::new(config.width, config.height).map_err(|_| {
            ConfigError::InvalidSize {
                width: config.width,
                height: config.height,
            }
        })?;

        Ok(Self {
            state: ViewState::new(fractal, &config),
            config,
            buffer,
            render_mode,
            sink,
            frames_rendered: 0,
        })
    }

    pub fn handle(&mut self, command: ViewCommand) {
        self.state.apply(command, &self.config);
        log::debug!(
            "{:?}: zoom {:.6}, shift {:?}, limit {}, scheme {}",
            command,
            self.state.zoom(),
            self.state.shift(),
            self.state.iteration_limit(),
            self.state.colour_scheme().index()
        );
    }

    /// Renders and presents if a redraw is owed. Any number of commands since
    /// the last call collapse into this one frame.
    ///
    /// Returns whether a frame was presented.
    pub fn redraw_if_dirty(&mut self) -> Result<bool, S::Error> {
        if !self.state.is_dirty() {
            return Ok(false);
        }

        let start = Instant::now();
        render(&self.state, &self.config, &mut self.buffer, self.render_mode);
        let render_duration = start.elapsed();

        self.state.mark_clean();
        self.frames_rendered += 1;

        log::debug!(
            "frame {} rendered in {} ms",
            self.frames_rendered,
            render_duration.as_millis()
        );

        self.sink.present(&FrameData {
            frame_number: self.frames_rendered,
            pixel_buffer: &self.buffer,
            view: &self.state,
            render_duration,
        })?;

        Ok(true)
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Gives the sink back, e.g. to release graphics resources before exit.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
