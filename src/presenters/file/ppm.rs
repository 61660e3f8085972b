use crate::adapters::pixel_format::{BlitError, FrameLayout, PixelFormat, blit};
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_sink::FrameSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum PpmError {
    Io(io::Error),
    Blit(BlitError),
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write ppm: {}", err),
            Self::Blit(err) => write!(f, "failed to convert frame: {}", err),
        }
    }
}

impl Error for PpmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Blit(err) => Some(err),
        }
    }
}

impl From<io::Error> for PpmError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<BlitError> for PpmError {
    fn from(err: BlitError) -> Self {
        Self::Blit(err)
    }
}

/// Writes `buffer` as a binary (P6) PPM.
pub fn write_ppm(buffer: &PixelBuffer, mut writer: impl Write) -> Result<(), PpmError> {
    let layout = FrameLayout::packed(buffer.width(), buffer.height(), PixelFormat::Rgb8);
    let mut data = vec![0; layout.required_len()];
    blit(buffer, &layout, &mut data)?;

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", layout.width, layout.height)?;
    writeln!(writer, "255")?;
    writer.write_all(&data)?;
    writer.flush()?;

    Ok(())
}

/// Saves every presented frame to the same path, replacing the previous one.
pub struct PpmFilePresenter {
    path: PathBuf,
}

impl FrameSink for PpmFilePresenter {
    type Error = PpmError;

    fn present(&mut self, frame: &FrameData<'_>) -> Result<(), PpmError> {
        let file = File::create(&self.path)?;
        write_ppm(frame.pixel_buffer, BufWriter::new(file))?;

        log::info!(
            "saved frame {} ({} ms) to {}",
            frame.frame_number,
            frame.render_duration.as_millis(),
            self.path.display()
        );

        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
