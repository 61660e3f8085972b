//! Pixel format conversion helpers for presentation adapters.
//!
//! The framebuffer stores packed `0x??RRGGBB` values; presenters describe
//! their own byte layout with a [`FrameLayout`] and receive the frame through
//! [`blit`].

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 3 bytes: R, G, B.
    Rgb8,
    /// 4 bytes: R, G, B, A (alpha written as 255).
    Rgba8,
    /// 4 bytes: B, G, R, A (alpha written as 255).
    Bgra8,
}

impl PixelFormat {
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Bgra8 => 4,
        }
    }

    fn write(self, colour: Colour, dst: &mut [u8]) {
        match self {
            Self::Rgb8 => dst.copy_from_slice(&[colour.r, colour.g, colour.b]),
            Self::Rgba8 => dst.copy_from_slice(&[colour.r, colour.g, colour.b, 255]),
            Self::Bgra8 => dst.copy_from_slice(&[colour.b, colour.g, colour.r, 255]),
        }
    }
}

/// Describes a destination pixel surface: size, row stride in bytes, format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub width: u32,
    pub height: u32,
    pub stride: usize,
    pub format: PixelFormat,
}

impl FrameLayout {
    /// Rows packed back to back with no padding.
    #[must_use]
    pub const fn packed(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            stride: width as usize * format.bytes_per_pixel(),
            format,
        }
    }

    #[must_use]
    pub const fn row_bytes(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// Smallest destination that can hold the frame; the last row needs no padding.
    #[must_use]
    pub const fn required_len(&self) -> usize {
        if self.height == 0 {
            return 0;
        }
        self.stride * (self.height as usize - 1) + self.row_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlitError {
    SizeMismatch {
        buffer: (u32, u32),
        layout: (u32, u32),
    },
    StrideTooSmall {
        stride: usize,
        row_bytes: usize,
    },
    DestinationTooSmall {
        required: usize,
        actual: usize,
    },
}

impl fmt::Display for BlitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { buffer, layout } => write!(
                f,
                "pixel buffer is {}x{} but destination is {}x{}",
                buffer.0, buffer.1, layout.0, layout.1
            ),
            Self::StrideTooSmall { stride, row_bytes } => write!(
                f,
                "row stride {} is smaller than a row of {} bytes",
                stride, row_bytes
            ),
            Self::DestinationTooSmall { required, actual } => write!(
                f,
                "destination holds {} bytes, frame needs {}",
                actual, required
            ),
        }
    }
}

impl Error for BlitError {}

/// Copies `buffer` into `dst` according to `layout`.
///
/// Padding bytes between rows are left untouched.
pub fn blit(buffer: &PixelBuffer, layout: &FrameLayout, dst: &mut [u8]) -> Result<(), BlitError> {
    if (buffer.width(), buffer.height()) != (layout.width, layout.height) {
        return Err(BlitError::SizeMismatch {
            buffer: (buffer.width(), buffer.height()),
            layout: (layout.width, layout.height),
        });
    }

    if layout.stride < layout.row_bytes() {
        return Err(BlitError::StrideTooSmall {
            stride: layout.stride,
            row_bytes: layout.row_bytes(),
        });
    }

    if dst.len() < layout.required_len() {
        return Err(BlitError::DestinationTooSmall {
            required: layout.required_len(),
            actual: dst.len(),
        });
    }

    let bytes_per_pixel = layout.format.bytes_per_pixel();
    let src_rows = buffer.pixels().chunks_exact(buffer.width() as usize);

    for (src_row, dst_row) in src_rows.zip(dst.chunks_mut(layout.stride)) {
        let dst_pixels = dst_row[..layout.row_bytes()].chunks_exact_mut(bytes_per_pixel);

        for (&packed, dst_pixel) in src_row.iter().zip(dst_pixels) {
            layout.format.write(Colour::from_packed(packed), dst_pixel);
        }
    }

    Ok(())
}
