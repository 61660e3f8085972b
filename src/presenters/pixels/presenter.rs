use std::error::Error;
use std::fmt;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::adapters::pixel_format::{BlitError, FrameLayout, PixelFormat, blit};
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_sink::FrameSink;
use crate::core::data::point::Point;
use crate::presenters::pixels::overlay::{OverlayStatus, show_status};

#[derive(Debug)]
pub enum PresentError {
    Blit(BlitError),
    Render(pixels::Error),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blit(err) => write!(f, "failed to copy frame: {}", err),
            Self::Render(err) => write!(f, "failed to render frame: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Blit(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<BlitError> for PresentError {
    fn from(err: BlitError) -> Self {
        Self::Blit(err)
    }
}

impl From<pixels::Error> for PresentError {
    fn from(err: pixels::Error) -> Self {
        Self::Render(err)
    }
}

/// Shows frames in a window through a `pixels` surface, with an egui status
/// panel drawn on top.
///
/// The framebuffer keeps the configured size; the surface follows the window
/// and `pixels` scales between them.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    layout: FrameLayout,
    surface_width: u32,
    surface_height: u32,
    egui_ctx: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiRenderer,
    overlay_visible: bool,
    status: Option<OverlayStatus>,
}

impl FrameSink for PixelsPresenter {
    type Error = PresentError;

    fn present(&mut self, frame: &FrameData<'_>) -> Result<(), PresentError> {
        blit(frame.pixel_buffer, &self.layout, self.pixels.frame_mut())?;
        self.status = Some(OverlayStatus::from_frame(frame));

        self.repaint()
    }
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        width: u32,
        height: u32,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        let egui_ctx = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            layout: FrameLayout::packed(width, height, PixelFormat::Rgba8),
            surface_width: size.width,
            surface_height: size.height,
            egui_ctx,
            egui_state,
            egui_renderer,
            overlay_visible: true,
            status: None,
        })
    }

    /// Draws the current framebuffer and overlay again without new fractal data.
    pub fn repaint(&mut self) -> Result<(), PresentError> {
        // Minimised window
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let raw_input = self.egui_state.take_egui_input(self.window);
        let overlay_visible = self.overlay_visible;
        let status = self.status.as_ref();
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            if overlay_visible {
                show_status(ctx, status);
            }
        });

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output);

        let clipped_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_output.pixels_per_point,
        };
        let textures_delta = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    /// Forwards a window event to egui.
    ///
    /// Returns true if the overlay consumed it.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(self.window, event).consumed
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay_visible = !self.overlay_visible;
        log::debug!("status overlay visible: {}", self.overlay_visible);
    }

    /// Maps a window position to framebuffer coordinates, clamping positions in
    /// the letterbox border to the nearest edge pixel.
    #[must_use]
    pub fn cursor_to_pixel(&self, position: PhysicalPosition<f64>) -> Point {
        let position = (position.x as f32, position.y as f32);
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        Point {
            x: x as u32,
            y: y as u32,
        }
    }
}
