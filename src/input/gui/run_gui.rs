//! Window event loop.

use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

use crate::controllers::explorer::ExplorerController;
use crate::core::actions::render_frame::RenderMode;
use crate::core::config::ExplorerConfig;
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::input::gui::errors::GuiError;
use crate::input::gui::key_bindings::{InputAction, action_for_key, scroll_command};
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the window and runs until it is closed or Esc is pressed.
///
/// Input events only update the view state; the frame is rendered once per
/// redraw, so a burst of events costs a single render.
///
/// The pixels surface and egui renderer are dropped before returning. The
/// window itself is leaked so the surface can borrow it for `'static`; it is
/// destroyed when the process exits.
pub fn run_gui(
    config: ExplorerConfig,
    fractal: FractalKinds,
    render_mode: RenderMode,
) -> Result<(), GuiError> {
    config.validate()?;

    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(format!("Fract'ol - {}", fractal))
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, &event_loop, config.width, config.height)?;
    let mut controller = ExplorerController::new(config, fractal, render_mode, presenter)?;

    log::info!("exploring {} ({:?} rendering)", fractal, render_mode);

    let mut cursor = Point {
        x: config.width / 2,
        y: config.height / 2,
    };
    let mut repaint_pending = false;
    let mut failure: Option<GuiError> = None;

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            // Forward event to egui first
            let overlay_consumed = controller.sink_mut().handle_window_event(event);

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    let result = match controller.redraw_if_dirty() {
                        Ok(true) => Ok(()),
                        Ok(false) if repaint_pending => controller.sink_mut().repaint(),
                        Ok(false) => Ok(()),
                        Err(err) => Err(err),
                    };
                    repaint_pending = false;

                    if let Err(err) = result {
                        log::error!("{}", err);
                        failure = Some(err.into());
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = controller.sink_mut().resize_surface(size.width, size.height)
                    {
                        log::error!("{}", err);
                        failure = Some(err.into());
                        elwt.exit();
                    }
                    repaint_pending = true;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = controller.sink().cursor_to_pixel(*position);
                }
                _ if overlay_consumed => repaint_pending = true,
                WindowEvent::MouseWheel { delta, .. } => {
                    if let Some(command) = scroll_command(delta, cursor) {
                        controller.handle(command);
                    }
                }
                WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                    let PhysicalKey::Code(key) = event.physical_key else {
                        return;
                    };

                    match action_for_key(key) {
                        Some(InputAction::Command(command)) => controller.handle(command),
                        Some(InputAction::ToggleOverlay) => {
                            controller.sink_mut().toggle_overlay();
                            repaint_pending = true;
                        }
                        Some(InputAction::Quit) => elwt.exit(),
                        None => {}
                    }
                }
                _ => {}
            }
        }
        Event::AboutToWait => {
            if controller.state().is_dirty() || repaint_pending {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    drop(controller);
    log::debug!("graphics resources released");

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
