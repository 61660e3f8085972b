use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

use crate::core::data::point::Point;
use crate::core::view_state::{PanDirection, ViewCommand};

/// What a key press asks the window loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(ViewCommand),
    ToggleOverlay,
    Quit,
}

/// Key map. `+` is read from the `=` key so it works without Shift.
#[must_use]
pub fn action_for_key(key: KeyCode) -> Option<InputAction> {
    let action = match key {
        KeyCode::ArrowLeft => InputAction::Command(ViewCommand::Pan(PanDirection::Left)),
        KeyCode::ArrowRight => InputAction::Command(ViewCommand::Pan(PanDirection::Right)),
        KeyCode::ArrowUp => InputAction::Command(ViewCommand::Pan(PanDirection::Up)),
        KeyCode::ArrowDown => InputAction::Command(ViewCommand::Pan(PanDirection::Down)),
        KeyCode::KeyC => InputAction::Command(ViewCommand::CycleColourScheme),
        KeyCode::Equal | KeyCode::NumpadAdd => {
            InputAction::Command(ViewCommand::IncreaseIterations)
        }
        KeyCode::Minus | KeyCode::NumpadSubtract => {
            InputAction::Command(ViewCommand::DecreaseIterations)
        }
        KeyCode::KeyR => InputAction::Command(ViewCommand::ResetView),
        KeyCode::KeyH => InputAction::ToggleOverlay,
        KeyCode::Escape => InputAction::Quit,
        _ => return None,
    };

    Some(action)
}

/// Wheel up zooms in, wheel down zooms out; horizontal scrolling is ignored.
#[must_use]
pub fn scroll_command(delta: &MouseScrollDelta, cursor: Point) -> Option<ViewCommand> {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if vertical > 0.0 {
        Some(ViewCommand::ZoomIn { cursor })
    } else if vertical < 0.0 {
        Some(ViewCommand::ZoomOut { cursor })
    } else {
        None
    }
}
