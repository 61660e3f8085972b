use std::time::Duration;

use crate::controllers::explorer::data::frame_data::FrameData;

/// Text shown in the status panel, captured from the last presented frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStatus {
    pub fractal: String,
    pub zoom: f64,
    pub centre: (f64, f64),
    pub iteration_limit: u32,
    pub colour_scheme: &'static str,
    pub frame_number: u64,
    pub render_duration: Duration,
}

impl OverlayStatus {
    #[must_use]
    pub fn from_frame(frame: &FrameData<'_>) -> Self {
        Self {
            fractal: frame.view.fractal().to_string(),
            zoom: frame.view.zoom(),
            centre: frame.view.shift(),
            iteration_limit: frame.view.iteration_limit(),
            colour_scheme: frame.view.colour_scheme().display_name(),
            frame_number: frame.frame_number,
            render_duration: frame.render_duration,
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.fractal.clone(),
            format!("Zoom: {:.4}x", self.zoom),
            format!("Centre: {:+.6} {:+.6}i", self.centre.0, self.centre.1),
            format!("Iteration limit: {}", self.iteration_limit),
            format!("Colours: {}", self.colour_scheme),
            format!(
                "Frame {} in {} ms",
                self.frame_number,
                self.render_duration.as_millis()
            ),
        ]
    }
}

pub(crate) const KEY_HELP: &str =
    "Scroll: zoom | Arrows: pan | C: colours | +/-: iterations | R: reset | H: hide | Esc: quit";

/// Draws the status panel for one egui pass.
pub(crate) fn show_status(ctx: &egui::Context, status: Option<&OverlayStatus>) {
    egui::Window::new("Fract'ol")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            match status {
                Some(status) => {
                    for line in status.lines() {
                        ui.label(line);
                    }
                }
                None => {
                    ui.label("Rendering...");
                }
            }

            ui.separator();
            ui.small(KEY_HELP);
        });
}
