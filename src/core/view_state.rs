use crate::core::config::ExplorerConfig;
use crate::core::data::point::Point;
use crate::core::fractals::colour_scheme::ColourScheme;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// A discrete user intent that changes what is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Zoom in, recentring towards the cursor (frame coordinates).
    ZoomIn { cursor: Point },
    ZoomOut { cursor: Point },
    Pan(PanDirection),
    CycleColourScheme,
    IncreaseIterations,
    DecreaseIterations,
    ResetView,
}

/// Everything that determines the next frame.
///
/// Every applied command leaves the state dirty; the owner clears the flag
/// once the frame has been redrawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    shift_x: f64,
    shift_y: f64,
    iteration_limit: u32,
    colour_scheme: ColourScheme,
    fractal: FractalKinds,
    dirty: bool,
}

impl ViewState {
    /// Starts dirty so the first idle point draws a frame.
    #[must_use]
    pub fn new(fractal: FractalKinds, config: &ExplorerConfig) -> Self {
        Self {
            zoom: config.initial_zoom,
            shift_x: 0.0,
            shift_y: 0.0,
            iteration_limit: config.initial_iteration_limit,
            colour_scheme: config.initial_colour_scheme,
            fractal,
            dirty: true,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn shift(&self) -> (f64, f64) {
        (self.shift_x, self.shift_y)
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourScheme {
        self.colour_scheme
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKinds {
        self.fractal
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport {
            zoom: self.zoom,
            shift_x: self.shift_x,
            shift_y: self.shift_y,
        }
    }

    pub fn apply(&mut self, command: ViewCommand, config: &ExplorerConfig) {
        match command {
            ViewCommand::ZoomIn { cursor } => {
                self.zoom = (self.zoom * config.zoom_factor).min(config.max_zoom);
                self.recentre_towards(cursor, config);
            }
            ViewCommand::ZoomOut { cursor } => {
                self.zoom = (self.zoom / config.zoom_factor).max(config.min_zoom);
                self.recentre_towards(cursor, config);
            }
            ViewCommand::Pan(direction) => {
                let step = config.pan_step / self.zoom;
                match direction {
                    PanDirection::Left => self.shift_x -= step,
                    PanDirection::Right => self.shift_x += step,
                    PanDirection::Up => self.shift_y -= step,
                    PanDirection::Down => self.shift_y += step,
                }
            }
            ViewCommand::CycleColourScheme => {
                self.colour_scheme = self.colour_scheme.next();
            }
            ViewCommand::IncreaseIterations => {
                self.iteration_limit = self.iteration_limit.saturating_add(config.iteration_step);
            }
            ViewCommand::DecreaseIterations => {
                self.iteration_limit = self
                    .iteration_limit
                    .saturating_sub(config.iteration_step)
                    .max(config.min_iteration_limit);
            }
            ViewCommand::ResetView => {
                self.zoom = config.initial_zoom;
                self.shift_x = 0.0;
                self.shift_y = 0.0;
                self.iteration_limit = config.initial_iteration_limit;
            }
        }

        self.dirty = true;
    }

    // Uses the zoom after the change; moves a quarter of the cursor's plane offset.
    fn recentre_towards(&mut self, cursor: Point, config: &ExplorerConfig) {
        let width = config.width as f64;
        let height = config.height as f64;

        self.shift_x += (cursor.x as f64 - width / 2.0) / (width * self.zoom) / 2.0;
        self.shift_y += (cursor.y as f64 - height / 2.0) / (height * self.zoom) / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    const CENTRE: Point = Point { x: 400, y: 400 };

    fn fresh() -> (ViewState, ExplorerConfig) {
        let config = ExplorerConfig::default();
        let mut state = ViewState::new(FractalKinds::Mandelbrot, &config);
        state.mark_clean();
        (state, config)
    }

    #[test]
    fn new_uses_config_defaults_and_is_dirty() {
        let config = ExplorerConfig::default();
        let state = ViewState::new(FractalKinds::Mandelbrot, &config);

        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.shift(), (0.0, 0.0));
        assert_eq!(state.iteration_limit(), 50);
        assert_eq!(state.colour_scheme().index(), 0);
        assert!(state.is_dirty());
    }

    #[test]
    fn zoom_in_at_centre_keeps_shift() {
        let (mut state, config) = fresh();

        state.apply(ViewCommand::ZoomIn { cursor: CENTRE }, &config);

        assert!((state.zoom() - 1.1).abs() < 1e-12);
        assert_eq!(state.shift(), (0.0, 0.0));
        assert!(state.is_dirty());
    }

    #[test]
    fn zoom_out_divides() {
        let (mut state, config) = fresh();

        state.apply(ViewCommand::ZoomOut { cursor: CENTRE }, &config);

        assert_eq!(state.zoom(), 1.0 / 1.1);
    }

    #[test]
    fn zoom_recentres_towards_cursor_using_new_zoom() {
        let (mut state, config) = fresh();

        state.apply(
            ViewCommand::ZoomIn {
                cursor: Point { x: 800, y: 0 },
            },
            &config,
        );

        let zoom = 1.1;
        let expected_x = 400.0 / (800.0 * zoom) / 2.0;
        let expected_y = -400.0 / (800.0 * zoom) / 2.0;
        let (shift_x, shift_y) = state.shift();
        assert!((shift_x - expected_x).abs() < 1e-12);
        assert!((shift_y - expected_y).abs() < 1e-12);
    }

    #[test]
    fn zoom_stays_positive_after_many_zoom_outs() {
        let (mut state, config) = fresh();

        for _ in 0..10_000 {
            state.apply(ViewCommand::ZoomOut { cursor: CENTRE }, &config);
        }

        assert!(state.zoom() > 0.0);
        assert_eq!(state.zoom(), config.min_zoom);
    }

    #[test]
    fn pan_step_scales_inversely_with_zoom() {
        let (mut state, config) = fresh();

        state.apply(ViewCommand::Pan(PanDirection::Right), &config);
        assert_eq!(state.shift(), (0.15, 0.0));

        state.apply(ViewCommand::ResetView, &config);
        state.apply(ViewCommand::ZoomIn { cursor: CENTRE }, &config);
        state.apply(ViewCommand::Pan(PanDirection::Down), &config);
        assert_eq!(state.shift(), (0.0, 0.15 / state.zoom()));
    }

    #[test]
    fn pan_directions() {
        let (mut state, config) = fresh();

        state.apply(ViewCommand::Pan(PanDirection::Left), &config);
        state.apply(ViewCommand::Pan(PanDirection::Up), &config);

        assert_eq!(state.shift(), (-0.15, -0.15));
    }

    #[test]
    fn colour_scheme_cycles_modulo_eight() {
        let (mut state, config) = fresh();

        for _ in 0..9 {
            state.apply(ViewCommand::CycleColourScheme, &config);
        }

        assert_eq!(state.colour_scheme().index(), 1);
    }

    #[test]
    fn iteration_limit_steps_by_ten() {
        let (mut state, config) = fresh();

        state.apply(ViewCommand::IncreaseIterations, &config);
        assert_eq!(state.iteration_limit(), 60);

        state.apply(ViewCommand::DecreaseIterations, &config);
        state.apply(ViewCommand::DecreaseIterations, &config);
        assert_eq!(state.iteration_limit(), 40);
    }

    #[test]
    fn iteration_limit_is_clamped_at_floor() {
        let (mut state, config) = fresh();

        for _ in 0..20 {
            state.apply(ViewCommand::DecreaseIterations, &config);
        }

        assert_eq!(state.iteration_limit(), config.min_iteration_limit);
    }

    #[test]
    fn reset_restores_view_but_keeps_colour_scheme() {
        let (mut state, config) = fresh();

        state.apply(ViewCommand::ZoomIn { cursor: Point { x: 10, y: 10 } }, &config);
        state.apply(ViewCommand::IncreaseIterations, &config);
        state.apply(ViewCommand::CycleColourScheme, &config);
        state.apply(ViewCommand::ResetView, &config);

        assert_eq!(state.zoom(), 1.0);
        assert_eq!(state.shift(), (0.0, 0.0));
        assert_eq!(state.iteration_limit(), 50);
        assert_eq!(state.colour_scheme().index(), 1);
    }

    #[test]
    fn every_command_marks_dirty() {
        let commands = [
            ViewCommand::ZoomIn { cursor: CENTRE },
            ViewCommand::ZoomOut { cursor: CENTRE },
            ViewCommand::Pan(PanDirection::Left),
            ViewCommand::CycleColourScheme,
            ViewCommand::IncreaseIterations,
            ViewCommand::DecreaseIterations,
            ViewCommand::ResetView,
        ];

        for command in commands {
            let (mut state, config) = fresh();
            state.apply(command, &config);

            assert!(state.is_dirty(), "{:?}", command);
        }
    }

    #[test]
    fn fractal_kind_survives_commands() {
        let config = ExplorerConfig::default();
        let kind = FractalKinds::Julia {
            constant: Complex::new(-0.7, 0.27),
        };
        let mut state = ViewState::new(kind, &config);

        state.apply(ViewCommand::ResetView, &config);
        state.apply(ViewCommand::Pan(PanDirection::Up), &config);

        assert_eq!(state.fractal(), kind);
    }

    #[test]
    fn viewport_reflects_state() {
        let (mut state, config) = fresh();

        state.apply(ViewCommand::Pan(PanDirection::Right), &config);
        let viewport = state.viewport();

        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.shift_x, 0.15);
        assert_eq!(viewport.shift_y, 0.0);
    }
}
