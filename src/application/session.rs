use std::time::Instant;

use macroquad::texture::Image;
use tracing::{debug, info, trace};

use super::{AnimationController, Viewport};
use crate::domain::{CellView, EditIntent, Engine, Modifiers};
use crate::input::{self, DisplayRect};
use crate::rendering::{self, GridLayout, RenderConfig};

pub const MIN_TICKS_PER_FRAME: u32 = 1;
pub const MAX_TICKS_PER_FRAME: u32 = 10;

/// Session ties the engine to the view.
/// It owns the drawing surface and the animation controller, and is the
/// only place that calls into the engine.
pub struct Session<E: Engine> {
    engine: E,
    config: RenderConfig,
    layout: GridLayout,
    surface: Image,
    controller: AnimationController,
    pub viewport: Viewport,
    ticks_per_frame: u32,
    generation: u64,
    frames: u64,
    repaints: u64,
    last_render_time_ms: f32,
}

impl<E: Engine> Session<E> {
    /// Create a paused session over `engine` and paint the initial state
    pub fn new(engine: E, config: RenderConfig) -> Self {
        let layout = config.layout(engine.width(), engine.height());
        let surface = rendering::new_surface(&layout, &config);
        let mut session = Self {
            engine,
            config,
            layout,
            surface,
            controller: AnimationController::new(),
            viewport: Viewport::new(config.display_scale),
            ticks_per_frame: MIN_TICKS_PER_FRAME,
            generation: 0,
            frames: 0,
            repaints: 0,
            last_render_time_ms: 0.0,
        };
        info!(width = layout.width, height = layout.height, "session started");
        session.repaint();
        session
    }

    /// Set the initial ticks per frame (builder pattern)
    pub fn with_ticks_per_frame(mut self, ticks: u32) -> Self {
        self.set_ticks_per_frame(ticks);
        self
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The painted surface
    pub fn surface(&self) -> &Image {
        &self.surface
    }

    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    /// Engine ticks since start or last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Frame steps run since start
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    pub fn last_render_time_ms(&self) -> f32 {
        self.last_render_time_ms
    }

    pub fn live_cells(&self) -> usize {
        CellView::new(self.engine.cells(), self.layout.width, self.layout.height).live_count()
    }

    /// Screen rectangle the surface is shown in
    pub fn display_rect(&self) -> DisplayRect {
        self.viewport.display_rect(self.layout.surface_size())
    }

    /// Takes effect on the next frame step
    pub fn set_ticks_per_frame(&mut self, ticks: u32) {
        self.ticks_per_frame = ticks.clamp(MIN_TICKS_PER_FRAME, MAX_TICKS_PER_FRAME);
    }

    pub fn adjust_ticks_per_frame(&mut self, delta: i32) {
        let ticks = self.ticks_per_frame.saturating_add_signed(delta);
        self.set_ticks_per_frame(ticks);
    }

    pub fn play(&mut self) {
        self.controller.play();
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    /// Play/pause control handler
    pub fn toggle_play(&mut self) {
        self.controller.toggle();
    }

    /// Reset the engine and repaint at once. Playback state is untouched.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.generation = 0;
        self.sync_dimensions();
        info!(playing = self.is_playing(), "grid reset");
        self.repaint();
    }

    /// Send an edit to the engine and repaint outside the frame cadence
    pub fn apply(&mut self, intent: EditIntent) {
        let (row, col) = intent.position();
        debug!(row, col, edit = intent.name(), "applying edit");
        intent.apply(&mut self.engine);
        self.repaint();
    }

    /// Handle a click at a screen point on the surface
    pub fn click(
        &mut self,
        point: (f32, f32),
        rect: &DisplayRect,
        modifiers: Modifiers,
    ) -> EditIntent {
        let intent = input::translate_click(&self.layout, rect, point, modifiers);
        self.apply(intent);
        intent
    }

    /// Drive the animation on a display refresh.
    /// Returns true if a frame step ran.
    pub fn on_display_refresh(&mut self) -> bool {
        if !self.controller.poll_frame() {
            return false;
        }
        self.frame_step();
        self.controller.complete_frame();
        true
    }

    /// Run a single frame step by hand; only while paused
    pub fn step_once(&mut self) {
        if self.is_playing() {
            return;
        }
        self.frame_step();
    }

    /// Advance the engine `ticks_per_frame` times, then repaint once
    fn frame_step(&mut self) {
        let ticks = self.ticks_per_frame;
        trace!(ticks, "frame step");
        for _ in 0..ticks {
            self.engine.tick();
        }
        self.generation += u64::from(ticks);
        self.frames += 1;
        self.repaint();
    }

    /// Redraw gridlines and cells from the engine's current buffer
    pub fn repaint(&mut self) {
        let start = Instant::now();
        rendering::repaint(&mut self.surface, &self.engine, &self.layout, &self.config);
        self.repaints += 1;
        self.last_render_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Rebuild layout and surface if the engine now reports other dimensions
    fn sync_dimensions(&mut self) {
        let (width, height) = (self.engine.width(), self.engine.height());
        if (width, height) == (self.layout.width, self.layout.height) {
            return;
        }
        info!(
            old_width = self.layout.width,
            old_height = self.layout.height,
            width,
            height,
            "grid dimensions changed"
        );
        self.layout = self.config.layout(width, height);
        self.surface = rendering::new_surface(&self.layout, &self.config);
    }
}
