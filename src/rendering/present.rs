use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::Engine;
use crate::input::DisplayRect;
use crate::ui::{Controls, panel_x, PANEL_WIDTH};

/// GPU copy of the grid surface
pub struct SurfaceTexture {
    texture: Texture2D,
}

impl SurfaceTexture {
    pub fn new(image: &Image) -> Self {
        let texture = Texture2D::from_image(image);
        texture.set_filter(FilterMode::Nearest);
        Self { texture }
    }

    /// Copy the latest surface pixels, recreating the texture on resize
    pub fn upload(&mut self, image: &Image) {
        let same_size = self.texture.width() as u16 == image.width
            && self.texture.height() as u16 == image.height;
        if same_size {
            self.texture.update(image);
        } else {
            *self = Self::new(image);
        }
    }

    /// Draw the surface stretched over `rect`
    pub fn draw(&self, rect: &DisplayRect) {
        draw_texture_ex(
            &self.texture,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.width, rect.height)),
                ..Default::default()
            },
        );
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the side panel with controls, shortcuts and session stats
pub fn draw_controls<E: Engine>(session: &Session<E>, controls: &Controls, mouse_pos: (f32, f32)) {
    draw_panel_background();
    controls.draw(session.ticks_per_frame(), mouse_pos);

    let px = panel_x();

    let help = [
        ("Controls:", 210.0, 14.0, WHITE),
        ("Click: Toggle cell", 225.0, 12.0, GRAY),
        ("Shift+Click: Glider", 238.0, 12.0, GRAY),
        ("Alt+Click: Pulsar", 251.0, 12.0, GRAY),
        ("Space: Play/Pause", 264.0, 12.0, GRAY),
        ("S: Step  R: Reset", 277.0, 12.0, GRAY),
        ("Up/Down: Ticks", 290.0, 12.0, GRAY),
        ("=/-: Zoom  H: Home", 303.0, 12.0, GRAY),
    ];
    help.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });

    let layout = session.layout();
    let render_ms = session.last_render_time_ms();
    let render_color = if render_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if render_ms < 16.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    };

    let info = [
        (format!("Grid: {}x{}", layout.width, layout.height), 340.0, GRAY),
        (format!("Alive: {}", session.live_cells()), 355.0, GRAY),
        (format!("Generation: {}", session.generation()), 370.0, WHITE),
        (format!("Render: {:.2}ms", render_ms), 385.0, render_color),
        (format!("FPS: {}", get_fps()), 400.0, GRAY),
        (format!("Scale: {:.2}x", session.viewport.scale), 415.0, GRAY),
    ];
    info.iter().for_each(|(text, y, color)| {
        draw_text_label(text, px, *y, 13.0, *color);
    });

    let (status, status_color) = if session.is_playing() {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text_label("Status:", px, 445.0, 16.0, WHITE);
    draw_text_label(status, px, 465.0, 16.0, status_color);
}
