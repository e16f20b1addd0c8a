use macroquad::prelude::*;

use super::Button;

const STEP_BUTTON_WIDTH: f32 = 40.0;

/// Numeric stepper for ticks per frame: `[-]  value  [+]`
#[derive(Clone)]
pub struct RateControl {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    decrease: Button,
    increase: Button,
}

impl RateControl {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        let mut control = Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            decrease: Button::new(0.0, 0.0, STEP_BUTTON_WIDTH, height, "-"),
            increase: Button::new(0.0, 0.0, STEP_BUTTON_WIDTH, height, "+"),
        };
        control.set_position(x, y);
        control
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.decrease.set_position(x, y);
        self.increase.set_position(x + self.width - STEP_BUTTON_WIDTH, y);
    }

    /// Step requested by a hover position: -1, +1 or none
    pub fn step_at(&self, mouse_pos: (f32, f32)) -> Option<i32> {
        if self.decrease.is_hovered(mouse_pos) {
            Some(-1)
        } else if self.increase.is_hovered(mouse_pos) {
            Some(1)
        } else {
            None
        }
    }

    /// Step requested by a click this frame
    pub fn update(&self, mouse_pos: (f32, f32)) -> Option<i32> {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.step_at(mouse_pos)
        } else {
            None
        }
    }

    pub fn draw(&self, value: u32, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        self.decrease.draw(mouse_pos);
        self.increase.draw(mouse_pos);

        let text = value.to_string();
        let size = measure_text(&text, None, 20, 1.0);
        draw_text(
            &text,
            self.x + (self.width - size.width) / 2.0,
            self.y + (self.height + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
