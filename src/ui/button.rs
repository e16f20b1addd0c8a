use macroquad::prelude::*;

/// Vector icon drawn next to the text label.
/// The default font has no media-control glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Play,
    Pause,
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    icon: Option<Icon>,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            icon: None,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        let icon_space = if self.icon.is_some() { 22.0 } else { 0.0 };
        let text_x = self.x + (self.width - text_size.width + icon_space) / 2.0;

        if let Some(icon) = self.icon {
            self.draw_icon(icon, text_x - icon_space, self.y + self.height / 2.0);
        }
        draw_text(
            &self.text,
            text_x,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    fn draw_icon(&self, icon: Icon, x: f32, center_y: f32) {
        match icon {
            Icon::Play => draw_triangle(
                vec2(x, center_y - 8.0),
                vec2(x, center_y + 8.0),
                vec2(x + 14.0, center_y),
                WHITE,
            ),
            Icon::Pause => {
                draw_rectangle(x, center_y - 8.0, 5.0, 16.0, WHITE);
                draw_rectangle(x + 9.0, center_y - 8.0, 5.0, 16.0, WHITE);
            }
        }
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds_are_inclusive() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, "Reset");
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((110.0, 60.0)));
        assert!(!button.is_hovered((9.9, 30.0)));
        assert!(!button.is_hovered((50.0, 60.1)));
    }

    #[test]
    fn test_set_position_moves_hit_area() {
        let mut button = Button::new(0.0, 0.0, 10.0, 10.0, "");
        button.set_position(100.0, 100.0);
        assert!(!button.is_hovered((5.0, 5.0)));
        assert!(button.is_hovered((105.0, 105.0)));
    }
}
