use macroquad::prelude::*;
use crate::domain::{EditIntent, Modifiers};
use crate::rendering::GridLayout;

/// Where the surface currently appears on screen, in screen pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }
}

/// Convert a screen point into surface pixel space, undoing any display scaling
pub fn to_surface_point(
    rect: &DisplayRect,
    surface_size: (u32, u32),
    point: (f32, f32),
) -> (f32, f32) {
    let scale_x = surface_size.0 as f32 / rect.width;
    let scale_y = surface_size.1 as f32 / rect.height;
    ((point.0 - rect.x) * scale_x, (point.1 - rect.y) * scale_y)
}

/// Turn a click at a screen point into an edit of the clamped grid cell under it
pub fn translate_click(
    layout: &GridLayout,
    rect: &DisplayRect,
    point: (f32, f32),
    modifiers: Modifiers,
) -> EditIntent {
    let (x, y) = to_surface_point(rect, layout.surface_size(), point);
    let (row, col) = layout.to_grid_coord(x, y);
    EditIntent::classify(modifiers, row, col)
}

/// Modifier keys currently held
pub fn current_modifiers() -> Modifiers {
    Modifiers {
        shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
        alt: is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
    }
}

/// Left click on the surface this frame, with the modifiers held at the time
pub fn poll_surface_click(
    rect: &DisplayRect,
    mouse_pos: (f32, f32),
) -> Option<((f32, f32), Modifiers)> {
    if is_mouse_button_pressed(MouseButton::Left) && rect.contains(mouse_pos) {
        Some((mouse_pos, current_modifiers()))
    } else {
        None
    }
}

/// Keyboard commands understood by the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    Reset,
    StepOnce,
    FasterTicks,
    SlowerTicks,
    ZoomIn,
    ZoomOut,
    ResetView,
}

const KEY_BINDINGS: [(KeyCode, Command); 8] = [
    (KeyCode::Space, Command::TogglePlay),
    (KeyCode::R, Command::Reset),
    (KeyCode::S, Command::StepOnce),
    (KeyCode::Up, Command::FasterTicks),
    (KeyCode::Down, Command::SlowerTicks),
    (KeyCode::Equal, Command::ZoomIn),
    (KeyCode::Minus, Command::ZoomOut),
    (KeyCode::H, Command::ResetView),
];

/// Commands whose keys were pressed this frame
pub fn poll_commands() -> impl Iterator<Item = Command> {
    KEY_BINDINGS
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new(8, 8, 5)
    }

    #[test]
    fn test_unscaled_click_maps_to_cell() {
        let layout = layout();
        let rect = DisplayRect { x: 10.0, y: 20.0, width: 49.0, height: 49.0 };

        // Pixel (27, 21) in surface space lies in cell (3, 4)
        let intent = translate_click(&layout, &rect, (37.0, 41.0), Modifiers::NONE);
        assert_eq!(intent, EditIntent::ToggleCell { row: 3, col: 4 });
    }

    #[test]
    fn test_scaled_display_is_corrected() {
        let layout = layout();
        // Shown at half size
        let rect = DisplayRect { x: 0.0, y: 0.0, width: 24.5, height: 24.5 };

        let point = to_surface_point(&rect, layout.surface_size(), (13.5, 10.5));
        assert_eq!(point, (27.0, 21.0));

        let intent = translate_click(&layout, &rect, (13.5, 10.5), Modifiers::SHIFT);
        assert_eq!(intent, EditIntent::StampGlider { row: 3, col: 4 });
    }

    #[test]
    fn test_click_on_far_border_is_clamped() {
        let layout = layout();
        let rect = DisplayRect { x: 0.0, y: 0.0, width: 98.0, height: 98.0 };

        let intent = translate_click(&layout, &rect, (98.0, 98.0), Modifiers::ALT);
        assert_eq!(intent, EditIntent::StampPulsar { row: 7, col: 7 });
    }

    #[test]
    fn test_rect_contains() {
        let rect = DisplayRect { x: 5.0, y: 5.0, width: 10.0, height: 10.0 };
        assert!(rect.contains((5.0, 5.0)));
        assert!(rect.contains((15.0, 15.0)));
        assert!(!rect.contains((4.9, 10.0)));
        assert!(!rect.contains((10.0, 15.1)));
    }

    #[test]
    fn test_key_bindings_are_unique() {
        let mut commands: Vec<_> = KEY_BINDINGS.iter().map(|(_, c)| format!("{:?}", c)).collect();
        commands.sort();
        commands.dedup();
        assert_eq!(commands.len(), KEY_BINDINGS.len());
    }
}
