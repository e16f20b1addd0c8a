mod button;
mod rate_control;

pub use button::{Button, Icon};
pub use rate_control::RateControl;

// UI constants - functions for responsive layout
use macroquad::prelude::screen_width;
use crate::application::{AnimationController, PlaybackState, PLAY_LABEL};
use crate::input::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Icon shown on the play/pause button for a playback state
pub fn play_pause_icon(state: PlaybackState) -> Icon {
    match state {
        PlaybackState::Paused => Icon::Play,
        PlaybackState::Playing => Icon::Pause,
    }
}

/// Play/pause, reset and rate controls of the side panel
pub struct Controls {
    pub play_pause: Button,
    pub reset: Button,
    pub rate: RateControl,
}

impl Controls {
    pub fn new(x: f32) -> Self {
        let mut play_pause = Button::new(x, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, PLAY_LABEL);
        play_pause.set_icon(Some(Icon::Play));
        Self {
            play_pause,
            reset: Button::new(x, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset"),
            rate: RateControl::new(x, 140.0, PANEL_WIDTH, 30.0, "Ticks per frame"),
        }
    }

    /// Keep the panel on the right edge as the window resizes
    pub fn set_x(&mut self, x: f32) {
        self.play_pause.set_position(x, 20.0);
        self.reset.set_position(x, 70.0);
        self.rate.set_position(x, 140.0);
    }

    /// Reflect the controller's playback state on the play/pause button
    pub fn sync(&mut self, controller: &AnimationController) {
        self.play_pause.set_icon(Some(play_pause_icon(controller.state())));
        self.play_pause.set_text(controller.label());
    }

    /// Commands from control clicks this frame
    pub fn poll(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        if self.play_pause.is_clicked(mouse_pos) {
            return Some(Command::TogglePlay);
        }
        if self.reset.is_clicked(mouse_pos) {
            return Some(Command::Reset);
        }
        match self.rate.update(mouse_pos) {
            Some(step) if step > 0 => Some(Command::FasterTicks),
            Some(_) => Some(Command::SlowerTicks),
            None => None,
        }
    }

    pub fn draw(&self, ticks_per_frame: u32, mouse_pos: (f32, f32)) {
        self.play_pause.draw(mouse_pos);
        self.reset.draw(mouse_pos);
        self.rate.draw(ticks_per_frame, mouse_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::PAUSE_LABEL;

    #[test]
    fn test_sync_follows_controller() {
        let mut controls = Controls::new(0.0);
        let mut controller = AnimationController::new();
        assert_eq!(controls.play_pause.icon(), Some(Icon::Play));

        controller.play();
        controls.sync(&controller);
        assert_eq!(controls.play_pause.icon(), Some(Icon::Pause));
        assert_eq!(controls.play_pause.text(), PAUSE_LABEL);

        controller.pause();
        controls.sync(&controller);
        assert_eq!(controls.play_pause.icon(), Some(Icon::Play));
        assert_eq!(controls.play_pause.text(), PLAY_LABEL);
    }
}
