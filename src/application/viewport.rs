use crate::input::DisplayRect;

pub const MIN_SCALE: f32 = 0.25;
pub const MAX_SCALE: f32 = 8.0;

/// Placement of the grid surface on screen.
/// `scale` only affects how large the surface is shown, never its pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub scale: f32,
    default_scale: f32,
}

impl Viewport {
    pub fn new(scale: f32) -> Self {
        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            scale,
            default_scale: scale,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.scale = (self.scale / factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Screen rectangle covered by a surface of the given pixel size
    pub fn display_rect(&self, surface_size: (u32, u32)) -> DisplayRect {
        DisplayRect {
            x: self.origin_x,
            y: self.origin_y,
            width: surface_size.0 as f32 * self.scale,
            height: surface_size.1 as f32 * self.scale,
        }
    }

    /// Restore the configured scale at the screen origin
    pub fn reset(&mut self) {
        self.origin_x = 0.0;
        self.origin_y = 0.0;
        self.scale = self.default_scale;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0)
    }
}
