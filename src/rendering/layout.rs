/// Pixel geometry of the grid surface.
///
/// Cells are `cell_size` pixels square with a one pixel gridline between
/// them and around the border, so each cell occupies a pitch of
/// `cell_size + 1` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl GridLayout {
    pub const fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self { width, height, cell_size }
    }

    /// Distance between consecutive gridlines
    #[inline]
    pub const fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    /// Surface size in pixels: `(cell_size + 1) * dimension + 1`
    pub const fn surface_size(&self) -> (u32, u32) {
        (
            self.pitch() * self.width + 1,
            self.pitch() * self.height + 1,
        )
    }

    /// Top-left pixel of the square for (row, col)
    #[inline]
    pub const fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (col * self.pitch() + 1, row * self.pitch() + 1)
    }

    /// Map a point in surface pixels to (row, col).
    /// Points on or past the far border clamp to the last row/column.
    pub fn to_grid_coord(&self, x: f32, y: f32) -> (u32, u32) {
        let pitch = self.pitch() as f32;
        let row = ((y / pitch).floor().max(0.0) as u32).min(self.height.saturating_sub(1));
        let col = ((x / pitch).floor().max(0.0) as u32).min(self.width.saturating_sub(1));
        (row, col)
    }
}
