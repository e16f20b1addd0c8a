mod canvas;
mod layout;
mod present;

pub use canvas::Canvas;
pub use layout::GridLayout;
pub use present::{SurfaceTexture, draw_controls};

use macroquad::color::Color;
use macroquad::texture::Image;
use crate::domain::{CellView, Engine};

/// Side length of a cell in pixels
pub const CELL_SIZE: u32 = 5;
pub const GRID_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0); // #CCCCCC
pub const DEAD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const ALIVE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Look of the grid surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub cell_size: u32,
    pub grid_color: Color,
    pub dead_color: Color,
    pub alive_color: Color,
    /// On-screen magnification of the surface, independent of its pixel size
    pub display_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            grid_color: GRID_COLOR,
            dead_color: DEAD_COLOR,
            alive_color: ALIVE_COLOR,
            display_scale: 1.0,
        }
    }
}

impl RenderConfig {
    /// Layout for a grid of the given dimensions
    pub fn layout(&self, width: u32, height: u32) -> GridLayout {
        GridLayout::new(width, height, self.cell_size)
    }

    /// Colors converted once per repaint instead of once per cell
    pub fn palette(&self) -> Palette {
        Palette {
            grid: self.grid_color.into(),
            dead: self.dead_color.into(),
            alive: self.alive_color.into(),
        }
    }
}

/// RGBA8 colors ready to be written into a canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub grid: [u8; 4],
    pub dead: [u8; 4],
    pub alive: [u8; 4],
}

/// Allocate a surface sized for `layout`, filled with the gridline color.
///
/// Panics if the layout does not fit the image backend's 16-bit size;
/// configuration is validated before this point.
pub fn new_surface(layout: &GridLayout, config: &RenderConfig) -> Image {
    let (w, h) = layout.surface_size();
    let w = u16::try_from(w).expect("surface width exceeds u16");
    let h = u16::try_from(h).expect("surface height exceeds u16");
    Image::gen_image_color(w, h, config.grid_color)
}

/// Draw `width + 1` vertical and `height + 1` horizontal hairlines.
/// Depends only on the layout, never on cell state.
pub fn draw_grid<C: Canvas + ?Sized>(canvas: &mut C, layout: &GridLayout, palette: &Palette) {
    let (surface_w, surface_h) = layout.surface_size();
    let pitch = layout.pitch();

    for i in 0..=layout.width {
        canvas.fill_rect(i * pitch, 0, 1, surface_h, palette.grid);
    }
    for j in 0..=layout.height {
        canvas.fill_rect(0, j * pitch, surface_w, 1, palette.grid);
    }
}

/// Fill every cell square with its alive or dead color, row by row
pub fn draw_cells<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &GridLayout,
    cells: &CellView<'_>,
    palette: &Palette,
) {
    debug_assert_eq!(cells.dimensions(), (layout.width, layout.height));
    let size = layout.cell_size;
    let mut index = 0;

    for row in 0..layout.height {
        for col in 0..layout.width {
            let (x, y) = layout.cell_origin(row, col);
            let color = if cells.is_alive(index) { palette.alive } else { palette.dead };
            canvas.fill_rect(x, y, size, size, color);
            index += 1;
        }
    }
}

/// One full repaint: gridlines, then cells.
/// The cell buffer is borrowed from the engine here and released on return.
pub fn repaint<C, E>(canvas: &mut C, engine: &E, layout: &GridLayout, config: &RenderConfig)
where
    C: Canvas + ?Sized,
    E: Engine + ?Sized,
{
    let palette = config.palette();
    draw_grid(canvas, layout, &palette);

    let cells = CellView::new(engine.cells(), layout.width, layout.height);
    draw_cells(canvas, layout, &cells, &palette);
}
