use std::fmt;

use clap::Parser;

use crate::application::{MAX_TICKS_PER_FRAME, MIN_TICKS_PER_FRAME};
use crate::rendering::{CELL_SIZE, RenderConfig};

pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;

/// Command-line options for the viewer
#[derive(Parser, Debug, Clone)]
#[command(name = "life_canvas", about = "Interactive Game of Life viewer")]
pub struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Cell side length in pixels
    #[arg(long, default_value_t = CELL_SIZE)]
    pub cell_size: u32,

    /// Engine ticks per displayed frame
    #[arg(long, default_value_t = MIN_TICKS_PER_FRAME)]
    pub ticks_per_frame: u32,

    /// On-screen magnification of the grid surface
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width or height of zero
    EmptyGrid { width: u32, height: u32 },
    ZeroCellSize,
    /// Surface would exceed the image backend's size limit
    SurfaceTooLarge { width: u64, height: u64 },
    TicksOutOfRange(u32),
    InvalidScale(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::ZeroCellSize => write!(f, "cell size must be at least 1 pixel"),
            Self::SurfaceTooLarge { width, height } => write!(
                f,
                "surface of {width}x{height} pixels exceeds the {} pixel limit",
                u16::MAX
            ),
            Self::TicksOutOfRange(ticks) => write!(
                f,
                "ticks per frame must be in {MIN_TICKS_PER_FRAME}..={MAX_TICKS_PER_FRAME}, got {ticks}"
            ),
            Self::InvalidScale(scale) => write!(f, "scale must be a positive number, got {scale}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Args {
    /// Validate the options and build the render configuration
    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let pitch = u64::from(self.cell_size) + 1;
        let surface_w = pitch * u64::from(self.width) + 1;
        let surface_h = pitch * u64::from(self.height) + 1;
        if surface_w > u64::from(u16::MAX) || surface_h > u64::from(u16::MAX) {
            return Err(ConfigError::SurfaceTooLarge { width: surface_w, height: surface_h });
        }

        if !(MIN_TICKS_PER_FRAME..=MAX_TICKS_PER_FRAME).contains(&self.ticks_per_frame) {
            return Err(ConfigError::TicksOutOfRange(self.ticks_per_frame));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }

        Ok(RenderConfig {
            cell_size: self.cell_size,
            display_scale: self.scale,
            ..RenderConfig::default()
        })
    }
}
