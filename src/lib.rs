// Domain layer - cell buffer decoding, engine interface, edit intents
pub mod domain;

// Application layer - playback control and session coordination
pub mod application;

// Infrastructure layer - UI, rendering, input, configuration
pub mod ui;
pub mod rendering;
pub mod input;
pub mod config;

// Re-exports for convenience
pub use domain::{CellView, EditIntent, Engine, Modifiers};
pub use application::{AnimationController, PlaybackState, Session, Viewport};
pub use rendering::{GridLayout, RenderConfig};
pub use config::{Args, ConfigError};
