mod animation;
mod session;
mod viewport;

pub use animation::{
    AnimationController, FrameHandle, FrameScheduler, PlaybackState, PAUSE_LABEL, PLAY_LABEL,
};
pub use session::{Session, MAX_TICKS_PER_FRAME, MIN_TICKS_PER_FRAME};
pub use viewport::Viewport;
