//! Play/pause lifecycle and frame cadence.
//!
//! Frames are requested from an owned [`FrameScheduler`] that the host loop
//! polls once per display refresh. The controller keeps at most one request
//! outstanding and cancels it synchronously on pause.

use tracing::info;

/// Handle to a pending frame request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(u64);

/// Single-slot queue of display-synchronized frame callbacks
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a callback on the next display refresh
    pub fn request(&mut self) -> FrameHandle {
        debug_assert!(self.pending.is_none(), "frame already requested");
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(handle);
        handle
    }

    /// Drop a pending request. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Called by the host once per display refresh; yields the due request
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Label of the play/pause control while paused
pub const PLAY_LABEL: &str = "Play";
/// Label of the play/pause control while playing
pub const PAUSE_LABEL: &str = "Pause";

/// Owns the playback state and the schedule handle of the next frame step
#[derive(Debug, Default)]
pub struct AnimationController {
    state: PlaybackState,
    scheduled: Option<FrameHandle>,
    scheduler: FrameScheduler,
}

impl AnimationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Whether a frame step is currently scheduled
    pub fn has_pending_frame(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Text for the play/pause control: the action a click would take
    pub fn label(&self) -> &'static str {
        match self.state {
            PlaybackState::Paused => PLAY_LABEL,
            PlaybackState::Playing => PAUSE_LABEL,
        }
    }

    /// Paused -> Playing and schedule the first frame step.
    /// No effect while already playing.
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        self.state = PlaybackState::Playing;
        self.scheduled = Some(self.scheduler.request());
        info!("playback started");
    }

    /// Playing -> Paused and cancel the pending frame step.
    /// No effect while already paused.
    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.state = PlaybackState::Paused;
        if let Some(handle) = self.scheduled.take() {
            self.scheduler.cancel(handle);
        }
        info!("playback paused");
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Poll the scheduler on a display refresh.
    /// Returns true when a frame step is due and must be run now,
    /// followed by [`AnimationController::complete_frame`].
    pub fn poll_frame(&mut self) -> bool {
        match self.scheduler.fire() {
            Some(handle) => {
                debug_assert_eq!(self.scheduled, Some(handle));
                self.scheduled = None;
                true
            }
            None => false,
        }
    }

    /// Finish a frame step: schedule the next one if still playing
    pub fn complete_frame(&mut self) {
        if self.is_playing() && self.scheduled.is_none() {
            self.scheduled = Some(self.scheduler.request());
        }
    }
}
