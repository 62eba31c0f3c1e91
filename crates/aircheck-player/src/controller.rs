//! Facade logic for the radio player.
//!
//! All user intent funnels through [`PlayerController`]: a component
//! calls a handler, the handler updates the display state and sends the
//! matching transport command. Keeping this out of the components makes
//! the command traffic testable without rendering anything.

use aircheck_core::{PlaybackState, TranscriptEntry};
use aircheck_transport::{TransportCommand, TransportHandle};
use tracing::{debug, error};

/// Seconds skipped by the back/forward controls.
pub const SKIP_SECONDS: f64 = 10.0;

/// Playback rates offered by the rate selector.
pub const PLAYBACK_RATES: [f64; 4] = [0.75, 1.0, 1.25, 1.5];

/// State machine behind the `RadioPlayer` component.
#[derive(Debug, Clone)]
pub struct PlayerController {
    state: PlaybackState,
    transport: TransportHandle,
}

impl PlayerController {
    /// Create a controller speaking to the given transport.
    #[must_use]
    pub fn new(transport: TransportHandle) -> Self {
        Self {
            state: PlaybackState::new(),
            transport,
        }
    }

    /// Set the starting playback rate without commanding the transport.
    #[must_use]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.state.set_rate(rate);
        self
    }

    /// Current display state.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// The transport reported a new playback position.
    pub fn on_time_update(&mut self, position: f64) {
        self.state.apply_time_update(position);
    }

    /// The transport reported the media duration.
    pub fn on_duration_change(&mut self, duration: f64) {
        debug!("duration reported: {duration:.2}s");
        self.state.apply_duration_change(duration);
    }

    /// The user dragged the scrubber to `percent` (0-100).
    ///
    /// The display percent moves immediately; the transport is asked to
    /// seek to the proportional position.
    pub fn on_scrub(&mut self, percent: f64) {
        let target = self.state.apply_scrub(percent.clamp(0.0, 100.0));
        self.dispatch(TransportCommand::SeekTo(target));
    }

    /// The user selected a transcript entry.
    ///
    /// Seeks to the entry's start, nothing more. The display percent
    /// stays put until the transport reports the new position.
    pub fn on_transcript_entry_selected(&self, entry: &TranscriptEntry) {
        self.dispatch(TransportCommand::SeekTo(entry.start_time.max(0.0)));
    }

    /// The user pressed the skip-back control.
    pub fn on_back_pressed(&self) {
        self.dispatch(TransportCommand::SeekBy(-SKIP_SECONDS));
    }

    /// The user pressed the skip-forward control.
    pub fn on_forward_pressed(&self) {
        self.dispatch(TransportCommand::SeekBy(SKIP_SECONDS));
    }

    /// The user pressed play/pause. Sends exactly one command per press.
    pub fn on_play_pause_pressed(&mut self) {
        if self.state.toggle_playing() {
            self.dispatch(TransportCommand::Play);
        } else {
            self.dispatch(TransportCommand::Pause);
        }
    }

    /// The user picked a playback rate.
    pub fn on_rate_change(&mut self, rate: f64) {
        self.state.set_rate(rate);
        self.dispatch(TransportCommand::SetRate(rate));
    }

    /// Send a command to the transport, logging failures.
    fn dispatch(&self, command: TransportCommand) {
        if let Err(e) = self.transport.send(command) {
            error!("failed to send transport command: {e}");
        }
    }
}
