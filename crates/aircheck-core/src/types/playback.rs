//! Playback display state and the derived-percent math.

/// Percent-complete for a position within a duration.
///
/// Defined as 0 while the duration is unknown (zero or negative), so the
/// display layer never sees NaN.
pub fn percent_complete(current_time: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        current_time / duration * 100.0
    } else {
        0.0
    }
}

/// Format seconds as M:SS or H:MM:SS for display.
pub fn format_clock(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// UI-facing playback state owned by the player facade.
///
/// Created with defaults when the player mounts and mutated only by the
/// facade's event handlers. Every mutation that touches `current_time` or
/// `duration` re-derives `percent_complete`, so the two never drift
/// between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Whether the user has playback running. Optimistic: toggled by the
    /// play/pause control only, never by the transport.
    pub is_playing: bool,
    /// Current playback position in seconds.
    pub current_time: f64,
    /// Media duration in seconds; 0 until the transport reports it.
    pub duration: f64,
    /// Position as a 0-100 fraction of the duration.
    pub percent_complete: f64,
    /// Playback rate multiplier.
    pub playback_rate: f64,
}

impl PlaybackState {
    pub const fn new() -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            percent_complete: 0.0,
            playback_rate: 1.0,
        }
    }

    /// Apply a position report from the transport.
    pub fn apply_time_update(&mut self, current_time: f64) {
        self.current_time = current_time.max(0.0);
        self.percent_complete = percent_complete(self.current_time, self.duration);
    }

    /// Apply a duration report from the transport.
    ///
    /// Also re-derives the percent: a duration arriving after the first
    /// position reports would otherwise leave a stale 0% until the next
    /// tick.
    pub fn apply_duration_change(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
        self.percent_complete = percent_complete(self.current_time, self.duration);
    }

    /// Apply a scrub to the given percent (0-100); returns the target
    /// time to seek to.
    ///
    /// The percent is applied immediately, without waiting for the
    /// transport to confirm the new position.
    pub fn apply_scrub(&mut self, percent: f64) -> f64 {
        let target = self.duration * percent / 100.0;
        self.percent_complete = percent;
        target
    }

    /// Toggle the playing flag; returns the new value.
    pub fn toggle_playing(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        self.is_playing
    }

    /// Set the playback rate.
    pub fn set_rate(&mut self, rate: f64) {
        self.playback_rate = rate;
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)] // Derivations below are exact

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_percent_complete_example() {
        // duration=200, current_time=50 -> 25%.
        assert_eq!(percent_complete(50.0, 200.0), 25.0);
    }

    #[test]
    fn test_percent_complete_zero_duration() {
        assert_eq!(percent_complete(50.0, 0.0), 0.0);
        assert!(!percent_complete(50.0, 0.0).is_nan());
    }

    #[test]
    fn test_time_update_derives_percent() {
        let mut state = PlaybackState::new();
        state.apply_duration_change(200.0);
        state.apply_time_update(50.0);
        assert_eq!(state.current_time, 50.0);
        assert_eq!(state.percent_complete, 25.0);
    }

    #[test]
    fn test_time_update_before_duration_is_known() {
        let mut state = PlaybackState::new();
        state.apply_time_update(12.0);
        assert_eq!(state.percent_complete, 0.0);
        assert!(state.percent_complete.is_finite());
    }

    #[test]
    fn test_duration_change_rederives_percent() {
        let mut state = PlaybackState::new();
        state.apply_time_update(50.0);
        state.apply_duration_change(200.0);
        assert_eq!(state.percent_complete, 25.0);
    }

    #[test]
    fn test_negative_inputs_are_clamped() {
        let mut state = PlaybackState::new();
        state.apply_duration_change(-10.0);
        state.apply_time_update(-3.0);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.percent_complete, 0.0);
    }

    #[test]
    fn test_scrub_is_optimistic() {
        let mut state = PlaybackState::new();
        state.apply_duration_change(200.0);
        let target = state.apply_scrub(50.0);
        assert_eq!(target, 100.0);
        assert_eq!(state.percent_complete, 50.0);
        // The position itself only moves on the next time update.
        assert_eq!(state.current_time, 0.0);
    }

    #[test]
    fn test_scrub_with_unknown_duration_targets_start() {
        let mut state = PlaybackState::new();
        let target = state.apply_scrub(75.0);
        assert_eq!(target, 0.0);
        assert_eq!(state.percent_complete, 75.0);
    }

    #[test]
    fn test_toggle_playing() {
        let mut state = PlaybackState::new();
        assert!(state.toggle_playing());
        assert!(state.is_playing);
        assert!(!state.toggle_playing());
        assert!(!state.is_playing);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(65.4), "1:05");
        assert_eq!(format_clock(3661.0), "1:01:01");
        assert_eq!(format_clock(-5.0), "0:00");
    }

    proptest! {
        #[test]
        fn percent_matches_ratio(current in 0.0f64..86_400.0, duration in 0.001f64..86_400.0) {
            prop_assert_eq!(percent_complete(current, duration), current / duration * 100.0);
        }

        #[test]
        fn percent_is_never_nan(current in 0.0f64..86_400.0, duration in 0.0f64..86_400.0) {
            prop_assert!(!percent_complete(current, duration).is_nan());
        }

        #[test]
        fn scrub_seeks_proportionally(percent in 0.0f64..=100.0, duration in 0.001f64..86_400.0) {
            let mut state = PlaybackState::new();
            state.apply_duration_change(duration);
            let target = state.apply_scrub(percent);
            prop_assert_eq!(target, duration * percent / 100.0);
            prop_assert_eq!(state.percent_complete, percent);
        }
    }
}
