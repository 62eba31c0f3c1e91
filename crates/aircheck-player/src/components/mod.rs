//! Dioxus components making up the radio player UI.

mod audio_element;
mod playback_controls;
mod radio_player;
mod scrubber_bar;
mod search_section;
mod transcript_view;
mod waveform_progress;

pub use audio_element::AudioElement;
pub use playback_controls::PlaybackControls;
pub use radio_player::RadioPlayer;
pub use scrubber_bar::ScrubberBar;
pub use search_section::SearchSection;
pub use transcript_view::TranscriptView;
pub use waveform_progress::WaveformProgress;
