//! Core domain types for Aircheck.

pub mod config;
pub mod playback;
pub mod transcript;

pub use config::{AudioSource, PlayerConfig};
pub use playback::{format_clock, percent_complete, PlaybackState};
pub use transcript::{TranscriptConfig, TranscriptEntry};
