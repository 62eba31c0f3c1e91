//! Player configuration supplied by the embedding host.

use serde::{Deserialize, Serialize};

/// A single playable source, handed through to the audio transport as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioSource {
    /// Media URL.
    pub url: String,
    /// MIME type, e.g. `audio/mpeg`.
    pub mime_type: String,
}

impl AudioSource {
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Static configuration for the radio player.
///
/// Owned by the host and immutable once supplied; the player only reads
/// it. A host that has nothing to show uses the default, which renders an
/// empty player rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Collection logo shown next to the playback controls.
    pub logo_url: String,
    /// Pre-rendered waveform image for the progress display.
    pub waveform_url: String,
    /// Ordered source list for the audio transport.
    pub audio_sources: Vec<AudioSource>,
    /// Broadcast title shown in the header.
    pub title: Option<String>,
    /// Broadcast date line shown in the header.
    pub date: Option<String>,
}

impl PlayerConfig {
    pub fn new(
        logo_url: impl Into<String>,
        waveform_url: impl Into<String>,
        audio_sources: Vec<AudioSource>,
    ) -> Self {
        Self {
            logo_url: logo_url.into(),
            waveform_url: waveform_url.into(),
            audio_sources,
            title: None,
            date: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}
