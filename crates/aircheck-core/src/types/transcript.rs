//! Transcript types for timed broadcast text.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single timed transcript entry.
///
/// The player treats entries as opaque apart from `start_time`, which
/// drives seek-on-select; the remaining fields belong to the transcript
/// view's own display logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptEntry {
    /// Entry identifier (position within the source transcript).
    pub id: u32,
    /// Start of the spoken range, in seconds.
    pub start_time: f64,
    /// End of the spoken range, in seconds.
    pub end_time: f64,
    /// Spoken text, or a label for non-speech ranges.
    pub text: String,
    /// Marks non-speech ranges such as music beds and station idents.
    #[serde(default)]
    pub is_music: bool,
}

impl TranscriptEntry {
    pub fn new(id: u32, start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            id,
            start_time,
            end_time,
            text: text.into(),
            is_music: false,
        }
    }

    #[must_use]
    pub const fn music(mut self) -> Self {
        self.is_music = true;
        self
    }

    /// Whether this entry is active at the given playback time.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }

    /// Case-insensitive text match, used for search highlighting.
    pub fn matches(&self, term: &str) -> bool {
        !term.is_empty() && self.text.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Ordered transcript for one broadcast.
///
/// Owned externally and supplied ready-made; the player never produces
/// transcript data itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TranscriptConfig {
    /// Entries ordered by start time.
    pub entries: Vec<TranscriptEntry>,
}

impl TranscriptConfig {
    pub const fn new(entries: Vec<TranscriptEntry>) -> Self {
        Self { entries }
    }

    /// Parse a transcript from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The entry active at the given time, if any.
    pub fn entry_at(&self, time: f64) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|entry| entry.contains(time))
    }

    /// Index of the entry active at the given time.
    pub fn active_index(&self, time: f64) -> Option<usize> {
        self.entries.iter().position(|entry| entry.contains(time))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranscriptConfig {
        TranscriptConfig::new(vec![
            TranscriptEntry::new(0, 0.0, 6.5, "[station ident]").music(),
            TranscriptEntry::new(1, 6.5, 14.0, "From Washington, this is the news."),
            TranscriptEntry::new(2, 14.0, 30.0, "Our top story this hour."),
        ])
    }

    #[test]
    fn test_entry_at_boundaries() {
        let transcript = sample();
        assert_eq!(transcript.entry_at(0.0).map(|e| e.id), Some(0));
        // Start of an entry belongs to it, the end does not.
        assert_eq!(transcript.entry_at(6.5).map(|e| e.id), Some(1));
        assert_eq!(transcript.entry_at(29.999).map(|e| e.id), Some(2));
        assert_eq!(transcript.entry_at(30.0).map(|e| e.id), None);
    }

    #[test]
    fn test_active_index() {
        let transcript = sample();
        assert_eq!(transcript.active_index(10.0), Some(1));
        assert_eq!(transcript.active_index(45.0), None);
        assert_eq!(TranscriptConfig::default().active_index(0.0), None);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let entry = TranscriptEntry::new(1, 0.0, 5.0, "From Washington, this is the news.");
        assert!(entry.matches("washington"));
        assert!(entry.matches("NEWS"));
        assert!(!entry.matches("weather"));
        // An empty term matches nothing rather than everything.
        assert!(!entry.matches(""));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "entries": [
                { "id": 0, "start_time": 0.0, "end_time": 4.5, "text": "[music]", "is_music": true },
                { "id": 1, "start_time": 4.5, "end_time": 9.0, "text": "Good evening." }
            ]
        }"#;

        let transcript = TranscriptConfig::from_json(json).unwrap();
        assert_eq!(transcript.len(), 2);
        assert!(transcript.entries[0].is_music);
        // is_music defaults to false when absent.
        assert!(!transcript.entries[1].is_music);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(TranscriptConfig::from_json("{ not json").is_err());
    }
}
