//! Scrolling transcript with the current entry highlighted.

use aircheck_core::{format_clock, TranscriptConfig, TranscriptEntry};
use dioxus::prelude::*;

/// Transcript listing with per-entry timestamps.
///
/// The entry covering `current_time` is highlighted; entries matching a
/// non-empty `search_term` are marked. Clicking an entry emits it so
/// the facade can seek to its start.
#[component]
pub fn TranscriptView(
    transcript: TranscriptConfig,
    current_time: f64,
    search_term: String,
    on_entry_selected: EventHandler<TranscriptEntry>,
) -> Element {
    let active = transcript.active_index(current_time);
    let searching = !search_term.is_empty();

    rsx! {
        div { class: "transcript-view",
            if transcript.is_empty() {
                div { class: "transcript-view__empty", "No transcript available" }
            } else {
                for (index, entry) in transcript.entries.iter().enumerate() {
                    TranscriptRow {
                        key: "{entry.id}",
                        entry: entry.clone(),
                        is_active: active == Some(index),
                        is_match: searching && entry.matches(&search_term),
                        on_select: move |entry| on_entry_selected.call(entry),
                    }
                }
            }
        }
    }
}

/// Single transcript entry row.
#[component]
fn TranscriptRow(
    entry: TranscriptEntry,
    is_active: bool,
    is_match: bool,
    on_select: EventHandler<TranscriptEntry>,
) -> Element {
    let clock = format_clock(entry.start_time);
    let selected = entry.clone();

    rsx! {
        div {
            class: "transcript-view__entry",
            class: if is_active { "transcript-view__entry--active" },
            class: if is_match { "transcript-view__entry--match" },
            class: if entry.is_music { "transcript-view__entry--music" },
            onclick: move |_| on_select.call(selected.clone()),
            span { class: "transcript-view__time", "{clock}" }
            if entry.is_music {
                em { class: "transcript-view__text", "(music)" }
            } else {
                span { class: "transcript-view__text", "{entry.text}" }
            }
        }
    }
}
