//! The player facade component.

use aircheck_core::{PlayerConfig, TranscriptConfig};
use aircheck_transport::TransportHandle;
use dioxus::prelude::*;

use crate::controller::PlayerController;

use super::{AudioElement, PlaybackControls, SearchSection, TranscriptView, WaveformProgress};

/// Radio player facade.
///
/// Owns the [`PlayerController`] and wires every child widget to it:
/// transport reports flow in through [`AudioElement`], user intent flows
/// back out as transport commands. The children stay presentational;
/// this component is the only place the pieces meet.
#[component]
pub fn RadioPlayer(
    config: Option<PlayerConfig>,
    transcript_config: Option<TranscriptConfig>,
    #[props(default = 1.0)] playback_rate: f64,
    transport: TransportHandle,
) -> Element {
    let config = config.unwrap_or_default();

    let transport_for_controller = transport.clone();
    let mut controller = use_context_provider(move || {
        Signal::new(PlayerController::new(transport_for_controller).with_rate(playback_rate))
    });

    let state = controller.read().state();
    let mut search_query = use_signal(String::new);
    let query = search_query.read().clone();

    rsx! {
        div { class: "radio-player",
            AudioElement {
                sources: config.audio_sources.clone(),
                playback_rate: state.playback_rate,
                transport: transport.clone(),
                on_time_update: move |position| controller.write().on_time_update(position),
                on_duration_change: move |duration| controller.write().on_duration_change(duration),
            }

            header { class: "radio-player__header",
                if !config.logo_url.is_empty() {
                    img {
                        class: "radio-player__logo",
                        src: "{config.logo_url}",
                        alt: "Station logo",
                    }
                }
                div { class: "radio-player__titles",
                    if let Some(title) = &config.title {
                        h1 { class: "radio-player__title", "{title}" }
                    }
                    if let Some(date) = &config.date {
                        p { class: "radio-player__date", "{date}" }
                    }
                }
            }

            WaveformProgress {
                waveform_url: config.waveform_url.clone(),
                percent_complete: state.percent_complete,
                interactive: true,
                on_value_change: move |percent| controller.write().on_scrub(percent),
            }

            PlaybackControls {
                is_playing: state.is_playing,
                playback_rate: state.playback_rate,
                current_time: state.current_time,
                duration: state.duration,
                on_play_pause: move |()| controller.write().on_play_pause_pressed(),
                on_back: move |()| controller.read().on_back_pressed(),
                on_forward: move |()| controller.read().on_forward_pressed(),
                on_rate_change: move |rate| controller.write().on_rate_change(rate),
            }

            if let Some(transcript) = transcript_config {
                section { class: "radio-player__transcript",
                    SearchSection {
                        query: query.clone(),
                        on_search: move |term| search_query.set(term),
                    }
                    TranscriptView {
                        transcript,
                        current_time: state.current_time,
                        search_term: query,
                        on_entry_selected: move |entry| {
                            controller.read().on_transcript_entry_selected(&entry);
                        },
                    }
                }
            }
        }
    }
}
