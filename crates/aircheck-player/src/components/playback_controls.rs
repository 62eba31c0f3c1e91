//! Transport control row: skip buttons, play/pause, clock, rate.

use aircheck_core::format_clock;
use dioxus::prelude::*;

use crate::controller::PLAYBACK_RATES;

/// Playback control row.
#[component]
#[allow(clippy::float_cmp)] // Offered rates pass through unchanged
pub fn PlaybackControls(
    is_playing: bool,
    playback_rate: f64,
    current_time: f64,
    duration: f64,
    on_play_pause: EventHandler<()>,
    on_back: EventHandler<()>,
    on_forward: EventHandler<()>,
    on_rate_change: EventHandler<f64>,
) -> Element {
    let clock = format!("{} / {}", format_clock(current_time), format_clock(duration));

    rsx! {
        div { class: "playback-controls",
            button {
                class: "playback-controls__btn playback-controls__btn--back",
                onclick: move |_| on_back.call(()),
                // Double left arrow
                svg {
                    width: "20",
                    height: "14",
                    view_box: "0 0 20 14",
                    fill: "currentColor",
                    polygon { points: "10,0 10,14 0,7" }
                    polygon { points: "20,0 20,14 10,7" }
                }
                span { class: "playback-controls__skip-label", "10s" }
            }

            button {
                class: "playback-controls__btn playback-controls__btn--play",
                onclick: move |_| on_play_pause.call(()),
                if is_playing {
                    // Pause bars
                    svg {
                        width: "14",
                        height: "14",
                        view_box: "0 0 14 14",
                        fill: "currentColor",
                        rect { x: "1", y: "0", width: "4", height: "14" }
                        rect { x: "9", y: "0", width: "4", height: "14" }
                    }
                } else {
                    // Play triangle
                    svg {
                        width: "14",
                        height: "14",
                        view_box: "0 0 14 14",
                        fill: "currentColor",
                        polygon { points: "0,0 14,7 0,14" }
                    }
                }
            }

            button {
                class: "playback-controls__btn playback-controls__btn--forward",
                onclick: move |_| on_forward.call(()),
                // Double right arrow
                svg {
                    width: "20",
                    height: "14",
                    view_box: "0 0 20 14",
                    fill: "currentColor",
                    polygon { points: "0,0 10,7 0,14" }
                    polygon { points: "10,0 20,7 10,14" }
                }
                span { class: "playback-controls__skip-label", "10s" }
            }

            span { class: "playback-controls__clock", "{clock}" }

            select {
                class: "playback-controls__rate",
                onchange: move |evt| {
                    if let Ok(rate) = evt.value().parse::<f64>() {
                        on_rate_change.call(rate);
                    }
                },
                for rate in PLAYBACK_RATES {
                    option {
                        key: "{rate}",
                        value: "{rate}",
                        selected: rate == playback_rate,
                        "{rate}x"
                    }
                }
            }
        }
    }
}
