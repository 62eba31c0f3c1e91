//! Waveform display with a progress overlay.

use dioxus::prelude::*;

use super::ScrubberBar;

/// Waveform image with the played portion marked by an overlay.
///
/// With an empty `waveform_url` the overlay still tracks progress over
/// the bare track background. When `interactive`, a transparent
/// [`ScrubberBar`] sits over the image and forwards drags.
#[component]
pub fn WaveformProgress(
    waveform_url: String,
    percent_complete: f64,
    interactive: bool,
    on_value_change: EventHandler<f64>,
) -> Element {
    rsx! {
        div { class: "waveform-progress",
            if !waveform_url.is_empty() {
                img {
                    class: "waveform-progress__image",
                    src: "{waveform_url}",
                    alt: "",
                }
            }
            div {
                class: "waveform-progress__played",
                style: "width: {percent_complete}%",
            }
            if interactive {
                ScrubberBar {
                    value: percent_complete,
                    on_value_change: move |percent| on_value_change.call(percent),
                }
            }
        }
    }
}
