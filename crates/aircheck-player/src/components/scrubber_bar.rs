//! Scrubber slider for jumping around the recording.

use dioxus::prelude::*;

/// Range slider bound to the percent-complete value.
///
/// Emits the dragged percent (0-100); the facade turns that into a
/// seek. The drag math itself belongs to the native range input.
#[component]
pub fn ScrubberBar(value: f64, on_value_change: EventHandler<f64>) -> Element {
    rsx! {
        div { class: "scrubber-bar",
            input {
                class: "scrubber-bar__range",
                r#type: "range",
                min: "0",
                max: "100",
                step: "0.1",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(percent) = evt.value().parse::<f64>() {
                        on_value_change.call(percent);
                    }
                },
            }
        }
    }
}
