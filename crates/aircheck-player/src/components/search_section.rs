//! Transcript search input.

use dioxus::prelude::*;

/// Search box for the transcript column.
///
/// Reports every edit so matches highlight as the user types; the clear
/// button reports an empty term.
#[component]
pub fn SearchSection(query: String, on_search: EventHandler<String>) -> Element {
    rsx! {
        div { class: "search-section",
            svg {
                class: "search-section__icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path {
                    d: "M15.5 14h-.79l-.28-.27a6.5 6.5 0 1 0-.7.7l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0A4.5 4.5 0 1 1 14 9.5 4.5 4.5 0 0 1 9.5 14z"
                }
            }
            input {
                class: "search-section__input",
                r#type: "text",
                placeholder: "Search transcript...",
                value: "{query}",
                oninput: move |evt| on_search.call(evt.value()),
            }
            if !query.is_empty() {
                button {
                    class: "search-section__clear",
                    onclick: move |_| on_search.call(String::new()),
                    "\u{00d7}"
                }
            }
        }
    }
}
