//! Back button component

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

/// Back button with customizable text and callback
#[component]
pub fn BackButton(
    /// Text to display (default: "Back")
    #[props(default = "Back".to_string())]
    text: String,
    /// Callback when button is clicked
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "inline-flex items-center text-gray-400 hover:text-white transition-colors",
            "data-testid": "back-button",
            "aria-label": "{text}",
            onclick: move |_| on_click.call(()),
            ArrowLeftIcon { class: "w-5 h-5 mr-2" }
            "{text}"
        }
    }
}
