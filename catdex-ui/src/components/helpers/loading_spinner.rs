//! Loading spinner component

use dioxus::prelude::*;

/// Spinning ring announced to screen readers as a status region
#[component]
pub fn LoadingSpinner(
    /// Label read out and shown beside the ring (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
    /// `data-testid` for the status region
    #[props(default)]
    test_id: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center gap-4 py-16",
            role: "status",
            "aria-live": "polite",
            "data-testid": test_id,
            span { class: "h-10 w-10 rounded-full border-4 border-gray-700 border-t-amber-400 animate-spin" }
            span { class: "text-gray-300 text-sm tracking-wide", "{message}" }
        }
    }
}
