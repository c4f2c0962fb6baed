//! Breed details panel

use crate::display_types::Breed;
use dioxus::prelude::*;

/// Lists the breed's fields. Without a breed every line renders blank.
#[component]
pub fn DetailsPanel(breed: Option<Breed>) -> Element {
    let lines = breed.unwrap_or_default().detail_lines();

    rsx! {
        div { class: "flex-1 space-y-3 text-gray-200",
            for line in lines {
                p { key: "{line.label}", class: "leading-relaxed", {line.text()} }
            }
        }
    }
}
