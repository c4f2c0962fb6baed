//! Breed selector for the home page

use crate::display_types::BreedSummary;
use dioxus::prelude::*;

#[component]
pub fn BreedSelect(
    breeds: Vec<BreedSummary>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let selected = selected.unwrap_or_default();

    rsx! {
        div { class: "mb-6",
            label { class: "block text-sm text-gray-400 mb-2", r#for: "breed-select", "Breed" }
            select {
                id: "breed-select",
                class: "bg-gray-800 text-white border border-gray-600 rounded px-3 py-2 w-full md:w-80",
                "data-testid": "breed-select",
                value: "{selected}",
                onchange: move |evt| on_select.call(evt.value()),
                for breed in breeds {
                    option {
                        key: "{breed.id}",
                        value: "{breed.id}",
                        selected: breed.id == selected,
                        "{breed.name}"
                    }
                }
            }
        }
    }
}
