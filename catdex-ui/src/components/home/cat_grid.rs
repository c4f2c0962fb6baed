//! Grid of cat images linking to their detail pages

use crate::display_types::CatImage;
use dioxus::prelude::*;

#[component]
pub fn CatGrid(cats: Vec<CatImage>, on_cat_click: EventHandler<String>) -> Element {
    if cats.is_empty() {
        return rsx! {
            p { class: "text-gray-400", "No cats found for this breed." }
        };
    }

    rsx! {
        div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
            for cat in cats {
                CatCard { key: "{cat.id}", cat: cat.clone(), on_click: on_cat_click }
            }
        }
    }
}

/// Square thumbnail for one cat
#[component]
pub fn CatCard(cat: CatImage, on_click: EventHandler<String>) -> Element {
    let id = cat.id.clone();
    let alt = cat.alt_text().to_string();

    rsx! {
        button {
            class: "aspect-square overflow-hidden rounded-lg bg-gray-800 hover:ring-2 hover:ring-blue-500 transition",
            "data-testid": "cat-card",
            onclick: move |_| on_click.call(id.clone()),
            img {
                class: "w-full h-full object-cover",
                src: "{cat.url}",
                alt: "{alt}",
                "loading": "lazy",
            }
        }
    }
}
