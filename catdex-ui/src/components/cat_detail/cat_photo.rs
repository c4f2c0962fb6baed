//! Cat photo with the back control overlaid

use crate::components::BackButton;
use dioxus::prelude::*;

#[component]
pub fn CatPhoto(url: String, alt: String, on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "relative md:w-1/2 flex-shrink-0",
            div { class: "mb-4", BackButton { on_click: move |_| on_back.call(()) } }
            img {
                class: "w-full rounded-lg shadow-lg object-cover",
                "data-testid": "cat-image",
                src: "{url}",
                alt: "{alt}",
            }
        }
    }
}
