use crate::pages::HomeQuery;
use crate::Route;
use catdex_ui::PageContainer;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        PageContainer {
            div { class: "text-center py-16",
                h1 { class: "text-2xl font-semibold mb-4", "Page not found" }
                p { class: "text-gray-400 mb-6", "Nothing lives at \"/{path}\"." }
                Link {
                    class: "text-blue-400 hover:text-blue-300",
                    to: Route::Home {
                        query: HomeQuery::default(),
                    },
                    "Back to all breeds"
                }
            }
        }
    }
}
