use crate::pages::HomeQuery;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            header { class: "border-b border-gray-800 px-6 py-4",
                Link {
                    class: "text-xl font-semibold hover:text-gray-300",
                    to: Route::Home {
                        query: HomeQuery::default(),
                    },
                    "🐾 Catdex"
                }
            }
            main { Outlet::<Route> {} }
        }
    }
}
