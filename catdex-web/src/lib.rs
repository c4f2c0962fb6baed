pub mod api;
pub mod config;
pub mod error;
pub mod pages;

use api::CatApi;
use config::ApiConfig;
use dioxus::prelude::*;
use pages::{AppLayout, CatDetail, Home, HomeQuery, NotFound};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Tailwind Play CDN; the views use Tailwind utility classes
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Home { query: HomeQuery::default() })]
    #[layout(AppLayout)]
    #[route("/home?:..query")]
    Home { query: HomeQuery },
    #[route("/cats/:cat_id")]
    CatDetail { cat_id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| CatApi::new(ApiConfig::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
