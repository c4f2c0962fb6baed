use crate::api::CatApi;
use crate::Route;
use catdex_ui::display_types::BreedSummary;
use catdex_ui::stores::{initial_breed, selection_for_query};
use catdex_ui::{ApiErrorAlert, BreedSelect, CatGrid, LoadingSpinner, PageContainer};
use dioxus::prelude::*;
use dioxus::router::FromQuery;
use serde::{Deserialize, Serialize};
use std::fmt;

const BREEDS_ERROR_MESSAGE: &str =
    "🐾 Apologies but we could not load the breeds at this time! Miau!";
const IMAGES_ERROR_MESSAGE: &str =
    "🐾 Apologies but we could not load pictures of this breed right now! Miau!";

/// Query string of `/home`: `?breedId=<id>`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeQuery {
    #[serde(rename = "breedId", skip_serializing_if = "Option::is_none")]
    pub breed_id: Option<String>,
}

impl FromQuery for HomeQuery {
    fn from_query(query: &str) -> Self {
        let mut parsed: HomeQuery =
            serde_urlencoded::from_str(query.trim_start_matches('?')).unwrap_or_default();
        parsed.breed_id = parsed.breed_id.filter(|id| !id.is_empty());
        parsed
    }
}

impl fmt::Display for HomeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = serde_urlencoded::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

#[component]
pub fn Home(query: HomeQuery) -> Element {
    let api: CatApi = use_context();
    let breeds = use_resource(move || {
        let api = api.clone();
        async move { api.fetch_breeds().await }
    });

    let read = breeds.read();
    match &*read {
        None => rsx! {
            PageContainer { LoadingSpinner { message: "Loading breeds..." } }
        },
        Some(Err(e)) => {
            tracing::warn!("Failed to load breeds: {}", e);
            rsx! {
                PageContainer { ApiErrorAlert { message: BREEDS_ERROR_MESSAGE.to_string() } }
            }
        }
        Some(Ok(list)) => {
            let list = list.clone();
            rsx! {
                BreedBrowser { breeds: list, requested: query.breed_id }
            }
        }
    }
}

#[component]
fn BreedBrowser(breeds: Vec<BreedSummary>, requested: ReadSignal<Option<String>>) -> Element {
    let api: CatApi = use_context();
    let initial = initial_breed(&breeds, requested.peek().as_deref()).map(|b| b.id.clone());
    let mut selected = use_signal(move || initial);
    let limit = api.config().images_per_page;

    // Follow the URL when it changes under a mounted browser (e.g. the title link)
    let listed = breeds.clone();
    use_effect(move || {
        let requested = requested();
        let current = selected.peek().clone();
        if let Some(id) = selection_for_query(&listed, current.as_deref(), requested.as_deref()) {
            selected.set(Some(id));
        }
    });

    let images = use_resource(move || {
        let api = api.clone();
        let breed_id = selected();
        async move {
            match breed_id {
                Some(id) => api.fetch_breed_images(&id, limit).await,
                None => Ok(vec![]),
            }
        }
    });

    let grid = match &*images.read() {
        None => rsx! { LoadingSpinner { message: "Fetching cats..." } },
        Some(Err(e)) => {
            tracing::warn!("Failed to load breed images: {}", e);
            rsx! { ApiErrorAlert { message: IMAGES_ERROR_MESSAGE.to_string() } }
        }
        Some(Ok(cats)) => rsx! {
            CatGrid {
                cats: cats.clone(),
                on_cat_click: move |cat_id: String| {
                    navigator().push(Route::CatDetail { cat_id });
                },
            }
        },
    };

    rsx! {
        PageContainer {
            BreedSelect {
                breeds,
                selected: selected(),
                on_select: move |breed_id: String| {
                    selected.set(Some(breed_id.clone()));
                    navigator()
                        .replace(Route::Home {
                            query: HomeQuery {
                                breed_id: Some(breed_id),
                            },
                        });
                },
            }
            {grid}
        }
    }
}
