use crate::api::{self, CatApi};
use crate::pages::HomeQuery;
use crate::Route;
use catdex_ui::display_types::CatImage;
use catdex_ui::stores::{CatDetailCycle, CatDetailState};
use catdex_ui::CatDetailView;
use dioxus::prelude::*;

/// Where the back control leads
#[derive(Debug, PartialEq)]
enum BackTarget {
    /// Home with the cat's breed preselected
    Home(HomeQuery),
    /// Previous history entry
    History,
}

fn back_target(state: &CatDetailState) -> BackTarget {
    match state {
        CatDetailState::Loaded(cat) => breed_target(cat),
        _ => BackTarget::History,
    }
}

fn breed_target(cat: &CatImage) -> BackTarget {
    match cat.primary_breed() {
        Some(breed) => BackTarget::Home(HomeQuery {
            breed_id: Some(breed.id.clone()),
        }),
        None => BackTarget::History,
    }
}

#[component]
pub fn CatDetail(cat_id: ReadSignal<String>) -> Element {
    let api: CatApi = use_context();
    let mut cycle = use_signal(CatDetailCycle::new);

    // Re-runs only when the route's cat id changes; the previous future is
    // cancelled and its ticket is stale anyway.
    let _fetch = use_resource(move || {
        let api = api.clone();
        let id = cat_id();
        async move {
            let Some(ticket) = cycle.write().request(Some(&id)) else {
                return;
            };
            let outcome = api::load_cat_detail(&api, &ticket).await;
            cycle.write().resolve(&ticket, outcome);
        }
    });

    let state = cycle.read().state().clone();

    rsx! {
        CatDetailView {
            state,
            on_back: move |_| {
                match back_target(cycle.read().state()) {
                    BackTarget::Home(query) => {
                        navigator().push(Route::Home { query });
                    }
                    BackTarget::History => navigator().go_back(),
                }
            },
        }
    }
}
