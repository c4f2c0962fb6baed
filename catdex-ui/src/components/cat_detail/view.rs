//! Cat detail view

use super::{CatPhoto, DetailsPanel};
use crate::components::{ApiErrorAlert, LoadingSpinner, PageContainer};
use crate::display_types::Breed;
use crate::stores::CatDetailState;
use dioxus::prelude::*;

/// Message shown for both "not found" and failed requests
pub const CAT_DETAIL_ERROR_MESSAGE: &str =
    "🐾 Apologies but we could not load the cat's details at this time! Miau!";

/// The one subtree the detail page shows for a state
#[derive(Debug, PartialEq)]
pub enum DetailSubtree<'a> {
    Loading,
    Error {
        message: &'static str,
    },
    Content {
        src: &'a str,
        alt: &'a str,
        breed: Option<&'a Breed>,
    },
}

impl DetailSubtree<'_> {
    pub fn test_id(&self) -> &'static str {
        match self {
            DetailSubtree::Loading => "cat-detail-loading",
            DetailSubtree::Error { .. } => "cat-detail-error",
            DetailSubtree::Content { .. } => "cat-detail-content",
        }
    }
}

pub fn detail_subtree(state: &CatDetailState) -> DetailSubtree<'_> {
    match state {
        CatDetailState::Loading => DetailSubtree::Loading,
        CatDetailState::Unavailable => DetailSubtree::Error {
            message: CAT_DETAIL_ERROR_MESSAGE,
        },
        CatDetailState::Loaded(cat) => DetailSubtree::Content {
            src: &cat.url,
            alt: cat.alt_text(),
            breed: cat.primary_breed(),
        },
    }
}

#[component]
pub fn CatDetailView(state: CatDetailState, on_back: EventHandler<()>) -> Element {
    let subtree = detail_subtree(&state);
    let test_id = subtree.test_id().to_string();

    match subtree {
        DetailSubtree::Loading => rsx! {
            LoadingSpinner { message: "Fetching cat...", test_id }
        },
        DetailSubtree::Error { message } => rsx! {
            PageContainer { test_id,
                ApiErrorAlert { message: message.to_string() }
            }
        },
        DetailSubtree::Content { src, alt, breed } => rsx! {
            PageContainer { test_id,
                div { class: "flex flex-col md:flex-row gap-8",
                    CatPhoto { url: src.to_string(), alt: alt.to_string(), on_back }
                    DetailsPanel { breed: breed.cloned() }
                }
            }
        },
    }
}
