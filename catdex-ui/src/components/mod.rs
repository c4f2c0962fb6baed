//! Shared UI components

pub mod cat_detail;
pub mod helpers;
pub mod home;
pub mod icons;

pub use cat_detail::{
    detail_subtree, CatDetailView, CatPhoto, DetailSubtree, DetailsPanel, CAT_DETAIL_ERROR_MESSAGE,
};
pub use helpers::{ApiErrorAlert, BackButton, LoadingSpinner, PageContainer};
pub use home::{BreedSelect, CatCard, CatGrid};
pub use icons::{AlertTriangleIcon, ArrowLeftIcon};
