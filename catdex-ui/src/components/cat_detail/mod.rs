mod cat_photo;
mod details_panel;
mod view;

pub use cat_photo::CatPhoto;
pub use details_panel::DetailsPanel;
pub use view::{detail_subtree, CatDetailView, DetailSubtree, CAT_DETAIL_ERROR_MESSAGE};
