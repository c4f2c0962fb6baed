mod breed_select;
mod cat_grid;

pub use breed_select::BreedSelect;
pub use cat_grid::{CatCard, CatGrid};
