mod cat_detail;
mod home;
mod layout;
mod not_found;

pub use cat_detail::CatDetail;
pub use home::{Home, HomeQuery};
pub use layout::AppLayout;
pub use not_found::NotFound;
