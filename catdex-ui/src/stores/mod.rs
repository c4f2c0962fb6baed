//! State types for the pages
//!
//! These hold the logic behind views so it can be exercised without a
//! browser. Pages keep them in signals and pass snapshots to the views.

pub mod cat_detail;
pub mod home;

pub use cat_detail::*;
pub use home::*;
