//! catdex-ui - UI types and components for catdex
//!
//! Contains display types, page state and pure view components. Nothing here
//! performs I/O; catdex-web fetches data and wires callbacks.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
