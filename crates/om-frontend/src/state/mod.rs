//! Application state module

mod menu;

pub use menu::{MenuFeed, MenuState, SharedMenuFeed, SharedMenuState};
