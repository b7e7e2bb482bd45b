//! UI panels

mod item_card;
mod menu_viewport;

pub use item_card::render_item_card;
pub use menu_viewport::render_menu_viewport;
