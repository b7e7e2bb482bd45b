//! Menu item payloads
//!
//! The menu treats items as mostly-opaque records: only the image
//! reference and the dimming state influence rendering. Titles,
//! descriptions, and the metadata map exist for the host UI.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Availability tag controlling the atlas cell's desaturation/overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualState {
    /// Fully available; rendered as-is
    #[default]
    Normal,
    /// Sold out; dimmed with a status label
    OutOfStock,
    /// Not yet published; dimmed with a status label
    Unpublished,
    /// Requires sign-in before purchase; dimmed with a status label
    LoginRequired,
    /// Per-customer purchase limit reached; dimmed with a status label
    LimitReached,
}

impl VisualState {
    /// Whether this state desaturates and darkens the item's atlas cell
    pub fn is_dimmed(self) -> bool {
        !matches!(self, VisualState::Normal)
    }

    /// Centered status text drawn over a dimmed cell
    pub fn status_label(self) -> Option<&'static str> {
        match self {
            VisualState::Normal => None,
            VisualState::OutOfStock => Some("SOLD OUT"),
            VisualState::Unpublished => Some("COMING SOON"),
            VisualState::LoginRequired => Some("SIGN IN"),
            VisualState::LimitReached => Some("LIMIT REACHED"),
        }
    }
}

/// One node of the spherical menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier, unique within one item list
    pub id: String,
    /// Image reference: an http(s) URL or a filesystem path
    pub image: String,
    /// Display title
    pub title: String,
    /// Display description
    #[serde(default)]
    pub description: String,
    /// Hard disable independent of `visual_state`
    #[serde(default)]
    pub disabled: bool,
    /// Availability tag governing atlas-cell treatment
    #[serde(default)]
    pub visual_state: VisualState,
    /// Free-form host-UI metadata (action labels, cart quantities, ...)
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl MenuItem {
    /// Create an item with the given id, image reference, and title
    pub fn new(
        id: impl Into<String>,
        image: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            title: title.into(),
            description: String::new(),
            disabled: false,
            visual_state: VisualState::default(),
            metadata: BTreeMap::new(),
        }
    }

    /// Stand-in item used when the menu is given an empty list
    pub fn placeholder() -> Self {
        Self::new("placeholder", "", "No items")
    }

    /// Whether the atlas cell should be desaturated and darkened
    pub fn is_dimmed(&self) -> bool {
        self.disabled || self.visual_state.is_dimmed()
    }

    /// Status text for this item's cell, if any
    ///
    /// A disabled item without a more specific availability tag still
    /// gets a generic label so the dimming reads as intentional.
    pub fn status_label(&self) -> Option<&'static str> {
        match self.visual_state.status_label() {
            Some(label) => Some(label),
            None if self.disabled => Some("UNAVAILABLE"),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_not_dimmed() {
        let item = MenuItem::new("sku-1", "https://example.com/a.png", "A");
        assert!(!item.is_dimmed());
        assert_eq!(item.status_label(), None);
    }

    #[test]
    fn test_visual_states_dim_and_label() {
        let mut item = MenuItem::new("sku-2", "", "B");
        item.visual_state = VisualState::OutOfStock;
        assert!(item.is_dimmed());
        assert_eq!(item.status_label(), Some("SOLD OUT"));
    }

    #[test]
    fn test_disabled_without_state_gets_generic_label() {
        let mut item = MenuItem::new("sku-3", "", "C");
        item.disabled = true;
        assert!(item.is_dimmed());
        assert_eq!(item.status_label(), Some("UNAVAILABLE"));
    }

    #[test]
    fn test_placeholder_is_renderable() {
        let item = MenuItem::placeholder();
        assert!(!item.is_dimmed());
        assert!(item.image.is_empty());
    }
}
