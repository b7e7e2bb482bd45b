//! Item catalog serialization
//!
//! A catalog is the on-disk form of a menu's item list, stored as RON.
//! The frontend loads one at startup and hands its items to the
//! renderer; the renderer itself never reads files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::item::MenuItem;

/// A named list of menu items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// File format version
    pub version: u32,
    /// Catalog display name
    pub name: String,
    /// Items in display order
    pub items: Vec<MenuItem>,
}

impl Catalog {
    /// Create an empty catalog with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: 1,
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Save the catalog to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| CatalogError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| CatalogError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load a catalog from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::load_from_str(&content)
    }

    /// Parse a catalog from RON text
    pub fn load_from_str(content: &str) -> Result<Self, CatalogError> {
        ron::from_str(content).map_err(|e| CatalogError::Deserialize(e.to_string()))
    }
}

/// Catalog-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use crate::item::VisualState;

    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.ron");

        let mut catalog = Catalog::new("demo");
        let mut item = MenuItem::new("sku-1", "https://example.com/a.png", "First");
        item.visual_state = VisualState::OutOfStock;
        item.metadata.insert("action".into(), "Add to cart".into());
        catalog.items.push(item);

        catalog.save(&path).unwrap();
        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded.name, "demo");
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].visual_state, VisualState::OutOfStock);
        assert_eq!(
            loaded.items[0].metadata.get("action").map(String::as_str),
            Some("Add to cart")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::load("/nonexistent/catalog.ron").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_malformed_ron_is_deserialize_error() {
        let err = Catalog::load_from_str("(version: 1,").unwrap_err();
        assert!(matches!(err, CatalogError::Deserialize(_)));
    }

    #[test]
    fn test_optional_fields_default() {
        let catalog = Catalog::load_from_str(
            r#"(
                version: 1,
                name: "minimal",
                items: [(id: "a", image: "", title: "A")],
            )"#,
        )
        .unwrap();
        let item = &catalog.items[0];
        assert!(!item.disabled);
        assert_eq!(item.visual_state, VisualState::Normal);
        assert!(item.metadata.is_empty());
    }
}
