//! Built-in demo catalog used when no catalog file is given

use om_core::{Catalog, MenuItem, VisualState};

fn item(
    id: &str,
    title: &str,
    description: &str,
    price: &str,
) -> MenuItem {
    let mut item = MenuItem::new(id, format!("assets/thumbs/{id}.png"), title);
    item.description = description.into();
    item.metadata.insert("price".into(), price.into());
    item
}

/// Catalog shown when the app starts without arguments. Thumbnail
/// paths are resolved relative to the working directory; missing
/// files fall back to placeholder atlas cells.
pub fn demo_catalog() -> Catalog {
    let mut catalog = Catalog::new("Orbit Goods");

    catalog.items = vec![
        item(
            "espresso-cup",
            "Espresso Cup",
            "Stoneware cup, 80 ml. Holds heat longer than it should.",
            "$14",
        ),
        item(
            "field-notebook",
            "Field Notebook",
            "48 pages of dot grid, stitched spine, fits a back pocket.",
            "$9",
        ),
        item(
            "brass-compass",
            "Brass Compass",
            "Liquid-damped needle in a brass housing.",
            "$32",
        ),
        item(
            "wool-beanie",
            "Wool Beanie",
            "Merino knit, one size. Grey only.",
            "$24",
        ),
        item(
            "enamel-kettle",
            "Enamel Kettle",
            "1.2 l stovetop kettle with a whistle you will learn to hate.",
            "$48",
        ),
        item(
            "canvas-tote",
            "Canvas Tote",
            "Heavy 12 oz canvas, reinforced handles.",
            "$18",
        ),
        item(
            "desk-lamp",
            "Desk Lamp",
            "Articulated arm, warm LED, no app required.",
            "$56",
        ),
        item(
            "trail-mug",
            "Trail Mug",
            "Double-walled steel, 350 ml, clips to a pack strap.",
            "$21",
        ),
        item(
            "linen-apron",
            "Linen Apron",
            "Stonewashed linen with a split leg.",
            "$39",
        ),
        item(
            "pocket-knife",
            "Pocket Knife",
            "Single carbon steel blade, oak scales.",
            "$45",
        ),
        item(
            "storm-lantern",
            "Storm Lantern",
            "Classic kerosene lantern, galvanized body.",
            "$28",
        ),
        item(
            "cast-iron-pan",
            "Cast Iron Pan",
            "26 cm skillet, pre-seasoned.",
            "$36",
        ),
    ];

    // a few states the storefront has to render correctly
    if let Some(item) = catalog.items.get_mut(2) {
        item.visual_state = VisualState::OutOfStock;
    }
    if let Some(item) = catalog.items.get_mut(6) {
        item.visual_state = VisualState::LoginRequired;
    }
    if let Some(item) = catalog.items.get_mut(9) {
        item.visual_state = VisualState::Unpublished;
    }
    if let Some(item) = catalog.items.get_mut(10) {
        item.visual_state = VisualState::LimitReached;
        item.metadata
            .insert("quantity_in_cart".into(), "2 in cart".into());
    }
    if let Some(item) = catalog.items.get_mut(4) {
        item.disabled = true;
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_nonempty() {
        let catalog = demo_catalog();
        assert!(!catalog.items.is_empty());
        assert!(catalog.items.iter().all(|item| !item.id.is_empty()));
    }

    #[test]
    fn test_demo_catalog_has_dimmed_states() {
        let catalog = demo_catalog();
        assert!(catalog.items.iter().any(|item| item.is_dimmed()));
        assert!(catalog.items.iter().any(|item| !item.is_dimmed()));
    }
}
