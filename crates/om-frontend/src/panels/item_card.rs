//! Active item card

use om_core::MenuItem;

/// Bottom-anchored card for the item facing the camera.
///
/// Returns `true` when the action button is clicked. The button label
/// comes from the item's `action_label` metadata when present; dimmed
/// items show their status and an inactive button.
pub fn render_item_card(ctx: &egui::Context, item: &MenuItem) -> bool {
    let mut clicked = false;

    egui::Area::new(egui::Id::new("item_card"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .show(ctx, |ui| {
            egui::Frame::window(&ctx.style())
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_max_width(360.0);
                    ui.vertical_centered(|ui| {
                        ui.heading(&item.title);
                        if !item.description.is_empty() {
                            ui.label(&item.description);
                        }
                        if let Some(price) = item.metadata.get("price") {
                            ui.label(egui::RichText::new(price).strong());
                        }
                        if let Some(status) = item.status_label() {
                            ui.colored_label(egui::Color32::from_rgb(220, 160, 60), status);
                        }
                        if let Some(in_cart) = item.metadata.get("quantity_in_cart") {
                            ui.small(format!("In cart: {in_cart}"));
                        }

                        let label = item
                            .metadata
                            .get("action_label")
                            .map(String::as_str)
                            .unwrap_or("Add to cart");
                        let button = egui::Button::new(label);
                        if ui.add_enabled(!item.is_dimmed(), button).clicked() {
                            clicked = true;
                        }
                    });
                });
        });

    clicked
}
