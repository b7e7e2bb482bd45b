//! Main application module

use std::sync::Arc;

use parking_lot::Mutex;

use om_core::Catalog;

use crate::panels::{render_item_card, render_menu_viewport};
use crate::state::{MenuState, SharedMenuState};

/// Storefront application
pub struct StorefrontApp {
    catalog: Catalog,
    menu_state: Option<SharedMenuState>,
    cart: Vec<String>,
}

impl StorefrontApp {
    /// Create the app; without a wgpu render state the menu stays off
    /// and a fallback panel shows instead
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        let menu_state = match cc.wgpu_render_state.as_ref() {
            Some(render_state) => {
                let device = Arc::new(render_state.device.clone());
                let queue = Arc::new(render_state.queue.clone());
                let format = render_state.target_format;

                match MenuState::new(device, queue, format, &catalog.items) {
                    Ok(state) => Some(Arc::new(Mutex::new(state))),
                    Err(error) => {
                        tracing::error!(%error, "failed to create menu renderer");
                        None
                    }
                }
            }
            None => {
                tracing::error!("wgpu render state unavailable, menu disabled");
                None
            }
        };

        Self {
            catalog,
            menu_state,
            cart: Vec::new(),
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.catalog.name);
                ui.separator();
                if ui
                    .button("Refresh")
                    .on_hover_text("Reload item thumbnails")
                    .clicked()
                {
                    if let Some(menu_state) = self.menu_state.as_ref() {
                        menu_state.lock().renderer.update_items(&self.catalog.items);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Cart: {}", self.cart.len()));
                    ui.separator();
                    ui.label(format!("{} items", self.catalog.items.len()));
                });
            });
        });
    }

    fn item_card(&mut self, ctx: &egui::Context) {
        let Some(menu_state) = self.menu_state.as_ref() else {
            return;
        };

        // Card shows only while the menu is settled; the feed is written
        // by the renderer callbacks during tick.
        let card_item = {
            let state = menu_state.lock();
            let feed = state.feed.lock();
            if feed.moving {
                None
            } else {
                feed.active_item
                    .and_then(|index| state.renderer.items().get(index).cloned())
            }
        };

        if let Some(item) = card_item {
            if render_item_card(ctx, &item) {
                tracing::info!(item = %item.id, "added to cart");
                self.cart.push(item.id.clone());
            }
        }
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.header(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                match (self.menu_state.as_ref(), frame.wgpu_render_state()) {
                    (Some(menu_state), Some(render_state)) => {
                        render_menu_viewport(ui, menu_state, render_state);
                    }
                    _ => {
                        let (response, painter) =
                            ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                        painter.rect_filled(
                            response.rect,
                            0.0,
                            egui::Color32::from_rgb(20, 20, 24),
                        );
                        painter.text(
                            response.rect.center(),
                            egui::Align2::CENTER_CENTER,
                            "Menu unavailable\n(WebGPU not supported)",
                            egui::FontId::proportional(16.0),
                            egui::Color32::GRAY,
                        );
                    }
                }
            });

        self.item_card(ctx);

        // inertia and snapping animate without input
        ctx.request_repaint();
    }

    fn on_exit(&mut self) {
        if let Some(menu_state) = self.menu_state.as_ref() {
            menu_state.lock().renderer.dispose();
        }
    }
}
