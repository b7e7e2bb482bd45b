//! Spherical menu viewport panel

use om_renderer::PointerEvent;

use crate::state::SharedMenuState;

/// Tick, render, and display the menu, forwarding pointer input.
pub fn render_menu_viewport(
    ui: &mut egui::Ui,
    menu_state: &SharedMenuState,
    render_state: &egui_wgpu::RenderState,
) {
    let available_size = ui.available_size();
    // Backing store follows the display scale, capped at 2x
    let scale = ui.ctx().pixels_per_point().min(2.0);
    let width = (available_size.x * scale) as u32;
    let height = (available_size.y * scale) as u32;

    if width == 0 || height == 0 {
        return;
    }

    // Ensure texture, advance the simulation, and render
    let texture_id = {
        let mut state = menu_state.lock();
        let mut egui_renderer = render_state.renderer.write();
        let texture_id = state.ensure_texture(width, height, &mut egui_renderer);
        let now_ms = ui.input(|i| i.time) * 1000.0;
        state.renderer.tick(now_ms);
        state.render();
        texture_id
    };

    // Display the rendered texture
    let response = ui.add(
        egui::Image::new(egui::load::SizedTexture::new(
            texture_id,
            [available_size.x, available_size.y],
        ))
        .sense(egui::Sense::click_and_drag()),
    );

    // Pointer position relative to the viewport, in texture pixels
    let pointer_pos = response.hover_pos().or(response.interact_pointer_pos());
    let local = pointer_pos.map(|p| (p - response.rect.min) * scale);

    let mut state = menu_state.lock();
    if let Some(pos) = local {
        if response.drag_started_by(egui::PointerButton::Primary) {
            state
                .renderer
                .handle_pointer(PointerEvent::Down { x: pos.x, y: pos.y });
        } else if response.dragged_by(egui::PointerButton::Primary) {
            state
                .renderer
                .handle_pointer(PointerEvent::Move { x: pos.x, y: pos.y });
        }
    }
    if response.drag_stopped_by(egui::PointerButton::Primary) {
        state.renderer.handle_pointer(PointerEvent::Up);
    } else if ui.input(|i| !i.pointer.has_pointer()) {
        // pointer left the window; a live drag must not stay stuck
        state.renderer.handle_pointer(PointerEvent::Leave);
    }
}
