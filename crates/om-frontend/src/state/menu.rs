//! Menu rendering state
//!
//! Owns the [`MenuRenderer`] plus the offscreen texture egui displays,
//! and the feed the renderer callbacks write into. Everything sits
//! behind one mutex because both the paint path and UI handlers reach
//! it.

use std::sync::Arc;

use parking_lot::Mutex;

use om_core::MenuItem;
use om_renderer::{MenuCallbacks, MenuConfig, MenuError, MenuRenderer};

/// Render texture for the menu viewport
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// Menu observations consumed by the UI, written by renderer callbacks
#[derive(Debug, Default)]
pub struct MenuFeed {
    /// Index of the item facing the camera, once one has settled
    pub active_item: Option<usize>,
    /// Whether the menu is being dragged or still coasting
    pub moving: bool,
}

/// Shared handle to the callback feed
pub type SharedMenuFeed = Arc<Mutex<MenuFeed>>;

/// Menu viewport rendering state
pub struct MenuState {
    pub renderer: MenuRenderer,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
    pub feed: SharedMenuFeed,
    render_texture: Option<RenderTexture>,
    format: wgpu::TextureFormat,
}

impl MenuState {
    /// Create the menu state with callbacks wired into a shared feed
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        format: wgpu::TextureFormat,
        items: &[MenuItem],
    ) -> Result<Self, MenuError> {
        let feed: SharedMenuFeed = Arc::new(Mutex::new(MenuFeed::default()));

        let item_feed = feed.clone();
        let motion_feed = feed.clone();
        let callbacks = MenuCallbacks {
            on_active_item_change: Some(Box::new(move |index| {
                item_feed.lock().active_item = Some(index);
            })),
            on_movement_change: Some(Box::new(move |moving| {
                motion_feed.lock().moving = moving;
            })),
        };

        let renderer = MenuRenderer::new(
            device.clone(),
            queue.clone(),
            format,
            800,
            600,
            items,
            callbacks,
            MenuConfig::default(),
        )?;

        Ok(Self {
            renderer,
            device,
            queue,
            feed,
            render_texture: None,
            format,
        })
    }

    /// Ensure the render texture matches the requested size
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> egui::TextureId {
        let width = width.max(1);
        let height = height.max(1);

        let needs_recreate = self
            .render_texture
            .as_ref()
            .is_none_or(|t| t.width != width || t.height != height);

        if needs_recreate {
            // Free old texture if exists
            if let Some(old) = self.render_texture.take() {
                egui_renderer.free_texture(&old.egui_texture_id);
            }

            let texture = self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Menu Render Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: self.format,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            });

            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

            let egui_texture_id = egui_renderer.register_native_texture(
                &self.device,
                &view,
                wgpu::FilterMode::Linear,
            );

            self.renderer.resize(width, height);

            self.render_texture = Some(RenderTexture {
                texture,
                view,
                egui_texture_id,
                width,
                height,
            });
        }

        self.render_texture.as_ref().unwrap().egui_texture_id
    }

    /// Render the menu to the texture
    pub fn render(&mut self) {
        let Some(ref rt) = self.render_texture else {
            return;
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Menu Render Encoder"),
            });

        self.renderer.render(&mut encoder, &rt.view);

        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

/// Shared handle to the menu state
pub type SharedMenuState = Arc<Mutex<MenuState>>;
