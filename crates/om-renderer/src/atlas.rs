//! Background atlas builds and GPU upload
//!
//! Thumbnails are fetched and composited off the render thread; results
//! come back over a channel tagged with a generation counter so a build
//! finishing after a newer request (or after disposal) is dropped
//! instead of overwriting fresher pixels.

use std::sync::mpsc;

use image::{RgbaImage, imageops};
use om_core::{AtlasLayout, AtlasStyle, MenuItem, compose_atlas};

/// Runs atlas composition on worker threads and hands back finished images.
pub struct AtlasBuilder {
    generation: u64,
    sender: mpsc::Sender<(u64, RgbaImage)>,
    receiver: mpsc::Receiver<(u64, RgbaImage)>,
    cell_size: u32,
    style: AtlasStyle,
}

impl AtlasBuilder {
    /// Create a builder compositing cells of `cell_size` pixels.
    pub fn new(cell_size: u32, style: AtlasStyle) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            generation: 0,
            sender,
            receiver,
            cell_size,
            style,
        }
    }

    /// Start a build for `items`, superseding any build still in flight.
    pub fn request(&mut self, items: &[MenuItem]) {
        self.generation += 1;
        let generation = self.generation;
        let items = items.to_vec();
        let sender = self.sender.clone();
        let cell_size = self.cell_size;
        let style = self.style;

        let spawned = std::thread::Builder::new()
            .name("atlas-build".into())
            .spawn(move || {
                let images = load_images(&items);
                let layout = AtlasLayout::for_item_count(items.len(), cell_size);
                let atlas = compose_atlas(&items, &images, &layout, &style);
                // The receiver is gone once the menu is disposed
                let _ = sender.send((generation, atlas));
            });
        if let Err(error) = spawned {
            tracing::warn!(%error, "failed to spawn atlas build thread");
        }
    }

    /// Take the newest finished atlas, if any build has completed.
    ///
    /// Results from superseded requests are discarded.
    pub fn poll(&mut self) -> Option<RgbaImage> {
        let mut latest = None;
        while let Ok((generation, atlas)) = self.receiver.try_recv() {
            if generation == self.generation {
                latest = Some(atlas);
            } else {
                tracing::debug!(
                    generation,
                    current = self.generation,
                    "discarding stale atlas build"
                );
            }
        }
        latest
    }
}

/// Load every item thumbnail concurrently.
fn load_images(items: &[MenuItem]) -> Vec<Option<RgbaImage>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = items
            .iter()
            .map(|item| scope.spawn(|| load_image(&item.image)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or(None))
            .collect()
    })
}

/// Fetch and decode one thumbnail; failures dim to `None`.
fn load_image(reference: &str) -> Option<RgbaImage> {
    if reference.is_empty() {
        return None;
    }
    let bytes = if reference.starts_with("http://") || reference.starts_with("https://") {
        fetch_remote(reference)?
    } else {
        match std::fs::read(reference) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(path = reference, %error, "failed to read thumbnail");
                return None;
            }
        }
    };
    match image::load_from_memory(&bytes) {
        Ok(decoded) => Some(decoded.to_rgba8()),
        Err(error) => {
            tracing::warn!(source = reference, %error, "failed to decode thumbnail");
            None
        }
    }
}

fn fetch_remote(url: &str) -> Option<Vec<u8>> {
    let mut response = match ureq::get(url).call() {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(url, %error, "thumbnail request failed");
            return None;
        }
    };
    match response.body_mut().read_to_vec() {
        Ok(bytes) => Some(bytes),
        Err(error) => {
            tracing::warn!(url, %error, "thumbnail download failed");
            None
        }
    }
}

/// Square atlas texture with a full CPU-generated mip chain.
pub struct AtlasTexture {
    view: wgpu::TextureView,
    size: u32,
}

impl AtlasTexture {
    /// Upload `image` with mips halved down to one pixel.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        label: &str,
    ) -> Self {
        debug_assert_eq!(image.width(), image.height(), "atlas must be square");
        let size = image.width().max(1);
        let mip_level_count = 32 - size.leading_zeros();

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        upload_level(queue, &texture, 0, image);
        let mut previous: Option<RgbaImage> = None;
        for level in 1..mip_level_count {
            let edge = (size >> level).max(1);
            let source = previous.as_ref().unwrap_or(image);
            let halved = imageops::resize(source, edge, edge, imageops::FilterType::Triangle);
            upload_level(queue, &texture, level, &halved);
            previous = Some(halved);
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { view, size }
    }

    /// View over the full mip chain.
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Edge length of the base level in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }
}

fn upload_level(queue: &wgpu::Queue, texture: &wgpu::Texture, level: u32, image: &RgbaImage) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: level,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        image,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.width()),
            rows_per_image: Some(image.height()),
        },
        wgpu::Extent3d {
            width: image.width(),
            height: image.height(),
            depth_or_array_layers: 1,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(edge: u32) -> RgbaImage {
        RgbaImage::from_pixel(edge, edge, image::Rgba([200, 200, 200, 255]))
    }

    #[test]
    fn test_poll_ignores_stale_generation() {
        let mut builder = AtlasBuilder::new(64, AtlasStyle::default());
        builder.generation = 2;

        builder.sender.send((1, test_image(8))).unwrap();
        assert!(builder.poll().is_none(), "stale result must be dropped");

        builder.sender.send((2, test_image(8))).unwrap();
        assert!(builder.poll().is_some());
    }

    #[test]
    fn test_poll_keeps_newest_of_queued_results() {
        let mut builder = AtlasBuilder::new(64, AtlasStyle::default());
        builder.generation = 1;

        builder.sender.send((1, test_image(8))).unwrap();
        builder.sender.send((1, test_image(16))).unwrap();

        let atlas = builder.poll().unwrap();
        assert_eq!(atlas.width(), 16);
        assert!(builder.poll().is_none(), "queue should be drained");
    }

    #[test]
    fn test_send_after_dispose_fails_silently() {
        let builder = AtlasBuilder::new(64, AtlasStyle::default());
        let sender = builder.sender.clone();
        drop(builder);
        assert!(sender.send((1, test_image(8))).is_err());
    }

    #[test]
    fn test_request_completes_with_placeholder_cells() {
        let mut builder = AtlasBuilder::new(16, AtlasStyle::default());
        let items = vec![
            MenuItem::new("a", "/nonexistent/a.png", "A"),
            MenuItem::new("b", "", "B"),
        ];
        builder.request(&items);

        let expected = AtlasLayout::for_item_count(items.len(), 16).texture_size();
        for _ in 0..500 {
            if let Some(atlas) = builder.poll() {
                assert_eq!(atlas.width(), expected);
                assert_eq!(atlas.height(), expected);
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        panic!("atlas build did not complete");
    }

    #[test]
    fn test_load_image_missing_sources() {
        assert!(load_image("").is_none());
        assert!(load_image("/definitely/not/here.png").is_none());
    }
}
