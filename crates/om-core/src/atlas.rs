//! Thumbnail atlas layout and compositing
//!
//! All item thumbnails live in one square RGBA image laid out as a
//! `ceil(sqrt(n))`-per-row grid of fixed-size cells. The shader finds a
//! cell from an instance index with the same modulo/division the
//! [`AtlasLayout`] uses here, so the two must never diverge.
//!
//! Compositing is pure CPU work over already-decoded images; fetching
//! and GPU upload belong to the renderer.

use std::sync::OnceLock;

use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage, imageops};

use crate::item::MenuItem;

/// Embedded label font, loaded once
static FONT: OnceLock<Font> = OnceLock::new();

fn label_font() -> &'static Font {
    FONT.get_or_init(|| {
        let font_bytes = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");
        Font::from_bytes(font_bytes as &[u8], FontSettings::default())
            .expect("Failed to load embedded font")
    })
}

/// Grid placement of item thumbnails inside the square atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    /// Cells per row and per column
    pub cells_per_row: u32,
    /// Cell edge length in pixels
    pub cell_size: u32,
}

impl AtlasLayout {
    /// Smallest square grid holding `count` cells
    ///
    /// An empty list still gets a one-cell grid so the texture is never
    /// zero-sized.
    pub fn for_item_count(count: usize, cell_size: u32) -> Self {
        let count = count.max(1);
        let cells_per_row = (count as f64).sqrt().ceil() as u32;
        Self {
            cells_per_row,
            cell_size,
        }
    }

    /// Cell coordinates of an item index
    pub fn cell_of(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        (index % self.cells_per_row, index / self.cells_per_row)
    }

    /// Item index of a cell, inverse of [`Self::cell_of`]
    pub fn index_of(&self, cell_x: u32, cell_y: u32) -> usize {
        (cell_y * self.cells_per_row + cell_x) as usize
    }

    /// Edge length of the full atlas in pixels
    pub fn texture_size(&self) -> u32 {
        self.cells_per_row * self.cell_size
    }
}

/// Colors used while compositing the atlas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasStyle {
    /// Fill for cells whose image is missing or still loading
    pub background: Rgba<u8>,
    /// Darkening tint applied over dimmed cells; alpha is the strength
    pub overlay: Rgba<u8>,
    /// Status label color
    pub label_color: Rgba<u8>,
    /// Label height as a fraction of the cell edge
    pub label_scale: f32,
}

impl Default for AtlasStyle {
    fn default() -> Self {
        Self {
            background: Rgba([197, 197, 197, 255]),
            overlay: Rgba([17, 17, 17, 115]),
            label_color: Rgba([255, 255, 255, 255]),
            label_scale: 0.085,
        }
    }
}

/// Composite decoded thumbnails into one atlas image
///
/// `images` is parallel to `items`; a `None` slot (failed or missing
/// load) leaves the background fill visible. Dimmed items are
/// desaturated, darkened, and stamped with their status label.
pub fn compose_atlas(
    items: &[MenuItem],
    images: &[Option<RgbaImage>],
    layout: &AtlasLayout,
    style: &AtlasStyle,
) -> RgbaImage {
    let size = layout.texture_size();
    let mut atlas = RgbaImage::from_pixel(size, size, style.background);

    for (index, item) in items.iter().enumerate() {
        let (cell_x, cell_y) = layout.cell_of(index);
        let x0 = cell_x * layout.cell_size;
        let y0 = cell_y * layout.cell_size;

        if let Some(Some(source)) = images.get(index) {
            blit_cover(&mut atlas, source, x0, y0, layout.cell_size);
        }

        if item.is_dimmed() {
            desaturate_cell(&mut atlas, x0, y0, layout.cell_size);
            tint_cell(&mut atlas, x0, y0, layout.cell_size, style.overlay);
            if let Some(label) = item.status_label() {
                draw_label(&mut atlas, label, x0, y0, layout.cell_size, style);
            }
        }
    }

    atlas
}

/// Scale `src` to cover the cell, center-crop, and copy it in
fn blit_cover(atlas: &mut RgbaImage, src: &RgbaImage, x0: u32, y0: u32, cell: u32) {
    if src.width() == 0 || src.height() == 0 {
        return;
    }
    let scale =
        (cell as f32 / src.width() as f32).max(cell as f32 / src.height() as f32);
    let scaled_w = ((src.width() as f32 * scale).round() as u32).max(cell);
    let scaled_h = ((src.height() as f32 * scale).round() as u32).max(cell);
    let resized = imageops::resize(src, scaled_w, scaled_h, imageops::FilterType::Triangle);
    let crop_x = (scaled_w - cell) / 2;
    let crop_y = (scaled_h - cell) / 2;
    let cropped = imageops::crop_imm(&resized, crop_x, crop_y, cell, cell).to_image();
    imageops::replace(atlas, &cropped, x0 as i64, y0 as i64);
}

/// Replace the cell's colors with their Rec. 709 luma
fn desaturate_cell(atlas: &mut RgbaImage, x0: u32, y0: u32, cell: u32) {
    for y in y0..y0 + cell {
        for x in x0..x0 + cell {
            let pixel = atlas.get_pixel_mut(x, y);
            let [r, g, b, a] = pixel.0;
            let luma =
                (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32).round() as u8;
            *pixel = Rgba([luma, luma, luma, a]);
        }
    }
}

/// Alpha-blend a flat tint over the cell
fn tint_cell(atlas: &mut RgbaImage, x0: u32, y0: u32, cell: u32, tint: Rgba<u8>) {
    let alpha = tint.0[3] as f32 / 255.0;
    for y in y0..y0 + cell {
        for x in x0..x0 + cell {
            let pixel = atlas.get_pixel_mut(x, y);
            for channel in 0..3 {
                let base = pixel.0[channel] as f32;
                pixel.0[channel] =
                    (base * (1.0 - alpha) + tint.0[channel] as f32 * alpha).round() as u8;
            }
        }
    }
}

/// Rasterize `text` centered in the cell
fn draw_label(
    atlas: &mut RgbaImage,
    text: &str,
    x0: u32,
    y0: u32,
    cell: u32,
    style: &AtlasStyle,
) {
    let font = label_font();
    let px = cell as f32 * style.label_scale;
    let Some(line) = font.horizontal_line_metrics(px) else {
        return;
    };

    let total_width: f32 = text
        .chars()
        .map(|ch| font.metrics(ch, px).advance_width)
        .sum();
    let mut pen = x0 as f32 + (cell as f32 - total_width) * 0.5;
    let baseline = y0 as f32 + cell as f32 * 0.5 + (line.ascent + line.descent) * 0.5;
    let label_alpha = style.label_color.0[3] as f32 / 255.0;

    for ch in text.chars() {
        let (metrics, coverage) = font.rasterize(ch, px);
        let left = (pen + metrics.xmin as f32).round() as i64;
        let top = (baseline - (metrics.ymin + metrics.height as i32) as f32).round() as i64;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let alpha =
                    coverage[row * metrics.width + col] as f32 / 255.0 * label_alpha;
                if alpha <= 0.0 {
                    continue;
                }
                let x = left + col as i64;
                let y = top + row as i64;
                let in_cell = x >= x0 as i64
                    && y >= y0 as i64
                    && x < (x0 + cell) as i64
                    && y < (y0 + cell) as i64;
                if !in_cell {
                    continue;
                }
                let pixel = atlas.get_pixel_mut(x as u32, y as u32);
                for channel in 0..3 {
                    let base = pixel.0[channel] as f32;
                    pixel.0[channel] = (base * (1.0 - alpha)
                        + style.label_color.0[channel] as f32 * alpha)
                        .round() as u8;
                }
            }
        }
        pen += metrics.advance_width;
    }
}

#[cfg(test)]
mod tests {
    use crate::item::VisualState;

    use super::*;

    #[test]
    fn test_layout_is_square_and_sufficient() {
        for count in [1usize, 2, 3, 4, 5, 10, 16, 17, 42, 100] {
            let layout = AtlasLayout::for_item_count(count, 512);
            let cells = (layout.cells_per_row * layout.cells_per_row) as usize;
            assert!(cells >= count, "{count} items need {cells} cells");
            // One row fewer must not fit
            if layout.cells_per_row > 1 {
                let smaller = layout.cells_per_row - 1;
                assert!(((smaller * smaller) as usize) < count);
            }
        }
    }

    #[test]
    fn test_cell_mapping_round_trips() {
        for count in [1usize, 5, 16, 17, 42] {
            let layout = AtlasLayout::for_item_count(count, 512);
            for index in 0..count {
                let (x, y) = layout.cell_of(index);
                assert!(x < layout.cells_per_row);
                assert_eq!(layout.index_of(x, y), index);
            }
        }
    }

    #[test]
    fn test_empty_count_gets_one_cell() {
        let layout = AtlasLayout::for_item_count(0, 512);
        assert_eq!(layout.cells_per_row, 1);
        assert_eq!(layout.texture_size(), 512);
    }

    #[test]
    fn test_compose_fills_background_without_images() {
        let items = vec![MenuItem::new("a", "", "A"), MenuItem::new("b", "", "B")];
        let layout = AtlasLayout::for_item_count(items.len(), 64);
        let style = AtlasStyle::default();
        let atlas = compose_atlas(&items, &[None, None], &layout, &style);
        assert_eq!(atlas.width(), layout.texture_size());
        assert_eq!(*atlas.get_pixel(5, 5), style.background);
    }

    #[test]
    fn test_cover_blit_center_crops_wide_image() {
        // Left half red, right half blue; the crop keeps the middle
        let mut wide = RgbaImage::new(4, 2);
        for y in 0..2 {
            for x in 0..4 {
                let color = if x < 2 {
                    Rgba([255, 0, 0, 255])
                } else {
                    Rgba([0, 0, 255, 255])
                };
                wide.put_pixel(x, y, color);
            }
        }
        let items = vec![MenuItem::new("a", "", "A")];
        let layout = AtlasLayout::for_item_count(1, 64);
        let atlas = compose_atlas(&items, &[Some(wide)], &layout, &AtlasStyle::default());
        let left = atlas.get_pixel(5, 32);
        let right = atlas.get_pixel(58, 32);
        assert!(left.0[0] > left.0[2], "left side should stay red: {left:?}");
        assert!(right.0[2] > right.0[0], "right side should stay blue: {right:?}");
    }

    #[test]
    fn test_dimmed_cell_is_desaturated_and_darkened() {
        let mut item = MenuItem::new("a", "", "A");
        item.visual_state = VisualState::OutOfStock;
        let red = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
        let layout = AtlasLayout::for_item_count(1, 64);
        let atlas = compose_atlas(
            std::slice::from_ref(&item),
            &[Some(red)],
            &layout,
            &AtlasStyle::default(),
        );
        // Sample away from the centered label
        let pixel = atlas.get_pixel(4, 4);
        assert_eq!(pixel.0[0], pixel.0[1]);
        assert_eq!(pixel.0[1], pixel.0[2]);
        assert!(pixel.0[0] < 100, "overlay should darken the cell: {pixel:?}");
    }

    #[test]
    fn test_status_label_leaves_bright_pixels() {
        let mut item = MenuItem::new("a", "", "A");
        item.visual_state = VisualState::OutOfStock;
        let layout = AtlasLayout::for_item_count(1, 256);
        let atlas = compose_atlas(
            std::slice::from_ref(&item),
            &[None],
            &layout,
            &AtlasStyle::default(),
        );
        let bright = atlas.pixels().filter(|p| p.0[0] > 180).count();
        assert!(bright > 0, "label glyphs should stand out from the overlay");
    }
}
