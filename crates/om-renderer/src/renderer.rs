//! Grid menu renderer
//!
//! Owns the whole spherical carousel: the subdivided sphere whose
//! vertices seat the item discs, the arcball controller, camera easing,
//! atlas polling, and the instanced draw. The host feeds it pointer
//! events and a clock and gets back callbacks when the facing item or
//! the moving state changes.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};
use om_core::{AtlasLayout, AtlasStyle, MenuItem, compose_atlas, generate_disc, generate_icosahedron};
use wgpu::util::DeviceExt;

use crate::atlas::{AtlasBuilder, AtlasTexture};
use crate::camera::MenuCamera;
use crate::clock::FrameClock;
use crate::config::MenuConfig;
use crate::constants::{camera as cam, disc, frame, menu};
use crate::controller::{ArcballController, PointerEvent};
use crate::error::MenuError;
use crate::instances::InstanceBuffer;
use crate::pipeline::{PipelineConfig, create_uniform_bind_group, create_uniform_layout};
use crate::vertex::{DiscInstance, DiscVertex, disc_buffers};

/// Depth buffer format used by the menu pass
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Host callbacks fired on menu state transitions
#[derive(Default)]
pub struct MenuCallbacks {
    /// Called with the item index newly facing the camera; only fires
    /// while the menu is settled, never mid-drag
    pub on_active_item_change: Option<Box<dyn FnMut(usize) + Send>>,
    /// Called when the menu starts (`true`) or stops (`false`) moving
    pub on_movement_change: Option<Box<dyn FnMut(bool) + Send>>,
}

/// Per-frame uniform for the disc shader, std140-compatible
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct MenuUniform {
    world: [[f32; 4]; 4],
    /// xyz: smoothed rotation axis, w: angular velocity
    rotation_axis_velocity: [f32; 4],
    item_count: u32,
    cells_per_row: u32,
    frame: u32,
    _padding: u32,
}

/// Edge detector for the moving/settled state
#[derive(Debug, Default)]
struct MovementTracker {
    moving: bool,
}

impl MovementTracker {
    /// Returns the new state exactly when it flips, `None` otherwise
    fn update(&mut self, moving: bool) -> Option<bool> {
        if moving == self.moving {
            return None;
        }
        self.moving = moving;
        Some(moving)
    }
}

/// An empty catalog still renders; it becomes a single placeholder item
fn effective_items(items: &[MenuItem]) -> Vec<MenuItem> {
    if items.is_empty() {
        vec![MenuItem::placeholder()]
    } else {
        items.to_vec()
    }
}

/// Index of the rest vertex whose rotated position best faces `forward`
///
/// The incumbent keeps its seat unless a challenger beats it by at
/// least `hysteresis` in alignment, so a vertex sitting on a cell
/// border does not flicker between neighbors.
fn nearest_vertex(
    rest: &[Vec3],
    orientation: Quat,
    forward: Vec3,
    incumbent: Option<usize>,
    hysteresis: f32,
) -> usize {
    debug_assert!(!rest.is_empty());
    // compare in rest space instead of rotating every vertex
    let aligned = orientation.inverse() * forward;

    let mut best_index = 0;
    let mut best_dot = f32::MIN;
    for (index, position) in rest.iter().enumerate() {
        let dot = position.normalize_or_zero().dot(aligned);
        if dot > best_dot {
            best_dot = dot;
            best_index = index;
        }
    }

    if let Some(current) = incumbent {
        if current < rest.len() && current != best_index {
            let current_dot = rest[current].normalize_or_zero().dot(aligned);
            if best_dot - current_dot < hysteresis {
                return current;
            }
        }
    }
    best_index
}

/// Model matrix for one disc seated at the rotated vertex `rotated`
///
/// The disc faces outward along the vertex direction, grows as the
/// vertex turns toward the view axis, and is pulled inward by its own
/// size so larger discs sit closer to the camera.
fn instance_matrix(rotated: Vec3, radius: f32) -> Mat4 {
    let direction = rotated.normalize_or_zero();
    if direction == Vec3::ZERO {
        return Mat4::IDENTITY;
    }

    let depth = (rotated.z.abs() / radius).min(1.0);
    let size =
        (depth * disc::SCALE_INTENSITY + (1.0 - disc::SCALE_INTENSITY)) * disc::INSTANCE_SCALE;

    let side = Vec3::Y.cross(direction);
    let (x_axis, y_axis) = if side.length_squared() > 1e-6 {
        let x_axis = side.normalize();
        (x_axis, direction.cross(x_axis))
    } else {
        // vertex at a pole, the up reference is degenerate there
        let spin = Quat::from_rotation_arc(Vec3::Z, direction);
        (spin * Vec3::X, spin * Vec3::Y)
    };

    let translation = direction * (1.0 - size) * radius;
    Mat4::from_cols(
        (x_axis * size).extend(0.0),
        (y_axis * size).extend(0.0),
        (direction * size).extend(0.0),
        translation.extend(1.0),
    )
}

/// GPU resources; dropped as one unit on dispose
struct GpuState {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instances: InstanceBuffer<DiscInstance>,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    menu_buffer: wgpu::Buffer,
    menu_bind_group: wgpu::BindGroup,
    atlas_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    atlas_texture: AtlasTexture,
    atlas_bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    atlas_builder: AtlasBuilder,
}

/// Interactive spherical item menu
pub struct MenuRenderer {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: MenuConfig,
    callbacks: MenuCallbacks,
    items: Vec<MenuItem>,
    clock: FrameClock,
    controller: ArcballController,
    camera: MenuCamera,
    rest_positions: Vec<Vec3>,
    movement: MovementTracker,
    active_vertex: Option<usize>,
    active_item: Option<usize>,
    width: u32,
    height: u32,
    gpu: Option<GpuState>,
}

impl MenuRenderer {
    /// Create the menu with its GPU resources.
    ///
    /// Shader or layout mistakes surface as an error instead of a
    /// device panic. The atlas starts as placeholder cells; thumbnails
    /// stream in from a background build.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        items: &[MenuItem],
        callbacks: MenuCallbacks,
        config: MenuConfig,
    ) -> Result<Self, MenuError> {
        let items = effective_items(items);

        let mut sphere = generate_icosahedron();
        sphere
            .subdivide(config.subdivisions)
            .spherize(config.sphere_radius);
        let rest_positions: Vec<Vec3> = sphere.positions().collect();
        tracing::debug!(
            vertices = rest_positions.len(),
            items = items.len(),
            "building grid menu"
        );

        let disc_mesh = generate_disc(config.disc_steps, disc::RADIUS);
        let (vertices, indices) = disc_buffers(&disc_mesh);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Disc Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Disc Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let instances = InstanceBuffer::new(&device, "Disc Instances", rest_positions.len() as u32);

        let camera = MenuCamera::new(width as f32 / height.max(1) as f32);
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_layout =
            create_uniform_layout(&device, "Camera", wgpu::ShaderStages::VERTEX_FRAGMENT);
        let camera_bind_group =
            create_uniform_bind_group(&device, &camera_layout, &camera_buffer, "Camera");

        let menu_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Menu Uniform Buffer"),
            contents: bytemuck::cast_slice(&[MenuUniform::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let menu_layout =
            create_uniform_layout(&device, "Menu", wgpu::ShaderStages::VERTEX_FRAGMENT);
        let menu_bind_group =
            create_uniform_bind_group(&device, &menu_layout, &menu_buffer, "Menu");

        let atlas_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Atlas Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Atlas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // placeholder cells render on the first frame; the real build
        // lands whenever its thread finishes
        let style = AtlasStyle::default();
        let layout = AtlasLayout::for_item_count(items.len(), config.atlas_cell_size);
        let blanks: Vec<Option<image::RgbaImage>> = vec![None; items.len()];
        let placeholder = compose_atlas(&items, &blanks, &layout, &style);
        let atlas_texture = AtlasTexture::new(&device, &queue, &placeholder, "Menu Atlas");
        let atlas_bind_group =
            create_atlas_bind_group(&device, &atlas_layout, &atlas_texture, &sampler);
        let mut atlas_builder = AtlasBuilder::new(config.atlas_cell_size, style);
        atlas_builder.request(&items);

        let pipeline = PipelineConfig::new(
            "Grid Menu",
            include_str!("shaders/disc.wgsl"),
            format,
            DEPTH_FORMAT,
            &[&camera_layout, &menu_layout, &atlas_layout],
        )
        .with_vertex_layouts(vec![DiscVertex::layout(), DiscInstance::layout()])
        .build_validated(&device)?;

        let depth_view = create_depth_view(&device, width, height);

        Ok(Self {
            device,
            queue,
            callbacks,
            items,
            clock: FrameClock::new(),
            controller: ArcballController::new(width as f32, height as f32),
            camera,
            rest_positions,
            movement: MovementTracker::default(),
            active_vertex: None,
            active_item: None,
            width,
            height,
            gpu: Some(GpuState {
                pipeline,
                vertex_buffer,
                index_buffer,
                index_count: indices.len() as u32,
                instances,
                camera_buffer,
                camera_bind_group,
                menu_buffer,
                menu_bind_group,
                atlas_layout,
                sampler,
                atlas_texture,
                atlas_bind_group,
                depth_view,
                atlas_builder,
            }),
            config,
        })
    }

    /// Feed one pointer event; ignored after dispose
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.gpu.is_none() {
            return;
        }
        self.controller.handle_event(event);
    }

    /// Advance one frame of simulation.
    ///
    /// `now_ms` is the host clock in milliseconds; deltas and easing
    /// rates derive from it so the feel is frame-rate independent.
    pub fn tick(&mut self, now_ms: f64) {
        if self.gpu.is_none() {
            return;
        }
        let timing = self.clock.tick(now_ms);
        self.controller
            .update(timing.delta_ms, frame::TARGET_FRAME_MS);
        let time_scale = timing.delta_ms / frame::TARGET_FRAME_MS + 1e-4;

        let velocity = self.controller.rotation_velocity();
        let dragging = self.controller.is_dragging();

        let moving = dragging || velocity.abs() > menu::MOVEMENT_THRESHOLD;
        if let Some(state) = self.movement.update(moving) {
            tracing::trace!(moving = state, "movement changed");
            if let Some(callback) = self.callbacks.on_movement_change.as_mut() {
                callback(state);
            }
        }

        if dragging {
            self.controller.set_snap_target(None);
            let target = cam::BASE_DISTANCE
                + velocity.abs() * cam::ZOOM_VELOCITY_GAIN
                + cam::DRAG_DISTANCE_OFFSET;
            self.camera
                .ease_distance(target, cam::DRAG_DAMPING / time_scale);
        } else {
            let vertex = nearest_vertex(
                &self.rest_positions,
                self.controller.orientation(),
                self.controller.snap_direction(),
                self.active_vertex,
                self.config.snap_hysteresis,
            );
            self.active_vertex = Some(vertex);

            let item = vertex % self.items.len().max(1);
            if self.active_item != Some(item) {
                self.active_item = Some(item);
                if let Some(callback) = self.callbacks.on_active_item_change.as_mut() {
                    callback(item);
                }
            }

            let rotated =
                (self.controller.orientation() * self.rest_positions[vertex]).normalize_or_zero();
            self.controller.set_snap_target(Some(rotated));
            self.camera
                .ease_distance(cam::BASE_DISTANCE, cam::IDLE_DAMPING / time_scale);
        }

        self.refresh_instances();
        self.poll_atlas();
    }

    /// Record the menu draw into `encoder` targeting `view`
    pub fn render(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let Some(gpu) = self.gpu.as_ref() else {
            return;
        };

        self.queue.write_buffer(
            &gpu.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.uniform()]),
        );

        let layout = AtlasLayout::for_item_count(self.items.len(), self.config.atlas_cell_size);
        let axis = self.controller.rotation_axis();
        let uniform = MenuUniform {
            world: Mat4::from_scale(Vec3::splat(self.config.world_scale)).to_cols_array_2d(),
            rotation_axis_velocity: [
                axis.x,
                axis.y,
                axis.z,
                self.controller.rotation_velocity().abs(),
            ],
            item_count: self.items.len() as u32,
            cells_per_row: layout.cells_per_row,
            frame: self.clock.frame() as u32,
            _padding: 0,
        };
        self.queue
            .write_buffer(&gpu.menu_buffer, 0, bytemuck::cast_slice(&[uniform]));

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Grid Menu Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.config.clear_color()),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &gpu.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&gpu.pipeline);
        pass.set_bind_group(0, &gpu.camera_bind_group, &[]);
        pass.set_bind_group(1, &gpu.menu_bind_group, &[]);
        pass.set_bind_group(2, &gpu.atlas_bind_group, &[]);
        pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, gpu.instances.slice());
        pass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..gpu.index_count, 0, 0..gpu.instances.count());
    }

    /// Adapt to a new surface size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.controller.set_viewport(width as f32, height as f32);
        self.camera.update_aspect(width as f32 / height as f32);
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    /// Swap the item list; thumbnails rebuild in the background
    pub fn update_items(&mut self, items: &[MenuItem]) {
        let Some(gpu) = self.gpu.as_mut() else {
            tracing::warn!("update_items after dispose is a no-op");
            return;
        };
        self.items = effective_items(items);
        self.active_vertex = None;
        self.active_item = None;
        gpu.atlas_builder.request(&self.items);
    }

    /// Release GPU resources; further input, ticks, and finished atlas
    /// builds become no-ops
    pub fn dispose(&mut self) {
        if self.gpu.take().is_some() {
            tracing::debug!("grid menu disposed");
        }
    }

    /// Whether [`Self::dispose`] has run
    pub fn is_disposed(&self) -> bool {
        self.gpu.is_none()
    }

    /// Item currently facing the camera, once one has settled
    pub fn active_item(&self) -> Option<usize> {
        self.active_item
    }

    /// Whether the menu is dragging or still coasting
    pub fn is_moving(&self) -> bool {
        self.movement.moving
    }

    /// Items backing the menu, placeholder included
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    fn refresh_instances(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let orientation = self.controller.orientation();
        let radius = self.config.sphere_radius;
        let matrices: Vec<DiscInstance> = self
            .rest_positions
            .iter()
            .map(|rest| DiscInstance {
                model: instance_matrix(orientation * *rest, radius).to_cols_array_2d(),
            })
            .collect();
        gpu.instances.update(&self.queue, &matrices);
    }

    fn poll_atlas(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if let Some(atlas) = gpu.atlas_builder.poll() {
            gpu.atlas_texture = AtlasTexture::new(&self.device, &self.queue, &atlas, "Menu Atlas");
            gpu.atlas_bind_group = create_atlas_bind_group(
                &self.device,
                &gpu.atlas_layout,
                &gpu.atlas_texture,
                &gpu.sampler,
            );
            tracing::debug!(size = gpu.atlas_texture.size(), "atlas texture updated");
        }
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Menu Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_atlas_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    atlas: &AtlasTexture,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Atlas Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(atlas.view()),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_positions() -> Vec<Vec3> {
        let mut sphere = generate_icosahedron();
        sphere.subdivide(1).spherize(2.0);
        sphere.positions().collect()
    }

    #[test]
    fn test_movement_tracker_fires_only_on_transitions() {
        let mut tracker = MovementTracker::default();
        let sequence = [false, true, true, false, false, true];
        let fired: Vec<bool> = sequence
            .iter()
            .filter_map(|&moving| tracker.update(moving))
            .collect();
        assert_eq!(fired, vec![true, false, true]);
    }

    #[test]
    fn test_effective_items_empty_gets_placeholder() {
        let effective = effective_items(&[]);
        assert_eq!(effective.len(), 1);
        assert_eq!(effective[0].id, "placeholder");

        let real = vec![MenuItem::new("x", "", "X")];
        let effective = effective_items(&real);
        assert_eq!(effective.len(), 1);
        assert_eq!(effective[0].id, "x");
    }

    #[test]
    fn test_nearest_vertex_identity_picks_most_forward() {
        let rest = sphere_positions();
        let expected = rest
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.z.total_cmp(&b.z))
            .map(|(index, _)| index)
            .unwrap();
        let found = nearest_vertex(&rest, Quat::IDENTITY, Vec3::Z, None, 0.0);
        assert_eq!(found, expected);
    }

    #[test]
    fn test_active_item_stays_in_range_over_rotation_sweep() {
        let rest = sphere_positions();
        let item_count = 7usize;
        let mut incumbent = None;
        for step in 0..200 {
            let orientation = Quat::from_axis_angle(Vec3::Y, step as f32 * 0.13)
                * Quat::from_axis_angle(Vec3::X, step as f32 * 0.07);
            let vertex = nearest_vertex(&rest, orientation, Vec3::Z, incumbent, 0.01);
            incumbent = Some(vertex);
            assert!(vertex < rest.len());
            let item = vertex % item_count;
            assert!(item < item_count);
        }
    }

    #[test]
    fn test_nearest_vertex_hysteresis_holds_incumbent() {
        let a = Vec3::Z;
        let b = Vec3::new(0.5, 0.0, 1.0).normalize();
        let rest = vec![a, b];

        // b wins by ~0.002 in alignment, inside the margin
        let barely = Vec3::new(0.24, 0.0, 1.0).normalize();
        let kept = nearest_vertex(&rest, Quat::IDENTITY, barely, Some(0), 0.01);
        assert_eq!(kept, 0, "incumbent should survive a marginal challenger");

        // b wins by ~0.023, a decisive switch
        let clearly = Vec3::new(0.3, 0.0, 1.0).normalize();
        let switched = nearest_vertex(&rest, Quat::IDENTITY, clearly, Some(0), 0.01);
        assert_eq!(switched, 1);

        // without an incumbent the best simply wins
        let fresh = nearest_vertex(&rest, Quat::IDENTITY, barely, None, 0.01);
        assert_eq!(fresh, 1);
    }

    #[test]
    fn test_instance_matrix_facing_vertex() {
        let radius = 2.0;
        let matrix = instance_matrix(Vec3::new(0.0, 0.0, radius), radius);
        // full depth: size (0.6 + 0.4) * 0.25, pulled in by its own size
        let size = disc::INSTANCE_SCALE;
        let center = matrix.transform_point3(Vec3::ZERO);
        assert!((center - Vec3::new(0.0, 0.0, (1.0 - size) * radius)).length() < 1e-5);
        let rim = matrix.transform_point3(Vec3::X);
        assert!((rim.z - center.z).abs() < 1e-5, "disc should be flat in z");
        assert!(((rim - center).length() - size).abs() < 1e-5);
    }

    #[test]
    fn test_instance_matrix_side_vertex_is_smaller() {
        let radius = 2.0;
        let matrix = instance_matrix(Vec3::new(radius, 0.0, 0.0), radius);
        let size = (1.0 - disc::SCALE_INTENSITY) * disc::INSTANCE_SCALE;
        let center = matrix.transform_point3(Vec3::ZERO);
        assert!((center - Vec3::new((1.0 - size) * radius, 0.0, 0.0)).length() < 1e-5);
        let rim = matrix.transform_point3(Vec3::X);
        assert!(((rim - center).length() - size).abs() < 1e-5);
    }

    #[test]
    fn test_instance_matrix_pole_fallback_is_finite() {
        let radius = 2.0;
        for pole in [Vec3::Y, -Vec3::Y] {
            let matrix = instance_matrix(pole * radius, radius);
            let center = matrix.transform_point3(Vec3::ZERO);
            assert!(center.is_finite());
            let outward = center.normalize();
            assert!((outward - pole).length() < 1e-4);
        }
    }

    #[test]
    fn test_menu_uniform_is_std140_sized() {
        assert_eq!(std::mem::size_of::<MenuUniform>(), 96);
    }
}
