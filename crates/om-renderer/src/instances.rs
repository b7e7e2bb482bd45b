//! Instanced rendering support

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// Manages a buffer of per-instance data for instanced draws.
pub struct InstanceBuffer<T: bytemuck::Pod> {
    buffer: wgpu::Buffer,
    count: u32,
    max_instances: u32,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> InstanceBuffer<T> {
    /// Create a new instance buffer with the given capacity.
    pub fn new(device: &wgpu::Device, label: &str, max_instances: u32) -> Self {
        let size = (std::mem::size_of::<T>() * max_instances as usize) as wgpu::BufferAddress;
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            count: 0,
            max_instances,
            _marker: PhantomData,
        }
    }

    /// Create a buffer pre-filled with instance data.
    pub fn with_data(device: &wgpu::Device, label: &str, instances: &[T]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(instances),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            count: instances.len() as u32,
            max_instances: instances.len() as u32,
            _marker: PhantomData,
        }
    }

    /// Upload instance data, truncating if it exceeds capacity.
    pub fn update(&mut self, queue: &wgpu::Queue, instances: &[T]) {
        let count = instances.len().min(self.max_instances as usize);
        if instances.len() > count {
            tracing::warn!(
                requested = instances.len(),
                capacity = self.max_instances,
                "instance buffer capacity exceeded, truncating"
            );
        }
        if count > 0 {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&instances[..count]));
        }
        self.count = count as u32;
    }

    /// Number of instances currently in the buffer.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the buffer holds no instances.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Full slice of the underlying buffer for binding as a vertex buffer.
    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }
}
