//! Vertex formats for the disc pipeline

use bytemuck::{Pod, Zeroable};
use om_core::Mesh;

/// Creates a vertex attribute with the offset calculated from the struct field.
///
/// Uses `std::mem::offset_of!` so the offset stays correct if the
/// struct layout changes.
#[macro_export]
macro_rules! vertex_attr {
    ($struct:ty, $field:ident, $location:expr, $format:ident) => {
        wgpu::VertexAttribute {
            offset: std::mem::offset_of!($struct, $field) as u64,
            shader_location: $location,
            format: wgpu::VertexFormat::$format,
        }
    };
}

/// One disc vertex: position plus the UV mapping into an atlas cell
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DiscVertex {
    /// Vertex position in disc-local space
    pub position: [f32; 3],
    /// Texture coordinate within the item's cell
    pub uv: [f32; 2],
}

impl DiscVertex {
    /// Vertex attribute descriptors for the shader
    pub const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        vertex_attr!(DiscVertex, position, 0, Float32x3),
        vertex_attr!(DiscVertex, uv, 1, Float32x2),
    ];

    /// Returns the vertex buffer layout for this vertex type
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Per-instance transform of one disc
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DiscInstance {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
}

impl DiscInstance {
    /// Instance attributes: a Mat4 as four consecutive Float32x4
    pub const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x4,
        },
        wgpu::VertexAttribute {
            offset: 16,
            shader_location: 3,
            format: wgpu::VertexFormat::Float32x4,
        },
        wgpu::VertexAttribute {
            offset: 32,
            shader_location: 4,
            format: wgpu::VertexFormat::Float32x4,
        },
        wgpu::VertexAttribute {
            offset: 48,
            shader_location: 5,
            format: wgpu::VertexFormat::Float32x4,
        },
    ];

    /// Returns the instance buffer layout
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Flatten a disc mesh into GPU vertex and index arrays
///
/// Index 0 is always the fan center; the shader relies on that to
/// exempt the center vertex from stretch distortion.
pub fn disc_buffers(mesh: &Mesh) -> (Vec<DiscVertex>, Vec<u32>) {
    let vertices = mesh
        .vertices
        .iter()
        .map(|v| DiscVertex {
            position: v.position.to_array(),
            uv: v.uv.to_array(),
        })
        .collect();
    let indices = mesh
        .faces
        .iter()
        .flat_map(|f| f.indices())
        .collect();
    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use om_core::generate_disc;

    use super::*;

    #[test]
    fn test_disc_vertex_attribute_offsets() {
        assert_eq!(DiscVertex::ATTRIBUTES[0].offset, 0);
        assert_eq!(DiscVertex::ATTRIBUTES[1].offset, 12);
        assert_eq!(DiscVertex::layout().array_stride, 20);
    }

    #[test]
    fn test_instance_stride_covers_mat4() {
        assert_eq!(DiscInstance::layout().array_stride, 64);
        let last = DiscInstance::ATTRIBUTES.last().unwrap();
        assert_eq!(last.offset, 48);
        assert_eq!(last.shader_location, 5);
    }

    #[test]
    fn test_disc_buffers_flatten_fan() {
        let mesh = generate_disc(8, 1.0);
        let (vertices, indices) = disc_buffers(&mesh);
        assert_eq!(vertices.len(), 9);
        assert_eq!(indices.len(), 8 * 3);
        // center first, with the centered UV
        assert_eq!(vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(vertices[0].uv, [0.5, 0.5]);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }
}
