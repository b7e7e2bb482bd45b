//! Disc (triangle fan) mesh generation

use std::f32::consts::PI;

use glam::Vec2;

use crate::mesh::Mesh;

/// Generate a flat disc in the XY plane as a fan of `steps` triangles
///
/// The center vertex carries UV (0.5, 0.5) and the rim maps the unit
/// circle into UV space, so a square texture cell fills the disc. Step
/// counts below 4 are raised to 4 to avoid a degenerate fan.
pub fn generate_disc(steps: u32, radius: f32) -> Mesh {
    let steps = steps.max(4);
    let alpha = 2.0 * PI / steps as f32;

    let mut mesh = Mesh::new();
    mesh.add_vertex(0.0, 0.0, 0.0);
    if let Some(center) = mesh.last_vertex_mut() {
        center.uv = Vec2::new(0.5, 0.5);
    }

    for i in 0..steps {
        let x = (alpha * i as f32).cos();
        let y = (alpha * i as f32).sin();
        mesh.add_vertex(radius * x, radius * y, 0.0);
        if let Some(rim) = mesh.last_vertex_mut() {
            rim.uv = Vec2::new(x * 0.5 + 0.5, y * 0.5 + 0.5);
        }
        if i > 0 {
            mesh.add_face(0, i, i + 1);
        }
    }
    mesh.add_face(0, steps, 1);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_uv_is_midpoint() {
        let mesh = generate_disc(6, 1.0);
        assert_eq!(mesh.vertices[0].uv, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_rim_uvs_stay_in_unit_square() {
        let mesh = generate_disc(16, 2.0);
        for vertex in &mesh.vertices {
            assert!((0.0..=1.0).contains(&vertex.uv.x));
            assert!((0.0..=1.0).contains(&vertex.uv.y));
        }
    }

    #[test]
    fn test_fan_closes_back_to_first_rim_vertex() {
        let mesh = generate_disc(4, 1.0);
        let last = mesh.faces.last().unwrap();
        assert_eq!(last.indices(), [0, 4, 1]);
    }

    #[test]
    fn test_every_face_includes_center() {
        let mesh = generate_disc(12, 1.0);
        for face in &mesh.faces {
            assert_eq!(face.a, 0);
        }
    }
}
