//! Icosahedron mesh generation

use crate::mesh::Mesh;

/// Generate the regular 12-vertex, 20-face icosahedron
///
/// Vertices sit on three mutually orthogonal golden-ratio rectangles.
/// Subdivide and spherize the result to get the menu's anchor sphere.
pub fn generate_icosahedron() -> Mesh {
    let t = 5.0_f32.sqrt() * 0.5 + 0.5;

    let mut mesh = Mesh::new();
    mesh.add_vertex(-1.0, t, 0.0)
        .add_vertex(1.0, t, 0.0)
        .add_vertex(-1.0, -t, 0.0)
        .add_vertex(1.0, -t, 0.0)
        .add_vertex(0.0, -1.0, t)
        .add_vertex(0.0, 1.0, t)
        .add_vertex(0.0, -1.0, -t)
        .add_vertex(0.0, 1.0, -t)
        .add_vertex(t, 0.0, -1.0)
        .add_vertex(t, 0.0, 1.0)
        .add_vertex(-t, 0.0, -1.0)
        .add_vertex(-t, 0.0, 1.0);

    mesh.add_face(0, 11, 5)
        .add_face(0, 5, 1)
        .add_face(0, 1, 7)
        .add_face(0, 7, 10)
        .add_face(0, 10, 11)
        .add_face(1, 5, 9)
        .add_face(5, 11, 4)
        .add_face(11, 10, 2)
        .add_face(10, 7, 6)
        .add_face(7, 1, 8)
        .add_face(3, 9, 4)
        .add_face(3, 4, 2)
        .add_face(3, 2, 6)
        .add_face(3, 6, 8)
        .add_face(3, 8, 9)
        .add_face(4, 9, 5)
        .add_face(2, 4, 11)
        .add_face(6, 2, 10)
        .add_face(8, 6, 7)
        .add_face(9, 8, 1);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_are_equidistant_from_origin() {
        let mesh = generate_icosahedron();
        let expected = mesh.vertices[0].position.length();
        for vertex in &mesh.vertices {
            assert!((vertex.position.length() - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_every_edge_is_shared_by_two_faces() {
        use std::collections::HashMap;

        let mesh = generate_icosahedron();
        let mut edge_uses: HashMap<(u32, u32), u32> = HashMap::new();
        for face in &mesh.faces {
            let [a, b, c] = face.indices();
            for (u, v) in [(a, b), (b, c), (c, a)] {
                let key = if u < v { (u, v) } else { (v, u) };
                *edge_uses.entry(key).or_default() += 1;
            }
        }
        assert_eq!(edge_uses.len(), 30);
        assert!(edge_uses.values().all(|&uses| uses == 2));
    }
}
