//! Triangle mesh construction and refinement
//!
//! A [`Mesh`] is a flat vertex/face soup built up through chained
//! `add_vertex`/`add_face` calls. Subdivision and spherical projection
//! are the only refinement operations the menu needs.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

/// One mesh vertex: position, normal, and texture coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    /// Create a vertex at the given position with zeroed normal/UV
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            normal: Vec3::ZERO,
            uv: Vec2::ZERO,
        }
    }
}

/// One triangle as three indices into the owning mesh's vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// The three indices in winding order
    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// An indexed triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one vertex, returning `self` for chaining
    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.vertices.push(Vertex::new(x, y, z));
        self
    }

    /// Append one face, returning `self` for chaining
    ///
    /// Indices must reference vertices already added to the mesh.
    pub fn add_face(&mut self, a: u32, b: u32, c: u32) -> &mut Self {
        debug_assert!(
            (a as usize) < self.vertices.len()
                && (b as usize) < self.vertices.len()
                && (c as usize) < self.vertices.len(),
            "face ({a}, {b}, {c}) references a vertex outside 0..{}",
            self.vertices.len()
        );
        self.faces.push(Face::new(a, b, c));
        self
    }

    /// Mutable access to the most recently added vertex
    pub fn last_vertex_mut(&mut self) -> Option<&mut Vertex> {
        self.vertices.last_mut()
    }

    /// Split every face into four by inserting edge midpoints
    ///
    /// The midpoint cache is keyed by the unordered endpoint pair and
    /// scoped to this call, so each shared edge contributes exactly one
    /// new vertex no matter how many faces reference it. `d` passes
    /// multiply the face count by `4^d`.
    pub fn subdivide(&mut self, divisions: u32) -> &mut Self {
        let mut cache: HashMap<(u32, u32), u32> = HashMap::new();
        for _ in 0..divisions {
            let mut next = Vec::with_capacity(self.faces.len() * 4);
            let faces = std::mem::take(&mut self.faces);
            for face in &faces {
                let ab = midpoint(&mut self.vertices, &mut cache, face.a, face.b);
                let bc = midpoint(&mut self.vertices, &mut cache, face.b, face.c);
                let ca = midpoint(&mut self.vertices, &mut cache, face.c, face.a);
                next.push(Face::new(face.a, ab, ca));
                next.push(Face::new(face.b, bc, ab));
                next.push(Face::new(face.c, ca, bc));
                next.push(Face::new(ab, bc, ca));
            }
            self.faces = next;
        }
        self
    }

    /// Project every vertex onto a sphere of the given radius
    ///
    /// The normalized position becomes the vertex normal, so the result
    /// is stable under repeated application at the same radius.
    pub fn spherize(&mut self, radius: f32) -> &mut Self {
        for vertex in &mut self.vertices {
            let direction = vertex.position.normalize_or_zero();
            vertex.normal = direction;
            vertex.position = direction * radius;
        }
        self
    }

    /// Positions of all vertices in insertion order
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| v.position)
    }
}

/// Fetch or create the midpoint vertex of edge `a`-`b`
///
/// The cache key is order-independent so both faces sharing an edge
/// resolve to the same vertex index.
fn midpoint(
    vertices: &mut Vec<Vertex>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&index) = cache.get(&key) {
        return index;
    }
    let va = vertices[a as usize];
    let vb = vertices[b as usize];
    let index = vertices.len() as u32;
    vertices.push(Vertex {
        position: (va.position + vb.position) * 0.5,
        normal: Vec3::ZERO,
        uv: (va.uv + vb.uv) * 0.5,
    });
    cache.insert(key, index);
    index
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(1.0, 1.0, 1.0)
            .add_vertex(1.0, -1.0, -1.0)
            .add_vertex(-1.0, 1.0, -1.0)
            .add_vertex(-1.0, -1.0, 1.0)
            .add_face(0, 1, 2)
            .add_face(0, 3, 1)
            .add_face(0, 2, 3)
            .add_face(1, 3, 2);
        mesh
    }

    fn edge_count(mesh: &Mesh) -> usize {
        let mut edges = HashSet::new();
        for face in &mesh.faces {
            let [a, b, c] = face.indices();
            for (u, v) in [(a, b), (b, c), (c, a)] {
                edges.insert(if u < v { (u, v) } else { (v, u) });
            }
        }
        edges.len()
    }

    #[test]
    fn test_chaining_builds_mesh() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 4);
    }

    #[test]
    fn test_subdivide_face_count() {
        // F faces become F * 4^d after d passes
        for divisions in 1..=3u32 {
            let mut mesh = tetrahedron();
            mesh.subdivide(divisions);
            assert_eq!(mesh.faces.len(), 4 * 4usize.pow(divisions));
        }
    }

    #[test]
    fn test_subdivide_shares_edge_midpoints() {
        // Closed manifold: V' = V + E * (4^d - 1) / 3, with no duplicate
        // midpoint vertices along shared edges.
        let base = tetrahedron();
        let v = base.vertices.len();
        let e = edge_count(&base);
        assert_eq!(e, 6);

        for divisions in 1..=3u32 {
            let mut mesh = tetrahedron();
            mesh.subdivide(divisions);
            let expected = v + e * (4usize.pow(divisions) - 1) / 3;
            assert_eq!(mesh.vertices.len(), expected);
        }
    }

    #[test]
    fn test_subdivide_midpoints_are_unique_positions() {
        let mut mesh = tetrahedron();
        mesh.subdivide(2);
        let mut seen = HashSet::new();
        for vertex in &mesh.vertices {
            let key = (
                (vertex.position.x * 1e5).round() as i64,
                (vertex.position.y * 1e5).round() as i64,
                (vertex.position.z * 1e5).round() as i64,
            );
            assert!(seen.insert(key), "duplicate vertex at {:?}", vertex.position);
        }
    }

    #[test]
    fn test_spherize_projects_to_radius() {
        let mut mesh = tetrahedron();
        mesh.subdivide(1).spherize(2.0);
        for vertex in &mesh.vertices {
            assert!((vertex.position.length() - 2.0).abs() < 1e-5);
            assert!((vertex.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_spherize_is_idempotent() {
        let mut once = tetrahedron();
        once.subdivide(1).spherize(1.5);
        let mut twice = tetrahedron();
        twice.subdivide(1).spherize(1.5).spherize(1.5);
        for (a, b) in once.vertices.iter().zip(&twice.vertices) {
            assert!((a.position - b.position).length() < 1e-6);
            assert!((a.normal - b.normal).length() < 1e-6);
        }
    }

    #[test]
    fn test_spherize_zero_length_position_stays_put() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(0.0, 0.0, 0.0);
        mesh.spherize(1.0);
        assert_eq!(mesh.vertices[0].position, Vec3::ZERO);
    }
}
