//! Primitive mesh generation for the orbit menu
//!
//! Two shapes cover everything the renderer draws:
//! - Icosahedron (menu item anchor points, after subdivision)
//! - Disc (the instanced billboard each item is drawn on)

mod disc;
mod icosahedron;

pub use disc::generate_disc;
pub use icosahedron::generate_icosahedron;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icosahedron_mesh() {
        let mesh = generate_icosahedron();
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.faces.len(), 20);
    }

    #[test]
    fn test_icosahedron_subdivided_counts() {
        // 30 edges; one pass adds one midpoint per edge
        let mut mesh = generate_icosahedron();
        mesh.subdivide(1);
        assert_eq!(mesh.vertices.len(), 42);
        assert_eq!(mesh.faces.len(), 80);

        let mut deep = generate_icosahedron();
        deep.subdivide(2);
        assert_eq!(deep.vertices.len(), 162);
        assert_eq!(deep.faces.len(), 320);
    }

    #[test]
    fn test_disc_mesh() {
        let mesh = generate_disc(8, 1.0);
        assert_eq!(mesh.vertices.len(), 9); // center + ring
        assert_eq!(mesh.faces.len(), 8);
    }

    #[test]
    fn test_disc_enforces_minimum_steps() {
        let mesh = generate_disc(1, 1.0);
        assert_eq!(mesh.faces.len(), 4);
    }
}
