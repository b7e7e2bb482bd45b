//! Menu renderer configuration
//!
//! Configurable settings for the menu renderer that can be serialized
//! and loaded from configuration files. Defaults mirror the constants
//! in [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::{disc, menu, sphere};

/// Complete menu renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    /// Radius of the anchor sphere
    pub sphere_radius: f32,
    /// Icosahedron subdivision passes; 1 gives 42 anchor vertices
    pub subdivisions: u32,
    /// Triangle count of each disc fan
    pub disc_steps: u32,
    /// Atlas cell edge in pixels
    pub atlas_cell_size: u32,
    /// Uniform scale applied to the whole menu
    pub world_scale: f32,
    /// Background clear color (RGBA)
    pub clear_color: [f64; 4],
    /// Dot-product margin required to steal the active slot
    pub snap_hysteresis: f32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            sphere_radius: sphere::RADIUS,
            subdivisions: sphere::SUBDIVISIONS,
            disc_steps: disc::STEPS,
            atlas_cell_size: menu::ATLAS_CELL_SIZE,
            world_scale: 1.0,
            clear_color: [0.02, 0.02, 0.03, 1.0],
            snap_hysteresis: menu::SNAP_HYSTERESIS,
        }
    }
}

impl MenuConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear color as a [`wgpu::Color`]
    pub fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.clear_color[0],
            g: self.clear_color[1],
            b: self.clear_color[2],
            a: self.clear_color[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = MenuConfig::default();
        assert_eq!(config.sphere_radius, sphere::RADIUS);
        assert_eq!(config.subdivisions, sphere::SUBDIVISIONS);
        assert_eq!(config.atlas_cell_size, menu::ATLAS_CELL_SIZE);
    }
}
