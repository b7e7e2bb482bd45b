//! Rendering and interaction constants
//!
//! This module centralizes the tuning values used across the menu
//! renderer and the pointer controller. The interaction constants are
//! calibrated against a 60 Hz target frame and scale with the measured
//! frame delta, so behavior stays consistent at other refresh rates.

/// Frame pacing constants
pub mod frame {
    /// Frame duration the time-scale correction is normalized to (ms)
    pub const TARGET_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Longest delta a single frame may integrate (ms); larger stalls
    /// (tab in background, debugger pause) are clamped to this
    pub const MAX_FRAME_DELTA_MS: f32 = 32.0;
}

/// Menu sphere geometry constants
pub mod sphere {
    /// Radius the subdivided icosahedron is spherized to
    pub const RADIUS: f32 = 2.0;
    /// Icosahedron subdivision passes (1 pass = 42 anchor vertices)
    pub const SUBDIVISIONS: u32 = 1;
}

/// Disc billboard constants
pub mod disc {
    /// Fan resolution of one disc
    pub const STEPS: u32 = 56;
    /// Disc mesh radius before instance scaling
    pub const RADIUS: f32 = 1.0;
    /// Uniform shrink applied to every instance
    pub const INSTANCE_SCALE: f32 = 0.25;
    /// Portion of the scale driven by view-axis depth; the remainder
    /// is a constant floor so edge-on discs never vanish
    pub const SCALE_INTENSITY: f32 = 0.6;
}

/// Camera behavior constants
pub mod camera {
    use std::f32::consts::PI;

    /// Vertical field of view in radians
    pub const FOV: f32 = PI / 4.0;
    /// Near clipping plane
    pub const NEAR: f32 = 0.1;
    /// Far clipping plane
    pub const FAR: f32 = 40.0;
    /// Resting camera distance while idle
    pub const BASE_DISTANCE: f32 = 3.0;
    /// Extra distance per unit of rotation velocity while dragging
    pub const ZOOM_VELOCITY_GAIN: f32 = 80.0;
    /// Constant extra distance while dragging
    pub const DRAG_DISTANCE_OFFSET: f32 = 2.5;
    /// Distance easing divisor while idle (divided by the time scale)
    pub const IDLE_DAMPING: f32 = 5.0;
    /// Distance easing divisor while dragging
    pub const DRAG_DAMPING: f32 = 7.0;
}

/// Arcball controller constants
pub mod control {
    /// Virtual trackball radius in normalized screen units
    pub const TRACKBALL_RADIUS: f32 = 2.0;
    /// Fraction of the outstanding pointer delta consumed per frame
    pub const DRAG_INTENSITY: f32 = 0.3;
    /// Net angle amplification applied to the projected-arc rotation
    pub const ANGLE_AMPLIFICATION: f32 = 5.0;
    /// Squared pixel step below which a drag frame counts as still
    pub const DRAG_EPSILON_SQ: f32 = 0.1;
    /// Slerp-toward-identity rate of the pointer rotation while idle
    pub const IDLE_DECAY: f32 = 0.1;
    /// Base intensity of the snap-to-vertex correction
    pub const SNAP_INTENSITY: f32 = 0.2;
    /// Smoothing rate of the combined rotation used for velocity
    pub const COMBINED_SMOOTHING: f32 = 0.8;
    /// Smoothing rate of the angular-velocity scalar
    pub const VELOCITY_SMOOTHING: f32 = 0.5;
    /// Largest per-event pointer delta in pixels; flicks beyond this
    /// are clamped so one fast swipe cannot register a mirrored spin
    pub const MAX_POINTER_DELTA: f32 = 100.0;
    /// Sine magnitude below which axis extraction is skipped
    pub const AXIS_EPSILON: f32 = 1e-6;
}

/// Orchestrator constants
pub mod menu {
    /// Thumbnail atlas cell edge in pixels
    pub const ATLAS_CELL_SIZE: u32 = 512;
    /// Angular velocity above which the menu counts as moving
    pub const MOVEMENT_THRESHOLD: f32 = 0.01;
    /// Dot-product margin a challenger vertex must win by before the
    /// active item switches; suppresses flicker between near-equidistant
    /// vertices
    pub const SNAP_HYSTERESIS: f32 = 0.01;
}
