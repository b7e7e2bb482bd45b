//! Arcball pointer controller
//!
//! Converts 2D pointer drags into a smoothed 3D rotation with momentum
//! and an idle snap toward a target direction. Input arrives as
//! [`PointerEvent`] values injected by the host, so the controller has
//! no windowing dependency and can be driven headless in tests.
//!
//! Per frame the controller projects the previous and current pointer
//! positions onto a virtual trackball (sphere near the center, falling
//! back to a hyperbolic sheet farther out so the surface has no rim
//! discontinuity), turns the arc between the projections into a
//! quaternion, and accumulates it into the running orientation. A
//! hemisphere guard keeps consecutive orientations in the same
//! quaternion hemisphere; without it a fast flick can land on the
//! antipodal representation and render as a mirrored jump.

use std::f32::consts::PI;

use glam::{Quat, Vec2, Vec3};

use crate::constants::control;

/// One pointer input event in viewport pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at the given position
    Down { x: f32, y: f32 },
    /// Pointer moved while tracking; ignored unless dragging
    Move { x: f32, y: f32 },
    /// Primary button released
    Up,
    /// Pointer left the surface; ends the drag like a release
    Leave,
}

/// Arcball rotation controller
#[derive(Debug)]
pub struct ArcballController {
    dragging: bool,
    pointer: Vec2,
    previous_pointer: Vec2,
    viewport: Vec2,

    orientation: Quat,
    pointer_rotation: Quat,
    combined: Quat,

    rotation_axis: Vec3,
    rotation_velocity: f32,

    snap_direction: Vec3,
    snap_target: Option<Vec3>,
}

impl ArcballController {
    /// Create a controller for a viewport of the given pixel size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            dragging: false,
            pointer: Vec2::ZERO,
            previous_pointer: Vec2::ZERO,
            viewport: Vec2::new(width.max(1.0), height.max(1.0)),
            orientation: Quat::IDENTITY,
            pointer_rotation: Quat::IDENTITY,
            combined: Quat::IDENTITY,
            rotation_axis: Vec3::X,
            rotation_velocity: 0.0,
            snap_direction: Vec3::Z,
            snap_target: None,
        }
    }

    /// Update the viewport size used for trackball projection
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Feed one pointer event into the controller
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => {
                self.pointer = Vec2::new(x, y);
                self.previous_pointer = self.pointer;
                self.dragging = true;
                // a stale velocity from the previous fling would read
                // as a jump on the very first drag frame
                self.rotation_velocity = 0.0;
            }
            PointerEvent::Move { x, y } => {
                if self.dragging {
                    let target = Vec2::new(x, y);
                    let delta = target - self.pointer;
                    let clamped = delta.clamp_length_max(control::MAX_POINTER_DELTA);
                    self.pointer += clamped;
                }
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.dragging = false;
            }
        }
    }

    /// Advance the rotation state by one frame
    ///
    /// `delta_ms` is the frame delta; `target_frame_ms` the duration
    /// the intensities are calibrated for. All blend rates are scaled
    /// by their ratio so frame rate does not change the feel.
    pub fn update(&mut self, delta_ms: f32, target_frame_ms: f32) {
        let time_scale = delta_ms / target_frame_ms + 1e-4;
        let mut angle_factor = time_scale;
        let mut snap_rotation = Quat::IDENTITY;

        if self.dragging {
            let intensity = (control::DRAG_INTENSITY * time_scale).min(1.0);
            let step = (self.pointer - self.previous_pointer) * intensity;

            if step.length_squared() > control::DRAG_EPSILON_SQ {
                // walk the tracked position a fraction toward the real
                // pointer and rotate along the projected arc
                let midpoint = self.previous_pointer + step;
                let from = self.project(midpoint).normalize();
                let to = self.project(self.previous_pointer).normalize();
                self.previous_pointer = midpoint;

                angle_factor *= control::ANGLE_AMPLIFICATION / time_scale;
                self.pointer_rotation = rotation_between(from, to, angle_factor);
            } else {
                self.pointer_rotation = self.pointer_rotation.slerp(Quat::IDENTITY, intensity);
            }
        } else {
            let intensity = (control::IDLE_DECAY * time_scale).min(1.0);
            self.pointer_rotation = self.pointer_rotation.slerp(Quat::IDENTITY, intensity);

            if let Some(target) = self.snap_target {
                // ease toward the snap target, slowing as it closes in
                let distance_sq = (target - self.snap_direction).length_squared();
                let distance_factor = (1.0 - distance_sq * 10.0).max(0.1);
                angle_factor *= control::SNAP_INTENSITY * distance_factor;
                snap_rotation = rotation_between(target, self.snap_direction, angle_factor);
            }
        }

        let mut frame_rotation = snap_rotation * self.pointer_rotation;
        // hemisphere continuity guard: q and -q encode the same
        // rotation, but crossing hemispheres between frames reads as a
        // mirrored flip once composed and blended
        if frame_rotation.dot(self.orientation) < 0.0 {
            frame_rotation = -frame_rotation;
        }
        self.orientation = (frame_rotation * self.orientation).normalize();

        let blend = (control::COMBINED_SMOOTHING * time_scale).min(1.0);
        self.combined = self.combined.slerp(frame_rotation, blend);

        let angle = 2.0 * self.combined.w.clamp(-1.0, 1.0).acos();
        let sin_half = (angle * 0.5).sin();
        let mut velocity = 0.0;
        if sin_half.abs() > control::AXIS_EPSILON {
            velocity = angle / (2.0 * PI);
            self.rotation_axis = self.combined.xyz() / sin_half;
        }
        let velocity_blend = (control::VELOCITY_SMOOTHING * time_scale).min(1.0);
        self.rotation_velocity += (velocity - self.rotation_velocity) * velocity_blend;
    }

    /// Accumulated scene orientation
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Axis of the smoothed per-frame rotation
    pub fn rotation_axis(&self) -> Vec3 {
        self.rotation_axis
    }

    /// Smoothed angular velocity, normalized to [0, 1] per full turn
    pub fn rotation_velocity(&self) -> f32 {
        self.rotation_velocity
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Fixed direction the snap correction rotates toward
    pub fn snap_direction(&self) -> Vec3 {
        self.snap_direction
    }

    /// Set or clear the world-space direction to ease toward while idle
    pub fn set_snap_target(&mut self, target: Option<Vec3>) {
        self.snap_target = target;
    }

    /// Project a pointer position onto the virtual trackball
    ///
    /// Positions within `r/sqrt(2)` of the center land on a sphere of
    /// radius `r`; beyond that the depth follows `r^2 / |xy|`, a
    /// hyperbolic sheet that meets the sphere tangentially so the
    /// rotation rate has no seam at the boundary.
    fn project(&self, pos: Vec2) -> Vec3 {
        let r = control::TRACKBALL_RADIUS;
        let w = self.viewport.x;
        let h = self.viewport.y;
        let s = (w.max(h) - 1.0).max(1.0);

        let x = (2.0 * pos.x - w - 1.0) / s;
        let y = (2.0 * pos.y - h - 1.0) / s;
        let xy_sq = x * x + y * y;
        let r_sq = r * r;

        let z = if xy_sq <= r_sq * 0.5 {
            (r_sq - xy_sq).sqrt()
        } else {
            (r_sq * 0.5) / xy_sq.sqrt()
        };
        Vec3::new(-x, y, z)
    }
}

/// Shortest-arc rotation from one unit vector to another, with the
/// angle multiplied by `angle_factor` and clamped to a half turn
///
/// Near-parallel inputs have a degenerate cross product; those return
/// the identity instead of an axis built from noise.
fn rotation_between(from: Vec3, to: Vec3, angle_factor: f32) -> Quat {
    let axis = from.cross(to);
    if axis.length_squared() <= control::AXIS_EPSILON {
        return Quat::IDENTITY;
    }
    let axis = axis.normalize();
    let angle = (from.dot(to).clamp(-1.0, 1.0).acos() * angle_factor).clamp(-PI, PI);
    Quat::from_axis_angle(axis, angle)
}
