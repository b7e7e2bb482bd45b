//! wgpu renderer for the spherical grid menu
//!
//! The menu arranges item discs on the vertices of a subdivided
//! icosphere, rotates the whole arrangement with an arcball controller,
//! and textures every disc from a shared thumbnail atlas in one
//! instanced draw.
//!
//! The crate is windowing-agnostic: the host owns the surface and the
//! event loop, forwards pointer input as [`PointerEvent`] values, calls
//! [`MenuRenderer::tick`] with its clock, and records the draw through
//! [`MenuRenderer::render`].

pub mod atlas;
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod instances;
pub mod pipeline;
pub mod renderer;
pub mod vertex;

pub use atlas::{AtlasBuilder, AtlasTexture};
pub use camera::{CameraUniform, MenuCamera};
pub use clock::{FrameClock, FrameTiming};
pub use config::MenuConfig;
pub use controller::{ArcballController, PointerEvent};
pub use error::MenuError;
pub use instances::InstanceBuffer;
pub use pipeline::PipelineConfig;
pub use renderer::{DEPTH_FORMAT, MenuCallbacks, MenuRenderer};
pub use vertex::{DiscInstance, DiscVertex};
