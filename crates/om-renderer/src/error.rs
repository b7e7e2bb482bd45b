//! Renderer error types

/// Errors surfaced while constructing the menu renderer
///
/// Runtime failures (image loads, superseded atlas builds) degrade
/// gracefully and are logged instead of returned; only setup problems
/// that leave the renderer non-functional become errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MenuError {
    /// The disc shader or pipeline failed GPU validation
    #[error("shader validation failed: {0}")]
    ShaderValidation(String),
    /// The device reported a non-validation error during setup
    #[error("device error: {0}")]
    Device(String),
}
