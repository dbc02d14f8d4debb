use busframe_core::GeometryError;
use thiserror::Error;

/// Failures while bringing up or driving the window
#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no graphics adapter can present to this window")]
    NoAdapter,
    #[error("failed to open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface does not support the selected adapter")]
    UnsupportedSurface,
    #[error("out of GPU memory while presenting")]
    OutOfMemory,
    #[error("invalid model geometry: {0}")]
    Geometry(#[from] GeometryError),
}

pub type Result<T> = std::result::Result<T, AppError>;
