//! Error types for starfield.
//!
//! The simulation itself cannot fail. Everything here comes from loading
//! configuration or from the window/GPU side of the render loop.

use std::fmt;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    Io(std::io::Error),
    /// Config file is not valid JSON for [`crate::StarfieldConfig`].
    Parse(serde_json::Error),
    /// A value is out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Surface reports no supported texture formats for this adapter.
    NoSurfaceFormat,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support, or run with --headless."),
            GpuError::NoSurfaceFormat => write!(f, "Surface is not compatible with the selected GPU adapter"),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors a [`crate::RenderSink`] can report while presenting a frame.
#[derive(Debug)]
pub enum RenderError {
    /// The surface could not hand out a texture. Lost/outdated surfaces are
    /// reconfigured by the sink before this is returned.
    Surface(wgpu::SurfaceError),
    /// The GPU ran out of memory; the loop cannot continue.
    OutOfMemory,
}

impl RenderError {
    /// Whether the loop should stop instead of skipping the frame.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenderError::OutOfMemory)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Surface(e) => write!(f, "Failed to acquire surface texture: {}", e),
            RenderError::OutOfMemory => write!(f, "GPU out of memory"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Surface(e) => Some(e),
            RenderError::OutOfMemory => None,
        }
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Surface(other),
        }
    }
}

/// Errors that can occur when running a starfield.
#[derive(Debug)]
pub enum StarfieldError {
    /// Configuration could not be loaded or is invalid.
    Config(ConfigError),
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Rendering failed in a way the loop cannot recover from.
    Render(RenderError),
}

impl fmt::Display for StarfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarfieldError::Config(e) => write!(f, "{}", e),
            StarfieldError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            StarfieldError::Window(e) => write!(f, "Failed to create window: {}", e),
            StarfieldError::Gpu(e) => write!(f, "GPU error: {}", e),
            StarfieldError::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl std::error::Error for StarfieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StarfieldError::Config(e) => Some(e),
            StarfieldError::EventLoop(e) => Some(e),
            StarfieldError::Window(e) => Some(e),
            StarfieldError::Gpu(e) => Some(e),
            StarfieldError::Render(e) => Some(e),
        }
    }
}

impl From<ConfigError> for StarfieldError {
    fn from(e: ConfigError) -> Self {
        StarfieldError::Config(e)
    }
}

impl From<winit::error::EventLoopError> for StarfieldError {
    fn from(e: winit::error::EventLoopError) -> Self {
        StarfieldError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for StarfieldError {
    fn from(e: winit::error::OsError) -> Self {
        StarfieldError::Window(e)
    }
}

impl From<GpuError> for StarfieldError {
    fn from(e: GpuError) -> Self {
        StarfieldError::Gpu(e)
    }
}

impl From<RenderError> for StarfieldError {
    fn from(e: RenderError) -> Self {
        StarfieldError::Render(e)
    }
}
