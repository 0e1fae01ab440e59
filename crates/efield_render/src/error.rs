//! Error types for GPU setup and shader programs
//!
//! Every error here is fatal at startup: there is no fallback renderer and
//! no way to repair a broken shader at runtime.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while acquiring the GPU
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for the window
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found
    NoAdapter,
    /// Failed to create GPU device
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(
                f,
                "No compatible GPU adapter found. This program needs Vulkan, Metal, DX12 or OpenGL support."
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
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

/// Errors that can occur while loading or building shader programs
#[derive(Debug)]
pub enum ShaderError {
    /// Failed to read a shader file
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A shader was requested that was not loaded, or its file was empty
    MissingSource(String),
    /// A shader module failed validation
    Compile { name: String, log: String },
    /// Vertex and fragment stages could not be combined into a pipeline
    Link { label: String, log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Io { path, source } => {
                write!(f, "Failed to read shader '{}': {}", path.display(), source)
            }
            ShaderError::MissingSource(name) => {
                write!(f, "Could not find shader source '{}'", name)
            }
            ShaderError::Compile { name, log } => {
                write!(f, "Shader '{}' failed to compile:\n{}", name, log)
            }
            ShaderError::Link { label, log } => {
                write!(f, "Program '{}' failed to link:\n{}", label, log)
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_error_display() {
        assert_eq!(
            ShaderError::MissingSource("shader1.vert".to_string()).to_string(),
            "Could not find shader source 'shader1.vert'"
        );
        let err = ShaderError::Compile {
            name: "shader2.frag".to_string(),
            log: "expected ';'".to_string(),
        };
        assert_eq!(err.to_string(), "Shader 'shader2.frag' failed to compile:\nexpected ';'");
        let err = ShaderError::Link {
            label: "Field Lines".to_string(),
            log: "location mismatch".to_string(),
        };
        assert!(err.to_string().starts_with("Program 'Field Lines' failed to link"));
    }

    #[test]
    fn test_no_adapter_display() {
        assert!(GpuError::NoAdapter.to_string().contains("No compatible GPU adapter"));
    }
}
