//! Shader sources and program building
//!
//! Shader text lives next to the executable in a `shaders/` directory and is
//! read once at startup, before any pipeline exists. Compilation and linking
//! go through wgpu validation error scopes so a broken shader is reported as
//! a [`ShaderError`] with the validator's message instead of a panic.

use std::collections::HashMap;
use std::path::Path;

use crate::ShaderError;

/// Field line vertex stage
pub const FIELD_VERTEX: &str = "shader1.vert";
/// Field line fragment stage
pub const FIELD_FRAGMENT: &str = "shader1.frag";
/// Charge marker vertex stage
pub const MARKER_VERTEX: &str = "shader2.vert";
/// Charge marker fragment stage
pub const MARKER_FRAGMENT: &str = "shader2.frag";

/// Every shader file the visualizer loads, in load order
pub const SHADER_FILES: [&str; 4] = [FIELD_VERTEX, FIELD_FRAGMENT, MARKER_VERTEX, MARKER_FRAGMENT];

/// WGSL entry point of every vertex stage
pub const VERTEX_ENTRY: &str = "vs_main";
/// WGSL entry point of every fragment stage
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Shader text keyed by file name
#[derive(Clone, Debug, Default)]
pub struct ShaderSources {
    sources: HashMap<String, String>,
}

impl ShaderSources {
    /// Load all [`SHADER_FILES`] from a directory
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ShaderError> {
        Self::load_files(dir, &SHADER_FILES)
    }

    /// Load the named files from a directory
    ///
    /// Fails on the first file that cannot be read; nothing is returned
    /// until every file has been read.
    pub fn load_files(dir: impl AsRef<Path>, names: &[&str]) -> Result<Self, ShaderError> {
        let dir = dir.as_ref();
        let mut sources = HashMap::with_capacity(names.len());
        for name in names {
            let path = dir.join(name);
            let text = std::fs::read_to_string(&path)
                .map_err(|source| ShaderError::Io { path: path.clone(), source })?;
            log::debug!("Loaded shader '{}' ({} bytes)", path.display(), text.len());
            sources.insert((*name).to_string(), text);
        }
        log::info!("Loaded {} shaders from '{}'", sources.len(), dir.display());
        Ok(Self { sources })
    }

    /// Insert a source directly
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(name.into(), source.into());
    }

    /// Get a non-empty source by file name
    pub fn get(&self, name: &str) -> Result<&str, ShaderError> {
        match self.sources.get(name) {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ShaderError::MissingSource(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Compiled vertex and fragment stages of one program
pub struct ShaderProgram {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Compile both stages from loaded sources
    pub fn build(
        device: &wgpu::Device,
        sources: &ShaderSources,
        vertex_name: &str,
        fragment_name: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_module(device, vertex_name, sources.get(vertex_name)?)?;
        let fragment = compile_module(device, fragment_name, sources.get(fragment_name)?)?;
        Ok(Self { vertex, fragment })
    }
}

/// Compile one WGSL module, surfacing validation failures as `Compile`
pub fn compile_module(
    device: &wgpu::Device,
    name: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(name),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    match pollster::block_on(device.pop_error_scope()) {
        Some(error) => Err(ShaderError::Compile {
            name: name.to_string(),
            log: error.to_string(),
        }),
        None => Ok(module),
    }
}

/// Create a render pipeline, surfacing validation failures as `Link`
///
/// Interface mismatches between the stages and the layout are only caught
/// here, which is the equivalent of a program link step.
pub fn link_pipeline(
    device: &wgpu::Device,
    descriptor: &wgpu::RenderPipelineDescriptor<'_>,
) -> Result<wgpu::RenderPipeline, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let pipeline = device.create_render_pipeline(descriptor);
    match pollster::block_on(device.pop_error_scope()) {
        Some(error) => Err(ShaderError::Link {
            label: descriptor.label.unwrap_or("unnamed").to_string(),
            log: error.to_string(),
        }),
        None => Ok(pipeline),
    }
}
