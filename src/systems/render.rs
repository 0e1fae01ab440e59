//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Field line and charge marker pipelines
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use efield_core::{GridPoint, SimulationState};
use efield_render::{
    context::RenderContext,
    grid_vertices, pack_uniforms,
    pipeline::{draw_passes, DrawPass, FieldPipeline, MarkerPipeline, UniformBinding},
    shader::ShaderSources,
    FieldStyle, GpuError, ShaderError,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
    /// GPU could not be initialized
    Gpu(GpuError),
    /// A shader program failed to compile or link
    Shader(ShaderError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
            RenderError::Gpu(e) => write!(f, "{}", e),
            RenderError::Shader(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Gpu(e) => Some(e),
            RenderError::Shader(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GpuError> for RenderError {
    fn from(e: GpuError) -> Self {
        RenderError::Gpu(e)
    }
}

impl From<ShaderError> for RenderError {
    fn from(e: ShaderError) -> Self {
        RenderError::Shader(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    uniforms: UniformBinding,
    field_pipeline: FieldPipeline,
    marker_pipeline: MarkerPipeline,
    background: wgpu::Color,
    style: FieldStyle,
}

impl RenderSystem {
    /// Create render system from window, config and the preloaded shaders
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
        shaders: &ShaderSources,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;

        let uniforms = UniformBinding::new(&context.device);
        let field_pipeline = FieldPipeline::new(
            &context.device,
            context.config.format,
            uniforms.layout(),
            shaders,
        )?;
        let marker_pipeline = MarkerPipeline::new(
            &context.device,
            context.config.format,
            uniforms.layout(),
            shaders,
        )?;
        log::info!("Built field and marker pipelines ({:?})", context.config.format);

        let bg = &render_config.background_color;
        Ok(Self {
            context,
            uniforms,
            field_pipeline,
            marker_pipeline,
            background: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
            style: render_config.field_style(),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Upload the sample grid to the GPU
    pub fn upload_grid(&mut self, points: &[GridPoint]) {
        let vertices = grid_vertices(points);
        self.field_pipeline
            .upload_grid(&self.context.device, &vertices);
        log::info!(
            "Uploaded {} grid vertices ({} segments)",
            self.field_pipeline.vertex_count(),
            self.field_pipeline.vertex_count() / 2
        );
    }

    /// Render a single frame
    pub fn render_frame(&mut self, state: &SimulationState) -> Result<(), RenderError> {
        let uniforms = pack_uniforms(state, &self.style);
        self.uniforms.update(&self.context.queue, &uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Field Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for draw in draw_passes(state.show_markers()) {
                match draw {
                    DrawPass::FieldLines => {
                        self.field_pipeline.draw(&mut pass, self.uniforms.bind_group());
                    }
                    DrawPass::ChargeMarkers => {
                        self.marker_pipeline.draw(
                            &mut pass,
                            self.uniforms.bind_group(),
                            uniforms.charge_count,
                        );
                    }
                }
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface at its current size after it was lost
    pub fn recover_surface(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
