//! Charge marker pipeline
//!
//! One instanced quad per charge, positioned entirely from the shared
//! uniform block, so there is no vertex buffer to keep in sync.

use super::types::MARKER_VERTEX_COUNT;
use crate::shader::{self, ShaderProgram, ShaderSources, MARKER_FRAGMENT, MARKER_VERTEX};
use crate::ShaderError;

/// Render pipeline for charge markers
pub struct MarkerPipeline {
    pipeline: wgpu::RenderPipeline,
}

impl MarkerPipeline {
    /// Build the pipeline from `shader2.vert` / `shader2.frag`
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        uniform_layout: &wgpu::BindGroupLayout,
        sources: &ShaderSources,
    ) -> Result<Self, ShaderError> {
        let program = ShaderProgram::build(device, sources, MARKER_VERTEX, MARKER_FRAGMENT)?;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Marker Pipeline Layout"),
            bind_group_layouts: &[uniform_layout],
            push_constant_ranges: &[],
        });

        let pipeline = shader::link_pipeline(
            device,
            &wgpu::RenderPipelineDescriptor {
                label: Some("Charge Markers"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &program.vertex,
                    entry_point: Some(shader::VERTEX_ENTRY),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &program.fragment,
                    entry_point: Some(shader::FRAGMENT_ENTRY),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        )?;

        Ok(Self { pipeline })
    }

    /// Record one marker per charge into an open render pass
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        uniforms: &wgpu::BindGroup,
        charge_count: u32,
    ) {
        if charge_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, uniforms, &[]);
        pass.draw(0..MARKER_VERTEX_COUNT, 0..charge_count);
    }
}
