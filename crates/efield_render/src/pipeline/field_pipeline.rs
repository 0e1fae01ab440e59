//! Field line pipeline
//!
//! Draws the sample grid as a line list. Vertex pairs come from the grid
//! generator; the vertex shader displaces every movable endpoint along the
//! local field.

use wgpu::util::DeviceExt;

use super::types::GridVertex;
use crate::shader::{self, ShaderProgram, ShaderSources, FIELD_FRAGMENT, FIELD_VERTEX};
use crate::ShaderError;

/// Render pipeline for field line segments
pub struct FieldPipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl FieldPipeline {
    /// Build the pipeline from `shader1.vert` / `shader1.frag`
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        uniform_layout: &wgpu::BindGroupLayout,
        sources: &ShaderSources,
    ) -> Result<Self, ShaderError> {
        let program = ShaderProgram::build(device, sources, FIELD_VERTEX, FIELD_FRAGMENT)?;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Field Pipeline Layout"),
            bind_group_layouts: &[uniform_layout],
            push_constant_ranges: &[],
        });

        let pipeline = shader::link_pipeline(
            device,
            &wgpu::RenderPipelineDescriptor {
                label: Some("Field Lines"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &program.vertex,
                    entry_point: Some(shader::VERTEX_ENTRY),
                    buffers: &[Self::vertex_buffer_layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &program.fragment,
                    entry_point: Some(shader::FRAGMENT_ENTRY),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        )?;

        Ok(Self {
            pipeline,
            vertex_buffer: None,
            vertex_count: 0,
        })
    }

    /// Get the vertex buffer layout for GridVertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GridVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32> (x, y, tag)
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
            ],
        }
    }

    /// Upload the grid; called once at startup
    pub fn upload_grid(&mut self, device: &wgpu::Device, vertices: &[GridVertex]) {
        if vertices.is_empty() {
            self.vertex_buffer = None;
            self.vertex_count = 0;
            return;
        }
        self.vertex_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.vertex_count = vertices.len() as u32;
    }

    /// Number of uploaded grid vertices
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Record the line draw into an open render pass
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, uniforms: &wgpu::BindGroup) {
        let Some(buffer) = &self.vertex_buffer else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, uniforms, &[]);
        pass.set_vertex_buffer(0, buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = FieldPipeline::vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<GridVertex>() as u64);
        assert_eq!(layout.attributes.len(), 1);
    }
}
