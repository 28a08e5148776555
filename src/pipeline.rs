use std::mem;
use wgpu::util::DeviceExt;
use winit::dpi;

/// Draws the scene texture into the window as a textured quad. Vertices are
/// in window coordinates with the origin at the bottom left; the ortho
/// uniform maps (0,0)..(window_w,window_h) to clip space.
pub struct BlitPipeline {
    pub inner: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
    ortho_buffer: wgpu::Buffer,
    ortho_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

impl BlitPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ortho_layout = create_ortho_layout(device);
        let texture_layout = create_texture_layout(device);
        let (ortho_buffer, ortho_bind_group) = create_ortho_binding(device, &ortho_layout);
        let inner = create_render_pipeline(device, format, &ortho_layout, &texture_layout);
        let vertex_buffer = create_vertex_buffer(device);
        let index_buffer = create_index_buffer(device);

        Self { inner, texture_layout, ortho_buffer, ortho_bind_group, vertex_buffer, index_buffer }
    }

    pub fn bind_texture(&self, device: &wgpu::Device, texture: &crate::SceneTexture) -> wgpu::BindGroup {
        let descriptor = wgpu::BindGroupDescriptor {
            label: Some("blit texture bind group"),
            layout: &self.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        };

        device.create_bind_group(&descriptor)
    }

    pub fn blit(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        texture_bind_group: &wgpu::BindGroup,
        geometry: &crate::Viewport,
        window_size: dpi::PhysicalSize<u32>,
        bars: crate::ClearColor,
    ) {
        let ortho: [f32; 2] = [2. / window_size.width as f32, 2. / window_size.height as f32];
        queue.write_buffer(&self.ortho_buffer, 0, bytemuck::cast_slice(&ortho));
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&quad_vertices(geometry)));

        let color_attachments = [Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations { load: wgpu::LoadOp::Clear(bars.inner), store: true },
        })];
        let descriptor = wgpu::RenderPassDescriptor {
            label: Some("letterbox blit"),
            color_attachments: &color_attachments,
            depth_stencil_attachment: None,
        };

        let mut pass = encoder.begin_render_pass(&descriptor);

        pass.set_pipeline(&self.inner);
        pass.set_bind_group(0, &self.ortho_bind_group, &[]);
        pass.set_bind_group(1, texture_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }
}

// Counter-clockwise from the top left, uv origin at the texture's top.
fn quad_vertices(v: &crate::Viewport) -> [[f32; 4]; 4] {
    [
        [v.x, v.y + v.height, 0., 0.],
        [v.x + v.width, v.y + v.height, 1., 0.],
        [v.x + v.width, v.y, 1., 1.],
        [v.x, v.y, 0., 1.],
    ]
}

fn create_ortho_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let descriptor = wgpu::BindGroupLayoutDescriptor {
        label: Some("blit ortho layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    };

    device.create_bind_group_layout(&descriptor)
}

fn create_texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let descriptor = wgpu::BindGroupLayoutDescriptor {
        label: Some("blit texture layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    };

    device.create_bind_group_layout(&descriptor)
}

fn create_ortho_binding(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> (wgpu::Buffer, wgpu::BindGroup) {
    let contents: [f32; 2] = [0., 0.];

    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("blit ortho buffer"),
        contents: bytemuck::cast_slice(&contents),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("blit ortho bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });

    (buffer, bind_group)
}

fn create_render_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    ortho_layout: &wgpu::BindGroupLayout,
    texture_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("blit shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("blit pipeline layout"),
        bind_group_layouts: &[ortho_layout, texture_layout],
        push_constant_ranges: &[],
    });

    let descriptor = wgpu::RenderPipelineDescriptor {
        label: Some("blit pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: "vs_main",
            buffers: &[vertex_layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    };

    device.create_render_pipeline(&descriptor)
}

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    }
}

fn create_vertex_buffer(device: &wgpu::Device) -> wgpu::Buffer {
    let contents = [[0f32; 4]; 4];

    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("blit vertex buffer"),
        contents: bytemuck::cast_slice(&contents),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

fn create_index_buffer(device: &wgpu::Device) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("blit index buffer"),
        contents: bytemuck::cast_slice(&QUAD_INDICES),
        usage: wgpu::BufferUsages::INDEX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_corners_come_from_the_viewport_rectangle() {
        let geometry = crate::Viewport { scale: 2., width: 640., height: 360., x: 10., y: 20. };
        let vertices = quad_vertices(&geometry);

        assert_eq!(vertices[0], [10., 380., 0., 0.]);
        assert_eq!(vertices[1], [650., 380., 1., 0.]);
        assert_eq!(vertices[2], [650., 20., 1., 1.]);
        assert_eq!(vertices[3], [10., 20., 0., 1.]);
    }
}
