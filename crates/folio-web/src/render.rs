//! WebGPU renderer for the background scene.
//!
//! All geometry buffers are created once at init; the per-frame path only
//! writes uniforms and records the two passes (particles, then wireframes).

use glam::{EulerRot, Mat4, Quat, Vec3};
use wgpu::util::DeviceExt;
use web_sys as web;

use folio_core::geometry::wire_mesh;
use folio_core::{PointLight, Scene, PARTICLE_OPACITY};

use crate::shaders;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleVertex {
    position: [f32; 3],
    color: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CloudUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    misc: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ShapeUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    ambient: [f32; 4],
    light0_pos: [f32; 4],
    light0_color: [f32; 4],
    light1_pos: [f32; 4],
    light1_color: [f32; 4],
}

fn pack_light_pos(light: &PointLight) -> [f32; 4] {
    [
        light.position.x,
        light.position.y,
        light.position.z,
        light.range,
    ]
}

fn pack_light_color(light: &PointLight) -> [f32; 4] {
    [light.color[0], light.color[1], light.color[2], 0.0]
}

struct ShapeDraw {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    // The surface target owns its canvas clone, so no borrowed lifetime.
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,

    particle_pipeline: wgpu::RenderPipeline,
    cloud_uniform_buffer: wgpu::Buffer,
    cloud_bind_group: wgpu::BindGroup,
    particle_vertex_buffer: wgpu::Buffer,
    particle_count: u32,

    shape_pipeline: wgpu::RenderPipeline,
    shapes: Vec<ShapeDraw>,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        // The canvas sits behind the page content, so prefer an alpha mode
        // that lets the cleared background stay transparent.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .unwrap_or(caps.alpha_modes[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Particle pipeline: point list, additive blending.
        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::PARTICLE_SHADER.into()),
        });
        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &particle_shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<ParticleVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &particle_shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::SrcAlpha,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Wireframe pipeline: line list, standard alpha blending.
        let shape_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shape_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SHAPE_SHADER.into()),
        });
        let shape_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shape_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shape_shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shape_shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Static particle vertex buffer, interleaved position + color.
        let particle_vertices: Vec<ParticleVertex> = scene
            .cloud
            .positions
            .iter()
            .zip(scene.cloud.colors.iter())
            .map(|(p, c)| ParticleVertex {
                position: p.to_array(),
                color: *c,
            })
            .collect();
        let particle_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_vertex_buffer"),
            contents: bytemuck::cast_slice(&particle_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let cloud_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cloud_uniform_buffer"),
            contents: bytemuck::bytes_of(&CloudUniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                model: Mat4::IDENTITY.to_cols_array_2d(),
                misc: [PARTICLE_OPACITY, 0.0, 0.0, 0.0],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let cloud_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cloud_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: cloud_uniform_buffer.as_entire_binding(),
            }],
        });

        // One static mesh + live uniform per floating shape.
        let mut shapes = Vec::with_capacity(scene.shapes.len());
        for floating in &scene.shapes {
            let mesh = wire_mesh(floating.kind);
            let vertices: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.to_array()).collect();
            let indices: Vec<u16> = mesh.edges.iter().flatten().copied().collect();
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shape_vertex_buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shape_index_buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("shape_uniform_buffer"),
                size: std::mem::size_of::<ShapeUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("shape_bind_group"),
                layout: &bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            shapes.push(ShapeDraw {
                vertex_buffer,
                index_buffer,
                index_count: indices.len() as u32,
                uniform_buffer,
                bind_group,
            });
        }

        Ok(Self {
            surface,
            device,
            queue,
            config,
            width,
            height,
            particle_pipeline,
            cloud_uniform_buffer,
            cloud_bind_group,
            particle_vertex_buffer,
            particle_count: particle_vertices.len() as u32,
            shape_pipeline,
            shapes,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let view_proj = scene.camera.view_projection().to_cols_array_2d();

        let cloud_rot = scene.cloud.rotation;
        let cloud_model =
            Mat4::from_euler(EulerRot::XYZ, cloud_rot.x, cloud_rot.y, cloud_rot.z);
        self.queue.write_buffer(
            &self.cloud_uniform_buffer,
            0,
            bytemuck::bytes_of(&CloudUniforms {
                view_proj,
                model: cloud_model.to_cols_array_2d(),
                misc: [PARTICLE_OPACITY, 0.0, 0.0, 0.0],
            }),
        );

        for (draw, floating) in self.shapes.iter().zip(scene.shapes.iter()) {
            let rot = floating.rotation;
            let model = Mat4::from_scale_rotation_translation(
                Vec3::splat(floating.scale),
                Quat::from_euler(EulerRot::XYZ, rot.x, rot.y, rot.z),
                floating.position,
            );
            self.queue.write_buffer(
                &draw.uniform_buffer,
                0,
                bytemuck::bytes_of(&ShapeUniforms {
                    view_proj,
                    model: model.to_cols_array_2d(),
                    color: [
                        floating.color[0],
                        floating.color[1],
                        floating.color[2],
                        floating.opacity,
                    ],
                    ambient: [scene.ambient, 0.0, 0.0, 0.0],
                    light0_pos: pack_light_pos(&scene.lights[0]),
                    light0_color: pack_light_color(&scene.lights[0]),
                    light1_pos: pack_light_pos(&scene.lights[1]),
                    light1_color: pack_light_color(&scene.lights[1]),
                }),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("background_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("background_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.particle_pipeline);
            rpass.set_bind_group(0, &self.cloud_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particle_vertex_buffer.slice(..));
            rpass.draw(0..self.particle_count, 0..1);

            rpass.set_pipeline(&self.shape_pipeline);
            for draw in &self.shapes {
                rpass.set_bind_group(0, &draw.bind_group, &[]);
                rpass.set_vertex_buffer(0, draw.vertex_buffer.slice(..));
                rpass.set_index_buffer(draw.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..draw.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
