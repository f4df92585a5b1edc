//! WebGPU renderer for the hero scene.
//!
//! Owns the surface, one pipeline per draw kind and a small uniform buffer
//! per object. Draw order matters: the solid occluder shell writes depth
//! first so the globe's back-facing wireframe lines are hidden without any
//! depth sorting; everything transparent then tests against that depth
//! without writing it.

use crate::camera::Camera;
use crate::constants::{
    ACCENT_COLOR, BACKGROUND_COLOR, FOG_DENSITY, GLOBE_LINE_OPACITY, GLOBE_RADIUS,
    GLOBE_SUBDIVISIONS, PARTICLE_OPACITY, PARTICLE_SIZE, RING_RADIAL_SEGMENTS, RING_SPECS,
    RING_TUBULAR_SEGMENTS,
};
use crate::geometry;
use crate::scene::SceneObjects;
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

static HERO_WGSL: &str = include_str!("shaders/hero.wgsl");

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const POSITION_ATTR: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawUniforms {
    mv: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    color: [f32; 4],
    fog_density: f32,
    half_size: f32,
    _pad: [f32; 2],
}

struct MeshDraw {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct LineDraw {
    vertices: wgpu::Buffer,
    vertex_count: u32,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct ParticleDraw {
    instances: wgpu::Buffer,
    instance_count: u32,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    occluder_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    ring_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,

    occluder: MeshDraw,
    globe_wire: LineDraw,
    rings: [MeshDraw; 3],
    particles: ParticleDraw,

    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        particle_positions: &[Vec3],
    ) -> anyhow::Result<Self> {
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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("hero_shader"),
            source: wgpu::ShaderSource::Wgsl(HERO_WGSL.into()),
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("draw_bgl"),
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
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("hero_layout"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let mesh_layout = wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTR,
        };
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &POSITION_ATTR,
        };

        let occluder_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            "vs_mesh",
            wgpu::PrimitiveTopology::TriangleList,
            mesh_layout.clone(),
            format,
            None,
            true,
        );
        let ring_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            "vs_mesh",
            wgpu::PrimitiveTopology::TriangleList,
            mesh_layout.clone(),
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );
        let line_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            "vs_mesh",
            wgpu::PrimitiveTopology::LineList,
            mesh_layout,
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );
        let particle_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            "vs_particle",
            wgpu::PrimitiveTopology::TriangleList,
            instance_layout,
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        // Static geometry, uploaded once for the lifetime of the page.
        let globe_mesh = geometry::icosphere(GLOBE_RADIUS, GLOBE_SUBDIVISIONS);
        let wire_lines = geometry::wireframe_edges(&globe_mesh);

        let occluder = {
            let uniforms = create_draw_uniforms(&device, "occluder_ub");
            let bind_group = bind_uniforms(&device, &bgl, &uniforms, "occluder_bg");
            MeshDraw {
                vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("occluder_vb"),
                    contents: bytemuck::cast_slice(&globe_mesh.positions),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("occluder_ib"),
                    contents: bytemuck::cast_slice(&globe_mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                index_count: globe_mesh.indices.len() as u32,
                uniforms,
                bind_group,
            }
        };

        let globe_wire = {
            let uniforms = create_draw_uniforms(&device, "globe_wire_ub");
            let bind_group = bind_uniforms(&device, &bgl, &uniforms, "globe_wire_bg");
            LineDraw {
                vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("globe_wire_vb"),
                    contents: bytemuck::cast_slice(&wire_lines),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                vertex_count: wire_lines.len() as u32,
                uniforms,
                bind_group,
            }
        };

        let rings = RING_SPECS.map(|spec| {
            let mesh = geometry::torus(
                spec.radius,
                spec.tube,
                RING_RADIAL_SEGMENTS,
                RING_TUBULAR_SEGMENTS,
            );
            let uniforms = create_draw_uniforms(&device, "ring_ub");
            let bind_group = bind_uniforms(&device, &bgl, &uniforms, "ring_bg");
            MeshDraw {
                vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("ring_vb"),
                    contents: bytemuck::cast_slice(&mesh.positions),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("ring_ib"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                index_count: mesh.indices.len() as u32,
                uniforms,
                bind_group,
            }
        });

        let particles = {
            let uniforms = create_draw_uniforms(&device, "particles_ub");
            let bind_group = bind_uniforms(&device, &bgl, &uniforms, "particles_bg");
            ParticleDraw {
                instances: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("particles_vb"),
                    contents: bytemuck::cast_slice(particle_positions),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                instance_count: particle_positions.len() as u32,
                uniforms,
                bind_group,
            }
        };

        let clear_color = wgpu::Color {
            r: BACKGROUND_COLOR[0] as f64,
            g: BACKGROUND_COLOR[1] as f64,
            b: BACKGROUND_COLOR[2] as f64,
            a: 1.0,
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            occluder_pipeline,
            line_pipeline,
            ring_pipeline,
            particle_pipeline,
            occluder,
            globe_wire,
            rings,
            particles,
            depth_view,
            width,
            height,
            clear_color,
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
            self.depth_view = create_depth_texture(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        scene: &SceneObjects,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_m = camera.view_matrix();
        let proj = camera.projection_matrix();
        let accent = |alpha: f32| [ACCENT_COLOR[0], ACCENT_COLOR[1], ACCENT_COLOR[2], alpha];

        write_draw_uniforms(
            &self.queue,
            &self.occluder.uniforms,
            view_m * scene.occluder().matrix(),
            proj,
            [
                BACKGROUND_COLOR[0],
                BACKGROUND_COLOR[1],
                BACKGROUND_COLOR[2],
                1.0,
            ],
            0.0,
        );
        write_draw_uniforms(
            &self.queue,
            &self.globe_wire.uniforms,
            view_m * scene.globe.matrix(),
            proj,
            accent(GLOBE_LINE_OPACITY),
            0.0,
        );
        for ((ring, transform), spec) in self
            .rings
            .iter()
            .zip(scene.rings.iter())
            .zip(RING_SPECS.iter())
        {
            write_draw_uniforms(
                &self.queue,
                &ring.uniforms,
                view_m * transform.matrix(),
                proj,
                accent(spec.opacity),
                0.0,
            );
        }
        write_draw_uniforms(
            &self.queue,
            &self.particles.uniforms,
            view_m * scene.particles.matrix(),
            proj,
            accent(PARTICLE_OPACITY),
            PARTICLE_SIZE * 0.5,
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("hero_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hero_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.occluder_pipeline);
            rpass.set_bind_group(0, &self.occluder.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.occluder.vertices.slice(..));
            rpass.set_index_buffer(self.occluder.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.occluder.index_count, 0, 0..1);

            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_bind_group(0, &self.globe_wire.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.globe_wire.vertices.slice(..));
            rpass.draw(0..self.globe_wire.vertex_count, 0..1);

            rpass.set_pipeline(&self.ring_pipeline);
            for ring in &self.rings {
                rpass.set_bind_group(0, &ring.bind_group, &[]);
                rpass.set_vertex_buffer(0, ring.vertices.slice(..));
                rpass.set_index_buffer(ring.indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..ring.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.particle_pipeline);
            rpass.set_bind_group(0, &self.particles.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particles.instances.slice(..));
            rpass.draw(0..6, 0..self.particles.instance_count);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("hero_depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_draw_uniforms(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<DrawUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn bind_uniforms(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    uniforms: &wgpu::Buffer,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniforms.as_entire_binding(),
        }],
    })
}

fn write_draw_uniforms(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    mv: Mat4,
    proj: Mat4,
    color: [f32; 4],
    half_size: f32,
) {
    let u = DrawUniforms {
        mv: mv.to_cols_array_2d(),
        proj: proj.to_cols_array_2d(),
        color,
        fog_density: FOG_DENSITY,
        half_size,
        _pad: [0.0; 2],
    };
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(&u));
}

#[allow(clippy::too_many_arguments)]
fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    vs_entry: &str,
    topology: wgpu::PrimitiveTopology,
    vertex_layout: wgpu::VertexBufferLayout,
    color_format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("hero_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_hero"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
