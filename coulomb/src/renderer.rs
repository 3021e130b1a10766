//! Sprite rendering for the two charges and the background

use common::{Camera2D, CameraUniform, GraphicsContext, SpriteVertex, Texture, UNIT_QUAD};

use crate::config::BACKGROUND_SIZE;
use crate::physics::Simulation;

/// Which texture a sprite is drawn with, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Background = 0,
    Positive = 1,
    Negative = 2,
}

impl SpriteKind {
    pub const COUNT: usize = 3;
    pub const ALL: [SpriteKind; Self::COUNT] =
        [SpriteKind::Background, SpriteKind::Positive, SpriteKind::Negative];
}

/// Instance data for GPU rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 2],
    pub size: [f32; 2],
}

impl SpriteInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        2 => Float32x2,
        3 => Float32x2,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Sprite placements for the current state, indexed by [`SpriteKind`].
///
/// Q1 always uses the positive sprite and Q2 the negative one; each is
/// nudged half a sprite along the sign of its own charge.
pub fn layout_sprites(sim: &Simulation) -> [SpriteInstance; SpriteKind::COUNT] {
    let width = sim.params.sprite_width;
    let half = sim.params.half_width();
    let [q1, q2] = &sim.particles;

    [
        SpriteInstance {
            center: [0.0, 0.0],
            size: BACKGROUND_SIZE,
        },
        SpriteInstance {
            center: [q1.sprite_x(half), 0.0],
            size: [width, width],
        },
        SpriteInstance {
            center: [q2.sprite_x(half), 0.0],
            size: [width, width],
        },
    ]
}

/// Occupied slots in draw order. Sprites whose texture never loaded are
/// left out, the rest keep their relative order.
pub fn drawable_sprites<T>(
    slots: &[Option<T>; SpriteKind::COUNT],
) -> impl Iterator<Item = (SpriteKind, &T)> {
    SpriteKind::ALL
        .into_iter()
        .filter_map(|kind| slots[kind as usize].as_ref().map(|slot| (kind, slot)))
}

/// Pixel size of the scene area left of a right-hand panel `panel_px` wide.
pub fn scene_size(window_width: u32, window_height: u32, panel_px: f32) -> [f32; 2] {
    let width = (window_width as f32 - panel_px).max(1.0);
    [width, (window_height as f32).max(1.0)]
}

pub struct Renderer {
    pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    textures: [Option<wgpu::BindGroup>; SpriteKind::COUNT],
}

impl Renderer {
    pub fn new(ctx: &GraphicsContext) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_buffer = common::create_uniform_buffer(
            device,
            &CameraUniform::from_camera_2d(&Camera2D::new(ctx.aspect_ratio())),
        );

        let camera_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
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
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let texture_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sprite Texture Bind Group Layout"),
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
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_sprite",
                buffers: &[SpriteVertex::layout(), SpriteInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_sprite",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad_buffer = common::create_vertex_buffer(device, UNIT_QUAD);

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Instance Buffer"),
            size: (std::mem::size_of::<SpriteInstance>() * SpriteKind::COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            quad_buffer,
            instance_buffer,
            camera_buffer,
            camera_bind_group,
            texture_bind_group_layout,
            textures: [None, None, None],
        }
    }

    /// Bind a texture to a sprite slot. `None` leaves the slot empty and the
    /// sprite is skipped when drawing.
    pub fn set_texture(&mut self, device: &wgpu::Device, kind: SpriteKind, texture: Option<&Texture>) {
        self.textures[kind as usize] = texture.map(|texture| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Sprite Texture Bind Group"),
                layout: &self.texture_bind_group_layout,
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
            })
        });
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera2D) {
        let uniform = CameraUniform::from_camera_2d(camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    pub fn update_sprites(&self, queue: &wgpu::Queue, sim: &Simulation) {
        let instances = layout_sprites(sim);
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
    }

    /// Clear the whole target, then draw the sprites into the top-left
    /// `scene` pixels.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView, scene: [f32; 2]) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sprite Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_viewport(0.0, 0.0, scene[0], scene[1], 0.0, 1.0);
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

        for (kind, bind_group) in drawable_sprites(&self.textures) {
            let instance = kind as u32;
            render_pass.set_bind_group(1, bind_group, &[]);
            render_pass.draw(0..UNIT_QUAD.len() as u32, instance..instance + 1);
        }
    }
}
