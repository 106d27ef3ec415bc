mod cli;
mod controls;

use std::time::{Duration, Instant};

use anyhow::Context;
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use controls::ControlMsg;
use preview_core::{
    default_bindings, scene_instances, ControlBindings, DriverError, ParamStore, Preset,
    RenderDriver, RenderState, RenderSurface, SceneObject, DEFAULT_LAYOUT_SEED,
    DEFAULT_TICK_INTERVAL_MS, MIRROR_LEVEL_MAX,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    pos: [f32; 3],
    scale: f32,
    color: [f32; 4],
}

// Two solids plus both mirror rings at their ceiling
const MAX_INSTANCES: usize = 2 + 2 * MIRROR_LEVEL_MAX as usize;

/// Application state constructed once at startup and threaded by reference
/// through the loop; no global singletons.
struct App {
    store: ParamStore,
    bindings: ControlBindings,
    driver: RenderDriver,
    selected: SceneObject,
    last_pump: Instant,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
    layout_seed: u64,
    loaded: bool,
    out_of_memory: bool,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, layout_seed: u64) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
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
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        // vsync off; the frame timer paces redraws
        let present_mode = if surface_caps
            .present_modes
            .contains(&wgpu::PresentMode::Immediate)
        {
            wgpu::PresentMode::Immediate
        } else {
            wgpu::PresentMode::Fifo
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(preview_core::PREVIEW_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            width: size.width,
            height: size.height,
            layout_seed,
            loaded: false,
            out_of_memory: false,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn draw(&mut self, frame: &RenderState) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = frame.camera(aspect);
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_proj().to_cols_array_2d(),
            }),
        );

        let layout = scene_instances(frame, self.layout_seed);
        let mut instances: Vec<InstanceData> = Vec::with_capacity(layout.len());
        for inst in layout.iter().take(MAX_INSTANCES) {
            instances.push(InstanceData {
                pos: inst.position.to_array(),
                scale: inst.scale,
                color: inst.color,
            });
        }
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.04,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl RenderSurface for GpuState<'_> {
    fn load(&mut self) {
        self.loaded = true;
    }

    fn loaded(&self) -> bool {
        self.loaded
    }

    fn paint(&mut self, frame: &RenderState) {
        match self.draw(frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => self.resize(self.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
                self.out_of_memory = true;
            }
            Err(e) => log::warn!("frame skipped: {e:?}"),
        }
    }
}

fn apply_message(app: &mut App, msg: ControlMsg) -> bool {
    match msg {
        ControlMsg::Select(obj) => {
            app.selected = obj;
            log::info!("tint keys now edit the {:?}", obj);
        }
        ControlMsg::Gesture { control, gesture } => {
            app.bindings.dispatch(&mut app.store, control, gesture);
        }
        ControlMsg::ToggleTimer => {
            app.driver.toggle();
            log::info!("timer {:?}", app.driver.state());
        }
        ControlMsg::Reset => {
            app.store.reset();
            log::info!("parameters reset to defaults");
        }
        ControlMsg::Quit => return false,
    }
    true
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let overrides = cli::CliOverrides::parse_from_env()?;

    let mut store = ParamStore::new();
    if let Some(path) = overrides.preset() {
        let preset = Preset::load(path)?;
        let adjusted = preset.apply(&mut store);
        log::info!(
            "loaded preset {} ({} out-of-range values clamped)",
            path.display(),
            adjusted.len()
        );
    }

    let interval =
        Duration::from_millis(overrides.tick_ms().unwrap_or(DEFAULT_TICK_INTERVAL_MS));
    let layout_seed = overrides.seed().unwrap_or(DEFAULT_LAYOUT_SEED);

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title("Raytraced Preview Console")
        .build(&event_loop)
        .context("window")?;

    let mut gpu = pollster::block_on(GpuState::new(&window, layout_seed))?;
    gpu.load();

    let mut app = App {
        store,
        bindings: default_bindings(),
        driver: RenderDriver::new(interval),
        selected: SceneObject::Cube,
        last_pump: Instant::now(),
    };

    event_loop.run(move |event, elwt| {
        if app.driver.timer().enabled() {
            elwt.set_control_flow(ControlFlow::WaitUntil(
                app.last_pump + app.driver.timer().interval(),
            ));
        } else {
            elwt.set_control_flow(ControlFlow::Wait);
        }
        match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => gpu.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput {
                    event: key_event, ..
                },
                ..
            } => {
                if key_event.state == ElementState::Pressed {
                    match key_event.logical_key.as_ref() {
                        Key::Named(NamedKey::Space) => {
                            app.driver.toggle();
                            log::info!("timer {:?}", app.driver.state());
                        }
                        Key::Named(NamedKey::Escape) => elwt.exit(),
                        Key::Character(s) => {
                            if let Some(msg) = controls::message_for_key(s, app.selected) {
                                if !apply_message(&mut app, msg) {
                                    elwt.exit();
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = now - app.last_pump;
                app.last_pump = now;
                match app.driver.pump(dt, &app.store, &mut gpu) {
                    Ok(_) => {}
                    Err(DriverError::UninitializedSurface) => {
                        log::debug!("tick before surface load; frame skipped");
                    }
                }
                if gpu.out_of_memory {
                    elwt.exit();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
