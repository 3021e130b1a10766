//! Two-Body Coulomb Interaction
//!
//! Renders two point charges interacting on a line. Each accepted frame runs
//! one physics tick, then draws the background, both charges and the
//! telemetry readout. Closing the window is the only input.

use std::path::Path;
use std::time::Instant;

use common::{Camera2D, GraphicsContext, Texture, Wrap};
use coulomb::config::{SimConfig, VIEW_HALF_HEIGHT};
use coulomb::equations_ui::{
    draw_equations_sidebar, draw_telemetry, COULOMB_EQUATIONS, COULOMB_VARIABLES, EQUATIONS_PANEL_WIDTH,
};
use coulomb::renderer::{scene_size, Renderer, SpriteKind};
use coulomb::{FrameGate, Simulation, Telemetry};
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    simulation: Simulation,
    camera: Camera2D,
    gate: FrameGate,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext, config: &SimConfig) -> Self {
        let mut renderer = Renderer::new(&ctx);
        let mut camera = Camera2D::new(ctx.aspect_ratio());
        camera.zoom = VIEW_HALF_HEIGHT;

        // Charge sprites clamp at their edges, the backdrop tiles.
        for (kind, path, wrap) in [
            (SpriteKind::Positive, &config.assets.positive, Wrap::Clamp),
            (SpriteKind::Negative, &config.assets.negative, Wrap::Clamp),
            (SpriteKind::Background, &config.assets.background, Wrap::Repeat),
        ] {
            let texture = load_sprite(&ctx, path, wrap);
            renderer.set_texture(&ctx.device, kind, texture.as_ref());
        }

        let simulation = Simulation::new(config.params, config.initial);
        let gate = FrameGate::new(config.frame_interval.0, Instant::now());

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        let mut app = Self {
            ctx,
            renderer,
            simulation,
            camera,
            gate,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        };
        app.fit_camera();
        app
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.fit_camera();
    }

    /// Area left of the equations panel, in physical pixels
    fn scene_pixels(&self) -> [f32; 2] {
        let panel_px = EQUATIONS_PANEL_WIDTH * self.ctx.window.scale_factor() as f32;
        scene_size(self.ctx.size.width, self.ctx.size.height, panel_px)
    }

    fn fit_camera(&mut self) {
        let [width, height] = self.scene_pixels();
        self.camera.update_aspect_ratio(width / height);
        let (half_width, half_height) = self.camera.half_extents();
        log::debug!(
            "scene {}x{} px shows ±{:.1} x ±{:.1} world units",
            width,
            height,
            half_width,
            half_height
        );
    }

    /// Poll the frame gate; on success advance one tick and ask for a frame.
    fn update(&mut self) {
        if self.gate.try_advance(Instant::now()) {
            self.simulation.step();
            self.ctx.window.request_redraw();
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        self.renderer.update_sprites(&self.ctx.queue, &self.simulation);

        let telemetry = Telemetry::capture(&self.simulation);
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_equations_sidebar(ctx, "Coulomb Interaction", COULOMB_EQUATIONS, COULOMB_VARIABLES);
            draw_telemetry(ctx, &telemetry);
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, self.scene_pixels());

        let egui_commands = self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(
            egui_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        Ok(())
    }
}

/// Missing or unreadable images only cost their sprite.
fn load_sprite(ctx: &GraphicsContext, path: &Path, wrap: Wrap) -> Option<Texture> {
    match Texture::load(&ctx.device, &ctx.queue, path, wrap) {
        Ok(texture) => {
            log::info!(
                "loaded sprite {} ({}x{})",
                path.display(),
                texture.width,
                texture.height
            );
            Some(texture)
        }
        Err(err) => {
            log::warn!("{err}; sprite will not be drawn");
            None
        }
    }
}

fn run(config: SimConfig) -> common::Result<()> {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        &config.window.title,
        config.window.width,
        config.window.height,
    ))?;

    let mut app = App::new(ctx, &config);
    log::info!(
        "simulating q1={} nC, q2={} nC at {:.0} Hz",
        app.simulation.particles[0].charge,
        app.simulation.particles[1].charge,
        1.0 / app.gate.threshold().as_secs_f64()
    );

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    log::info!(
                        "closing after {} ticks ({:.2} s simulated)",
                        app.simulation.ticks,
                        app.simulation.elapsed()
                    );
                    elwt.exit();
                }
                WindowEvent::Resized(size) => app.resize(size),
                WindowEvent::RedrawRequested => match app.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app.resize(app.ctx.size)
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        elwt.exit();
                    }
                    Err(e) => log::error!("render error: {:?}", e),
                },
                _ => {}
            },
            Event::AboutToWait => app.update(),
            _ => {}
        }
    })?;

    Ok(())
}

fn main() {
    println!("Coulomb Interaction - two point charges on a line");
    println!("Close the window to exit.");
    println!();

    if let Err(err) = run(SimConfig::default()) {
        log::error!("{err}");
        eprintln!("coulomb: {err}");
        std::process::exit(1);
    }
}
