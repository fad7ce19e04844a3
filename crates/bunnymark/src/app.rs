//! Application state and event loop

use anyhow::Result;
use glam::Vec2;
use std::sync::Arc;
use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use bunnymark_core::Bounds;

use crate::assets::{Assets, SpriteImage};
use crate::config::BunnymarkConfig;
use crate::render::Renderer;
use crate::state::DemoState;
use crate::ui::{HudStyle, install_hud_font, show_hud};

/// Main application state
pub struct App {
    // Window and rendering
    window: Arc<Window>,
    renderer: Renderer,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    // Simulation
    state: DemoState,
    config: BunnymarkConfig,
    hud_style: HudStyle,

    #[cfg(feature = "audio")]
    _music: Option<crate::audio::MusicPlayer>,

    // Input state
    mouse_pos: Option<(f32, f32)>,

    // Timing
    start: Instant,
}

impl App {
    /// Create the window, renderer and swarm
    pub async fn new(config: BunnymarkConfig) -> Result<(Self, EventLoop<()>)> {
        let event_loop = EventLoop::new()?;

        let window_attrs = WindowAttributes::default()
            .with_title(config.window.title.clone())
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height))
            .with_resizable(true);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log_window_info(&window);

        let assets = Assets::resolve(config.assets.dir.as_deref());
        log::info!("Asset directory: {}", assets.root().display());

        let sprite = match assets.load_sprite(&config.assets.sprite_file) {
            Ok(sprite) => sprite,
            Err(e) => {
                log::warn!("Couldn't load sprite: {e}, using placeholder");
                SpriteImage::placeholder(
                    config.swarm.sprite_width as u32,
                    config.swarm.sprite_height as u32,
                )
            }
        };

        let renderer = Renderer::new(
            window.clone(),
            &sprite,
            config.swarm.initial_capacity,
            config.window.vsync,
        )
        .await?;
        let (texture_width, texture_height) = renderer.sprite_size();
        log::info!("Sprite texture: {}x{}", texture_width, texture_height);

        let pixel_density = window.scale_factor() as f32;
        let state = DemoState::new(
            &config.swarm,
            config.hud.refresh_interval(),
            config.hud.background,
            renderer.bounds(),
            pixel_density,
        );

        // Setup egui
        let egui_ctx = egui::Context::default();
        match assets.load_font(&config.hud.font_file) {
            Ok(bytes) => install_hud_font(&egui_ctx, bytes),
            Err(e) => log::warn!("Couldn't load HUD font: {e}, using default font"),
        }
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &renderer.device,
            renderer.surface_format(),
            egui_wgpu::RendererOptions::default(),
        );

        #[cfg(feature = "audio")]
        let _music = start_music(&config, &assets);
        #[cfg(not(feature = "audio"))]
        note_audio_unavailable(&config);

        let hud_style = HudStyle {
            font_size: config.hud.font_size,
            margin: config.hud.margin,
            ..HudStyle::default()
        };

        log::info!("Application started successfully!");

        Ok((
            Self {
                window,
                renderer,
                egui_ctx,
                egui_state,
                egui_renderer,
                state,
                config,
                hud_style,
                #[cfg(feature = "audio")]
                _music,
                mouse_pos: None,
                start: Instant::now(),
            },
            event_loop,
        ))
    }

    /// Run the event loop
    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    /// Advance the swarm by the time since the previous frame
    fn update(&mut self) {
        let bounds: Bounds = self.renderer.bounds();
        self.state.frame(self.start.elapsed(), bounds);
    }

    /// Render frame
    fn render(&mut self) -> Result<()> {
        self.renderer.upload_swarm(self.state.swarm());
        let clear_color = self.state.clear_color(self.start.elapsed());

        // Begin frame
        let output = self.renderer.begin_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.renderer
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("render_encoder"),
                });

        // Render sprites
        self.renderer
            .render_sprites(&mut encoder, &view, clear_color);

        // Run egui
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let labels = self.state.labels();
        let hud_style = self.hud_style;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            show_hud(ctx, labels, &hud_style);
        });

        // Handle egui platform output
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        // Tessellate egui shapes
        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        // Update egui textures
        for (id, delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(
                &self.renderer.device,
                &self.renderer.queue,
                *id,
                delta,
            );
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.renderer.size().width, self.renderer.size().height],
            pixels_per_point: full_output.pixels_per_point,
        };

        self.egui_renderer.update_buffers(
            &self.renderer.device,
            &self.renderer.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        // Render egui on top of the sprites
        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.egui_renderer.render(
                &mut render_pass.forget_lifetime(),
                &paint_jobs,
                &screen_descriptor,
            );
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        // Submit and present
        self.renderer
            .queue
            .submit(std::iter::once(encoder.finish()));
        self.renderer.end_frame(output);

        Ok(())
    }

    fn spawn_at_cursor(&mut self) {
        if let Some((x, y)) = self.mouse_pos {
            let added = self.state.spawn_at(Vec2::new(x, y));
            log::info!(
                "Spawned {} bunnies at ({:.0}, {:.0}), total {}",
                added,
                x,
                y,
                self.state.swarm().len()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window and surface are created up front
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let egui_response = self.egui_state.on_window_event(&self.window, &event);
        if egui_response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("Pixel density changed to {scale_factor:.2}");
                self.state
                    .set_pixel_density(&self.config.swarm, scale_factor as f32);
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if let Err(e) = self.render() {
                    log::error!("Render error: {}", e);
                }
                self.window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Physical pixels, same space as the swarm bounds
                self.mouse_pos = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_pos = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.spawn_at_cursor();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!(
            "Application quit successfully! ({} bunnies, last FPS {})",
            self.state.swarm().len(),
            self.state.labels().fps()
        );
    }
}

/// Log logical vs backbuffer size the way high-DPI issues get diagnosed
fn log_window_info(window: &Window) {
    let physical = window.inner_size();
    let logical: LogicalSize<u32> = physical.to_logical(window.scale_factor());
    log::info!("Window size: {}x{}", logical.width, logical.height);
    log::info!("Backbuffer size: {}x{}", physical.width, physical.height);
    if logical.width != physical.width {
        log::info!("This is a highdpi environment.");
    }
}

#[cfg(feature = "audio")]
fn start_music(config: &BunnymarkConfig, assets: &Assets) -> Option<crate::audio::MusicPlayer> {
    if !config.audio.enabled {
        log::info!("Background music muted");
        return None;
    }

    let path = assets.path(&config.audio.music_file);
    match crate::audio::MusicPlayer::start(&path, config.audio.volume) {
        Ok(player) => Some(player),
        Err(e) => {
            log::warn!("Background music disabled: {e:#}");
            None
        }
    }
}

#[cfg(not(feature = "audio"))]
fn note_audio_unavailable(config: &BunnymarkConfig) {
    if config.audio.enabled {
        log::info!("Built without the `audio` feature, background music disabled");
    }
}
