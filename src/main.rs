//! Snowfall - animated snow wallpaper for the Windows desktop
//!
//! A winit window is stretched over the primary monitor and a background
//! task keeps it at the bottom of the window stack while the frame loop
//! animates the falling snow.

mod config;

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Fullscreen, Window, WindowId},
};

use snowfall_platform::LayeringDaemon;
use snowfall_render::{FrameBuffer, FramePipeline, RenderContext};
use snowfall_sim::SnowField;

use config::AppConfig;

/// Resolution assumed when the platform reports no primary monitor
const FALLBACK_RESOLUTION: PhysicalSize<u32> = PhysicalSize::new(1920, 1080);

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    frame_pipeline: Option<FramePipeline>,
    /// The simulation, mutated only in the advance step
    field: Option<SnowField>,
    /// CPU canvas the field is rasterized into, fixed at screen resolution
    frame: Option<FrameBuffer>,
    /// Background task keeping the window at the bottom of the stack
    daemon: Option<LayeringDaemon>,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        Self {
            config,
            window: None,
            render_context: None,
            frame_pipeline: None,
            field: None,
            frame: None,
            daemon: None,
        }
    }

    /// Start the window layering daemon
    ///
    /// Windows only; the wallpaper still renders as a normal fullscreen
    /// window elsewhere.
    fn spawn_daemon(&mut self) {
        #[cfg(windows)]
        {
            self.daemon = Some(LayeringDaemon::spawn(
                snowfall_platform::Win32WindowManager::new(),
                self.config.window.title.clone(),
                self.config.window.class.clone(),
                std::time::Duration::from_millis(self.config.daemon.startup_delay_ms),
                std::time::Duration::from_millis(self.config.daemon.interval_ms),
            ));
        }

        #[cfg(not(windows))]
        log::info!("Desktop layering is only available on Windows");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            // The canvas is pinned to the primary monitor's resolution for
            // the process lifetime
            let resolution = event_loop
                .primary_monitor()
                .map(|monitor| monitor.size())
                .unwrap_or(FALLBACK_RESOLUTION);

            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(resolution)
                .with_position(PhysicalPosition::new(0, 0))
                .with_fullscreen(Some(Fullscreen::Borderless(None)))
                .with_decorations(false)
                .with_transparent(true);

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context and blit pipeline
            let render_context = pollster::block_on(RenderContext::new(window.clone()));
            let frame_pipeline = FramePipeline::new(
                &render_context.device,
                render_context.config.format,
                resolution.width,
                resolution.height,
            );

            log::info!(
                "Snow canvas {}x{} with {} flakes",
                resolution.width,
                resolution.height,
                self.config.simulation.flake_count
            );

            self.field = Some(SnowField::new(
                resolution.width as f32,
                resolution.height as f32,
                self.config.simulation.flake_count,
            ));
            self.frame = Some(FrameBuffer::new(resolution.width, resolution.height));
            self.window = Some(window);
            self.render_context = Some(render_context);
            self.frame_pipeline = Some(frame_pipeline);

            self.spawn_daemon();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(daemon) = &mut self.daemon {
                    daemon.stop();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                // The surface follows the window; the simulation canvas
                // keeps the startup resolution
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(field), Some(frame)) = (&mut self.field, &mut self.frame) else {
                    return;
                };

                // Advance the simulation one frame, then rasterize it
                field.advance(frame.width() as f32, frame.height() as f32);
                frame.clear();
                frame.draw_flakes(field.flakes());

                // Blit the frame to the surface
                if let (Some(ctx), Some(pipeline)) = (&self.render_context, &self.frame_pipeline) {
                    pipeline.upload(&ctx.queue, frame);

                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(ctx) = &mut self.render_context {
                                ctx.resize(ctx.size);
                            }
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Frame Encoder"),
                            });

                    pipeline.render(&mut encoder, &view);

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting snowfall wallpaper");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application; a run-loop failure is fatal
    let mut app = App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {e}");
        std::process::exit(1);
    }
}
