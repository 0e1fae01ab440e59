//! Electric Field Visualizer
//!
//! Click to place point charges that orbit the origin; the field they produce
//! is drawn as short line segments over a jittered grid.

use std::process::ExitCode;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use efield_core::SimulationState;
use efield_input::PointerTracker;
use efield_render::shader::ShaderSources;
use efield_viz::config::AppConfig;
use efield_viz::input::{InputAction, InputMapper};
use efield_viz::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    shaders: ShaderSources,
    state: SimulationState,
    simulation: SimulationSystem,
    pointer: PointerTracker,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    failed: bool,
}

impl App {
    fn new(config: AppConfig, shaders: ShaderSources) -> Self {
        let state = config.simulation_state(config.window.width, config.window.height);
        Self {
            config,
            shaders,
            state,
            simulation: SimulationSystem::new(),
            pointer: PointerTracker::new(),
            window: None,
            render: None,
            failed: false,
        }
    }

    /// Log a fatal error and stop the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, message: impl std::fmt::Display) {
        log::error!("{}", message);
        self.failed = true;
        event_loop.exit();
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(
                self.state.charges().len(),
                self.state.charges().capacity(),
                self.state.show_markers(),
            );
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::PlaceCharge { x, y, polarity } => {
                self.simulation.place_charge(&mut self.state, x, y, polarity);
                self.update_title();
            }
            InputAction::ToggleMarkers => {
                self.simulation.toggle_markers(&mut self.state);
                self.update_title();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::Exit => event_loop.exit(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.update(&mut self.state);

        let Some(render) = &mut self.render else {
            return;
        };
        match render.render_frame(&self.state) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.recover_surface(),
            Err(RenderError::OutOfMemory) => {
                return self.fail(event_loop, RenderError::OutOfMemory);
            }
            Err(e) => log::warn!("Skipping frame: {}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e),
        };

        let size = window.inner_size();
        self.state.resize(size.width, size.height);

        let mut render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
            &self.shaders,
        ) {
            Ok(render) => render,
            Err(e) => return self.fail(event_loop, e),
        };

        let generator = self.config.grid_generator();
        let grid = generator.generate(self.state.table(), &mut rand::thread_rng());
        let (cols, rows) = generator.dimensions(self.state.table());
        log::info!(
            "Table {:.2} x {:.2}, grid {} x {} ({} points)",
            self.state.table().width(),
            self.state.table().height(),
            cols,
            rows,
            grid.len()
        );
        render.upload_grid(&grid);

        self.window = Some(window);
        self.render = Some(render);
        self.update_title();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if self.state.resize(physical_size.width, physical_size.height) {
                    log::debug!(
                        "Resized to {}x{}, table height {:.3}",
                        physical_size.width,
                        physical_size.height,
                        self.state.table().height()
                    );
                }
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.process_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.process_cursor_left();
            }

            WindowEvent::Focused(false) => {
                self.pointer.process_focus_lost();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.pointer.process_modifiers(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if self.pointer.process_keyboard(key, event.state) {
                        return;
                    }
                    if event.repeat {
                        return;
                    }
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let (width, height) = match &self.render {
                    Some(render) => render.size(),
                    None => return,
                };
                if let Some(click) = self.pointer.process_mouse_button(button, state, (width, height)) {
                    self.handle_action(event_loop, InputMapper::map_click(click));
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() -> ExitCode {
    // Validated after the logger exists so fallbacks are reported
    let config = AppConfig::extract_from("config");

    let log_level = match &config {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    config.validate();
    log::info!("Starting electric field visualizer");

    // All shader sources are read before any window or pipeline exists
    let shaders = match ShaderSources::load(&config.rendering.shader_dir) {
        Ok(shaders) => shaders,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, shaders);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    if app.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
