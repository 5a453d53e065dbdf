//! Elastic Balls
//!
//! A hundred balls of random mass and color drift across an 800x800 window,
//! wrapping around its edges. Overlapping balls bounce off each other by
//! mirroring their velocities about the line joining their centres.
//!
//! Controls:
//! - Space: Pause/resume simulation
//! - N: Switch between the raw and the normalized collision normal
//! - Mouse click: Log the cursor position

use common::{window, FramePacer, GraphicsContext, PixelCamera, ShapeRenderer};
use elastic_balls::{ElasticConfig, Simulation};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

struct App {
    ctx: GraphicsContext,
    renderer: ShapeRenderer,
    camera: PixelCamera,
    simulation: Simulation,
    pacer: FramePacer,
    cursor: PhysicalPosition<f64>,
    paused: bool,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let config = ElasticConfig::default();
        let renderer = ShapeRenderer::new(&ctx, Simulation::max_shapes(&config));
        let camera = PixelCamera::new(window::WIDTH, window::HEIGHT);
        let simulation = Simulation::new(config, &mut rand::thread_rng());

        log::info!(
            "{} balls, kinetic energy {:.2}, normal mode {:?}",
            simulation.balls.len(),
            simulation.kinetic_energy(),
            simulation.config.normal_mode
        );

        Self {
            ctx,
            renderer,
            camera,
            simulation,
            pacer: FramePacer::default(),
            cursor: PhysicalPosition::new(0.0, 0.0),
            paused: false,
        }
    }

    fn update(&mut self) {
        if !self.paused {
            self.simulation.step();
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let shapes = self.simulation.shapes();
        self.renderer.draw_frame(&self.ctx, &self.camera, &shapes)
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Released {
            return;
        }

        match key {
            KeyCode::Space => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "paused" } else { "resumed" });
            }
            KeyCode::KeyN => {
                let mode = self.simulation.toggle_normal_mode();
                log::info!(
                    "normal mode {:?}, kinetic energy {:.2}",
                    mode,
                    self.simulation.kinetic_energy()
                );
            }
            _ => {}
        }
    }

    fn handle_click(&self) {
        log::info!("{}, {}", self.cursor.x, self.cursor.y);
    }
}

fn main() {
    let (ctx, event_loop) = match pollster::block_on(GraphicsContext::new(
        &format!("{} - elastic", window::TITLE),
        window::WIDTH,
        window::HEIGHT,
    )) {
        Ok(created) => created,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(ctx);

    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key),
                            state,
                            ..
                        },
                    ..
                } => app.handle_key(key, state),
                WindowEvent::CursorMoved { position, .. } => app.cursor = position,
                WindowEvent::MouseInput {
                    state: ElementState::Released,
                    ..
                } => app.handle_click(),
                WindowEvent::RedrawRequested => {
                    app.update();
                    match app.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => app.ctx.resize(app.ctx.size),
                        Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                        Err(e) => log::warn!("render error: {e:?}"),
                    }
                    app.pacer.finish();
                    app.pacer.begin();
                }
                _ => {}
            },
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            _ => {}
        }
    });

    if let Err(err) = result {
        log::error!("event loop: {err}");
        std::process::exit(1);
    }
}
