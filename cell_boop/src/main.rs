//! Cell Boop
//!
//! Two balls bounce around an 800x800 window tiled with 40px cells. The left
//! half of the cells starts out blue, the right half orange. A ball that runs
//! into a cell of the other color claims it for its own side and bounces off.
//!
//! Controls:
//! - Space: Pause/resume simulation
//! - Mouse click: Log the cell under the cursor

use cell_boop::{BoopConfig, Side, Simulation};
use common::{window, FramePacer, GraphicsContext, PixelCamera, ShapeRenderer};
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
        let config = BoopConfig::default();
        let renderer = ShapeRenderer::new(&ctx, Simulation::max_shapes(&config));
        let camera = PixelCamera::new(window::WIDTH, window::HEIGHT);
        let simulation = Simulation::new(config, &mut rand::thread_rng());

        log::info!(
            "{}x{} cells, balls launched at {:?}",
            simulation.grid.columns(),
            simulation.grid.rows(),
            simulation
                .balls
                .iter()
                .map(|b| (b.vx, b.vy))
                .collect::<Vec<_>>()
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

        if key == KeyCode::Space {
            self.paused = !self.paused;
            let grid = &self.simulation.grid;
            log::info!(
                "{}: left owns {} cells, right owns {}",
                if self.paused { "paused" } else { "resumed" },
                grid.count(Side::Left),
                grid.count(Side::Right)
            );
        }
    }

    fn handle_click(&self) {
        let size = self.simulation.grid.cell_size();
        log::info!(
            "{}, {}",
            (self.cursor.y / size).floor(),
            (self.cursor.x / size).floor()
        );
    }
}

fn main() {
    let (ctx, event_loop) = match pollster::block_on(GraphicsContext::new(
        &format!("{} - cell boop", window::TITLE),
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
