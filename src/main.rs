mod universe;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_canvas::{
    Args, Engine, Session,
    input::{self, Command},
    rendering::{self, SurfaceTexture},
    ui::{self, Controls},
};
use universe::Universe;

const ZOOM_STEP: f32 = 1.25;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn apply_command<E: Engine>(session: &mut Session<E>, command: Command) {
    match command {
        Command::TogglePlay => session.toggle_play(),
        Command::Reset => session.reset(),
        Command::StepOnce => session.step_once(),
        Command::FasterTicks => session.adjust_ticks_per_frame(1),
        Command::SlowerTicks => session.adjust_ticks_per_frame(-1),
        Command::ZoomIn => session.viewport.zoom_in(ZOOM_STEP),
        Command::ZoomOut => session.viewport.zoom_out(ZOOM_STEP),
        Command::ResetView => session.viewport.reset(),
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.render_config().context("invalid configuration")?;
    info!(
        width = args.width,
        height = args.height,
        cell_size = config.cell_size,
        "starting viewer"
    );

    let engine = Universe::new(args.width, args.height);
    let mut session = Session::new(engine, config).with_ticks_per_frame(args.ticks_per_frame);
    let mut texture = SurfaceTexture::new(session.surface());
    let mut controls = Controls::new(ui::panel_x());
    let mut uploaded_repaints = session.repaints();

    loop {
        let mouse_pos = mouse_position();
        controls.set_x(ui::panel_x());

        // Frame step requested on an earlier refresh runs first, so a
        // frame scheduled by this iteration's input waits for the next one
        session.on_display_refresh();

        // Control panel and keyboard
        let commands = controls.poll(mouse_pos).into_iter().chain(input::poll_commands());
        for command in commands {
            apply_command(&mut session, command);
        }

        // Edits on the grid surface repaint immediately
        let rect = session.display_rect();
        if mouse_pos.0 < ui::grid_area_width() {
            if let Some((point, modifiers)) = input::poll_surface_click(&rect, mouse_pos) {
                session.click(point, &rect, modifiers);
            }
        }

        controls.sync(session.controller());

        clear_background(Color::from_rgba(20, 20, 20, 255));
        if session.repaints() != uploaded_repaints {
            texture.upload(session.surface());
            uploaded_repaints = session.repaints();
        }
        texture.draw(&session.display_rect());
        rendering::draw_controls(&session, &controls, mouse_pos);

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
