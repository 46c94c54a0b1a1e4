//! Terminal runner (default binary).
//!
//! Single-threaded loop: drain input, advance gravity, render the snapshot
//! through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    terminal,
};
use log::{debug, error, info};

use flood_tetris::config::Config;
use flood_tetris::core::{GameSnapshot, GameState};
use flood_tetris::input::handle_key_event;
use flood_tetris::logging;
use flood_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use flood_tetris::types::FRAME_MS;

fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(&config)?;

    let seed = config.seed_or_random();
    info!(
        "starting: seed={} cell_width={} log_level={}",
        seed, config.cell_width, config.log_level
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Restore the terminal even when the loop failed.
    let restored = term.exit();
    match &result {
        Ok(()) => info!("session ended"),
        Err(e) => error!("game loop failed: {e:#}"),
    }
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::new(config.cell_width, 1);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS);
    let started = Instant::now();

    while game.running() {
        // Wait up to one frame, then drain whatever else is queued.
        let mut timeout = frame;
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = handle_key_event(key) {
                        debug!("input: {}", action.as_str());
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            timeout = Duration::ZERO;
        }

        game.tick(started.elapsed().as_millis() as u64);
        if let Some(ev) = game.take_last_event().filter(|ev| ev.cleared) {
            info!(
                "cleared {} blocks at ({}, {})",
                ev.region_size, ev.x, ev.y
            );
        }

        game.snapshot_into(&mut snap);
        let (w, h) = terminal::size().unwrap_or((80, 30));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }

    Ok(())
}
