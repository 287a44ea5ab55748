//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_memory::term`. Configuration comes from `MEMORY_*` environment
//! variables (see `GameConfig::from_env`).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::core::{GameConfig, GameSnapshot, GameState};
use tui_memory::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_memory::journal::Journal;
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::TICK_MS;

fn main() -> Result<()> {
    // Configuration errors are reported before the terminal is touched.
    let config = GameConfig::from_env();
    config.validate().context("invalid board configuration")?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    let game = GameState::new(&config, seed)?;
    let journal = Journal::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, journal);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut game: GameState, mut journal: Journal) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        journal.record_all(game.take_events().iter());

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    let layout = view.layout(snap.rows, snap.cols, viewport);
                    if let Some(action) = handle_mouse_event(mouse, |x, y| layout.cell_at(x, y)) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
