//! Terminal falling-block game runner.
//!
//! Owns the terminal lifecycle and the fixed-tick loop: poll for at most one
//! input per tick, advance the simulation, render. The terminal is restored
//! unconditionally on the way out, whatever ended the loop.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, TICK_MS};

/// How the session ended.
enum Outcome {
    Quit,
    GameOver { lines: u32 },
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Outcome::Quit => {}
        Outcome::GameOver { lines } => {
            println!("game over - {} lines cleared", lines);
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<Outcome> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);

    let mut game = Game::new(seed);
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut pending: Option<GameAction> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if game.game_over() {
            return Ok(Outcome::GameOver {
                lines: game.lines(),
            });
        }

        // Input with timeout until the next tick. Only the most recent
        // mapped key survives; the loop applies at most one per tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(Outcome::Quit);
                    }
                    if let Some(action) = handle_key_event(key) {
                        pending = Some(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(action) = pending.take() {
                game.apply_action(action);
            }
            game.tick();
        }
    }
}
