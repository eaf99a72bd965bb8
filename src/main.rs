//! Terminal blockfall runner (default binary).
//!
//! The frame loop: poll input until the next tick, apply commands, tick
//! the session, drain events into the effect system and score banner,
//! snapshot, render. The session owns all game state; everything out here
//! is presentation plumbing.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{ScoreSink, Session, SessionEvent, Snapshot};
use blockfall::input::{map_key_event, should_quit, KeyRepeater};
use blockfall::term::{EffectSystem, GameView, ScoreBanner, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = wall_clock_seed();
    let mut session = Session::new(seed);
    let mut effects = EffectSystem::new(seed.rotate_left(13) ^ 0x9e37_79b9);
    let mut banner = ScoreBanner::new();
    let mut repeater = KeyRepeater::new();
    let view = GameView::default();
    let mut snapshot = Snapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, &effects, banner.text(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(command) = map_key_event(key) {
                            if let Some(command) = repeater.press(command) {
                                session.apply(command);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Terminal auto-repeat is ignored; the repeater
                        // generates repeats itself.
                    }
                    KeyEventKind::Release => {
                        if let Some(command) = map_key_event(key) {
                            repeater.release(command);
                        }
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for command in repeater.update(TICK_MS) {
                session.apply(command);
            }

            effects.update(TICK_MS);
            session.tick(TICK_MS);

            for event in session.drain_events() {
                match event {
                    SessionEvent::RowCleared { row } => effects.spawn_burst(row),
                    SessionEvent::ScoreChanged { score } => banner.on_score_changed(score),
                    SessionEvent::Spawned { .. }
                    | SessionEvent::Locked { .. }
                    | SessionEvent::SessionReset => {}
                }
            }
        }
    }
}

/// Seed each run from the wall clock so sessions differ between launches.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
