//! Terminal runner (default binary).
//!
//! Starts in the Ready screen; Enter starts a game. Gravity comes from an
//! [`IntervalScheduler`] the session arms and disarms, and input is polled
//! until the next gravity deadline. Rendering uses the framebuffer renderer
//! (no widget library).

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSnapshot, Session};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::runtime::IntervalScheduler;
use blockfall::settings::Settings;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::trace::{Checkpoint, TraceLog};

/// Input poll timeout while gravity is disarmed (Ready, Paused, GameOver).
const IDLE_POLL: Duration = Duration::from_millis(250);

type Game = Session<IntervalScheduler>;

fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    eprintln!(
        "[Blockfall] seed {} (rule {})",
        settings.seed,
        settings.piece_rule.as_str()
    );

    let mut trace = match &settings.trace_path {
        Some(path) => {
            eprintln!("[Blockfall] tracing events to {}", path.display());
            Some(TraceLog::open(path)?)
        }
        None => None,
    };

    let mut game = Session::with_rule(settings.seed, settings.piece_rule, IntervalScheduler::new());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, trace.as_mut(), settings.piece_rule.as_str());

    // Always try to restore terminal state.
    let _ = term.exit();

    let flushed = match trace.as_mut() {
        Some(log) => log.flush(),
        None => Ok(()),
    };

    eprintln!(
        "[Blockfall] final score {} (level {}, lines {})",
        game.score(),
        game.level(),
        game.lines()
    );
    result?;
    flushed
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut Game,
    mut trace: Option<&mut TraceLog<BufWriter<File>>>,
    rule: &'static str,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next gravity deadline.
        let timeout = game
            .scheduler()
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let before = Checkpoint::of(game);
                        game.apply(command);
                        if let Some(log) = trace.as_deref_mut() {
                            log.observe(before, game, rule)?;
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if game.scheduler_mut().poll_due(Instant::now()) {
            let before = Checkpoint::of(game);
            game.tick();
            if let Some(log) = trace.as_deref_mut() {
                log.observe(before, game, rule)?;
            }
        }
    }
}
