//! Integration tests for the runner's collaborators: input mapping, the
//! wall-clock scheduler, settings, tracing and rendering, wired to a session.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use blockfall::core::{ManualScheduler, Session};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::runtime::IntervalScheduler;
use blockfall::settings::Settings;
use blockfall::term::{GameView, Viewport};
use blockfall::trace::{Checkpoint, TraceLog};
use blockfall::types::{GameCommand, Phase};

fn press(game: &mut Session<ManualScheduler>, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(cmd) => game.apply(cmd),
        None => false,
    }
}

#[test]
fn test_keyboard_drives_lifecycle() {
    let mut game = Session::new(12345, ManualScheduler::new());

    assert!(press(&mut game, KeyCode::Enter));
    assert_eq!(game.phase(), Phase::Playing);

    let x = game.active().unwrap().x;
    assert!(press(&mut game, KeyCode::Char('a')));
    assert_eq!(game.active().unwrap().x, x - 1);

    assert!(press(&mut game, KeyCode::Char('p')));
    assert_eq!(game.phase(), Phase::Paused);
    assert!(!press(&mut game, KeyCode::Left));
    assert!(press(&mut game, KeyCode::Char('P')));
    assert_eq!(game.phase(), Phase::Playing);

    assert!(press(&mut game, KeyCode::Char(' ')));
    assert_eq!(game.grid().filled_count(), 4);

    assert!(press(&mut game, KeyCode::Esc));
    assert_eq!(game.phase(), Phase::Ready);

    assert!(!press(&mut game, KeyCode::Char('q')));
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
}

#[test]
fn test_interval_scheduler_follows_session() {
    let mut game = Session::new(1, IntervalScheduler::new());
    assert!(!game.scheduler().is_armed());

    game.start();
    assert_eq!(game.scheduler().interval_ms(), Some(1000));
    let due = game.scheduler().time_until_due(Instant::now()).unwrap();
    assert!(due <= Duration::from_millis(1000));

    game.toggle_pause();
    assert!(!game.scheduler().is_armed());
    assert_eq!(game.scheduler().time_until_due(Instant::now()), None);

    game.toggle_pause();
    assert_eq!(game.scheduler().interval_ms(), Some(1000));

    game.end();
    assert!(!game.scheduler().is_armed());
}

#[test]
fn test_due_tick_applies_gravity() {
    let mut game = Session::new(1, IntervalScheduler::new());
    game.start();
    let y = game.active().unwrap().y;

    let later = Instant::now() + Duration::from_millis(1500);
    if game.scheduler_mut().poll_due(later) {
        game.tick();
    }
    assert_eq!(game.active().unwrap().y, y + 1);
}

#[test]
fn test_settings_feed_session() {
    let settings = Settings::from_lookup(|key| match key {
        "BLOCKFALL_SEED" => Some("4242".to_string()),
        "BLOCKFALL_PIECE_RULE" => Some("bag7".to_string()),
        _ => None,
    })
    .unwrap();

    let mut a = Session::with_rule(settings.seed, settings.piece_rule, ManualScheduler::new());
    let mut b = Session::with_rule(4242, settings.piece_rule, ManualScheduler::new());
    a.start();
    b.start();
    assert_eq!(a.seed(), 4242);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_trace_of_a_short_game() {
    let mut game = Session::new(9, ManualScheduler::new());
    let mut log = TraceLog::new(Vec::new());

    for cmd in [
        GameCommand::Start,
        GameCommand::HardDrop,
        GameCommand::HardDrop,
        GameCommand::Pause,
    ] {
        let before = Checkpoint::of(&game);
        game.apply(cmd);
        log.observe(before, &mut game, "uniform").unwrap();
    }

    let text = String::from_utf8(log.into_inner()).unwrap();
    let events: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["seed"], 9);
    assert_eq!(events[1]["event"], "landing");
    assert_eq!(events[2]["event"], "landing");
    assert_eq!(events[3]["event"], "pause");
}

#[test]
fn test_render_tracks_session() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut game = Session::new(3, ManualScheduler::new());

    let text = |game: &Session<ManualScheduler>| {
        let fb = view.render(&game.snapshot(), viewport);
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    };

    assert!(text(&game).contains("PRESS ENTER"));
    game.start();
    let playing = text(&game);
    assert!(playing.contains("PLAYING"));
    assert!(playing.contains("SCORE"));
    game.toggle_pause();
    assert!(text(&game).contains("PAUSED"));
}
