//! Session module - the game state machine
//!
//! A session ties together the grid, spawner, collision and rotation rules,
//! scoring, and the gravity scheduler. Every public mutation runs to
//! completion before returning; renderers read the state between calls.
//!
//! Illegal moves are not errors: they leave the state untouched and the
//! method returns `false`.

use crate::collision::{collides, fits, landing_y};
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::rotation::{try_rotate, RotationDir};
use crate::scheduler::GravityScheduler;
use crate::scoring::{drop_interval_ms, score_landing};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::spawner::{ActivePiece, NextPiece, PieceRule, Spawner};
use crate::types::{GameCommand, Phase, BASE_DROP_MS};

/// What happened when a piece landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    /// Cells written into the grid
    pub cells_committed: u32,
    pub lines_cleared: u32,
    pub points: u32,
    /// Level after the landing
    pub level: u32,
    pub level_up: bool,
    /// Drop interval after the landing
    pub drop_interval_ms: u32,
    /// The replacement piece could not be placed
    pub game_over: bool,
}

/// One game: grid, pieces, counters, phase and the gravity scheduler
#[derive(Debug, Clone)]
pub struct Session<S: GravityScheduler, R: RandomSource = SimpleRng> {
    grid: Grid,
    spawner: Spawner<R>,
    scheduler: S,
    active: Option<ActivePiece>,
    phase: Phase,
    seed: u32,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Monotonic game id (increments on every start).
    episode_id: u32,
    /// Pieces spawned in the current game.
    piece_count: u32,
    /// Last landing (consumed by observers).
    last_event: Option<LandingEvent>,
}

impl<S: GravityScheduler> Session<S, SimpleRng> {
    /// Session with a uniform spawner seeded with `seed`
    pub fn new(seed: u32, scheduler: S) -> Self {
        Self::with_rule(seed, PieceRule::Uniform, scheduler)
    }

    pub fn with_rule(seed: u32, rule: PieceRule, scheduler: S) -> Self {
        let mut session = Self::with_spawner(Spawner::new(SimpleRng::new(seed), rule), scheduler);
        session.seed = seed;
        session
    }
}

impl<S: GravityScheduler, R: RandomSource> Session<S, R> {
    /// Session over an arbitrary spawner (custom random sources)
    pub fn with_spawner(spawner: Spawner<R>, scheduler: S) -> Self {
        Self {
            grid: Grid::new(),
            spawner,
            scheduler,
            active: None,
            phase: Phase::Ready,
            seed: 0,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            episode_id: 0,
            piece_count: 0,
            last_event: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_count(&self) -> u32 {
        self.piece_count
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&NextPiece> {
        self.spawner.peek()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Replace the grid with a prepared layout (puzzle starts, fixtures).
    ///
    /// Panics if the active piece would overlap the new layout.
    pub fn preset_grid(&mut self, grid: Grid) {
        if let Some(active) = &self.active {
            assert!(
                self.phase == Phase::GameOver || fits(&grid, active.x, active.y, &active.shape),
                "preset grid overlaps the active piece"
            );
        }
        self.grid = grid;
    }

    /// Row the active piece would land on
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(landing_y(&self.grid, active.x, active.y, &active.shape))
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.spawner.peek().copied().map(NextSnapshot::from);
        out.phase = self.phase;
        out.seed = self.seed;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn reset_state(&mut self) {
        self.grid.reset();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.piece_count = 0;
        self.last_event = None;
    }

    /// Reset and begin a new game from any phase
    pub fn start(&mut self) {
        self.reset_state();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawner.prime();
        self.phase = Phase::Playing;
        self.scheduler.arm(self.drop_interval_ms);
        self.spawn_next();
    }

    /// Reset to Ready from any phase and stop gravity
    pub fn end(&mut self) {
        self.scheduler.disarm();
        self.reset_state();
        self.spawner.clear();
        self.phase = Phase::Ready;
    }

    /// Toggle Playing ⇄ Paused. No-op in other phases.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => {
                self.scheduler.disarm();
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.scheduler.arm(self.drop_interval_ms);
                self.phase = Phase::Playing;
                true
            }
            Phase::Ready | Phase::GameOver => false,
        }
    }

    /// Gravity signal: move down one row or land
    pub fn tick(&mut self) -> bool {
        self.step_down()
    }

    /// Promote the lookahead piece; on a blocked spawn the game ends.
    fn spawn_next(&mut self) {
        let piece = self.spawner.advance();
        self.piece_count = self.piece_count.wrapping_add(1);
        self.active = Some(piece);

        if collides(&self.grid, piece.x, piece.y, &piece.shape) {
            self.phase = Phase::GameOver;
            self.scheduler.disarm();
        }
    }

    fn playing_piece(&self) -> Option<ActivePiece> {
        if !self.phase.accepts_moves() {
            return None;
        }
        self.active
    }

    /// Move one column left (-1) or right (+1)
    pub(crate) fn try_shift(&mut self, dx: i8) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        if collides(&self.grid, active.x + dx, active.y, &active.shape) {
            return false;
        }
        self.active = Some(active.shifted(dx, 0));
        true
    }

    /// Move down one row if legal, otherwise land the piece
    fn step_down(&mut self) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        if fits(&self.grid, active.x, active.y + 1, &active.shape) {
            self.active = Some(active.shifted(0, 1));
        } else {
            self.land();
        }
        true
    }

    pub(crate) fn try_rotate(&mut self, dir: RotationDir) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        match try_rotate(&self.grid, &active.shape, active.x, active.y, dir) {
            Some(outcome) => {
                self.active = Some(ActivePiece {
                    shape: outcome.shape,
                    x: outcome.x,
                    ..active
                });
                true
            }
            None => false,
        }
    }

    /// Drop to the lowest legal row and land in one step
    pub(crate) fn hard_drop(&mut self) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        let y = landing_y(&self.grid, active.x, active.y, &active.shape);
        self.active = Some(ActivePiece { y, ..active });
        self.land();
        true
    }

    /// Commit the active piece, clear rows, score, and spawn the next piece
    fn land(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let committed = self
            .grid
            .commit_piece(&active.shape, active.x, active.y, active.color_id);
        let cleared = self.grid.clear_full_rows().len();

        let result = score_landing(cleared, self.lines, self.level);
        self.score = self.score.saturating_add(result.points);
        self.lines = result.total_lines;
        self.level = result.level;

        if result.level_up {
            self.drop_interval_ms = drop_interval_ms(self.level);
            // Interval changes need a fresh schedule, not an in-place edit.
            self.scheduler.arm(self.drop_interval_ms);
        }

        self.spawn_next();

        self.last_event = Some(LandingEvent {
            cells_committed: committed as u32,
            lines_cleared: cleared as u32,
            points: result.points,
            level: self.level,
            level_up: result.level_up,
            drop_interval_ms: self.drop_interval_ms,
            game_over: self.phase == Phase::GameOver,
        });
    }

    /// Apply one command token; returns true when state changed
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.try_shift(-1),
            GameCommand::MoveRight => self.try_shift(1),
            GameCommand::SoftDrop => self.step_down(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::RotateCw => self.try_rotate(RotationDir::Clockwise),
            GameCommand::RotateCcw => self.try_rotate(RotationDir::CounterClockwise),
            GameCommand::Pause => self.toggle_pause(),
            GameCommand::Start => {
                self.start();
                true
            }
            GameCommand::End => {
                self.end();
                true
            }
        }
    }
}
