//! JSON-lines event trace.
//!
//! When enabled, every session event becomes one JSON object on its own line,
//! tagged by `event`:
//!
//! ```text
//! {"event":"start","episode":1,"seed":12345,"rule":"uniform"}
//! {"event":"landing","lines":1,"points":100,"score":100,"level":1}
//! {"event":"game_over","score":100,"lines":1,"level":1,"pieces":23}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GravityScheduler, LandingEvent, RandomSource, Session};
use crate::types::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceRecord {
    Start {
        episode: u32,
        seed: u32,
        rule: &'static str,
    },
    Pause {
        score: u32,
    },
    Resume,
    End {
        episode: u32,
    },
    Landing {
        lines: u32,
        points: u32,
        score: u32,
        level: u32,
    },
    LevelUp {
        level: u32,
        drop_interval_ms: u32,
    },
    GameOver {
        score: u32,
        lines: u32,
        level: u32,
        pieces: u32,
    },
}

/// Phase and game id observed before a command, to detect transitions after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub phase: Phase,
    pub episode_id: u32,
}

impl Checkpoint {
    pub fn of<S: GravityScheduler, R: RandomSource>(session: &Session<S, R>) -> Self {
        Self {
            phase: session.phase(),
            episode_id: session.episode_id(),
        }
    }
}

/// Record for a lifecycle change between `before` and the session's current state
pub fn transition_record<S: GravityScheduler, R: RandomSource>(
    before: Checkpoint,
    session: &Session<S, R>,
    rule: &'static str,
) -> Option<TraceRecord> {
    if session.episode_id() != before.episode_id {
        return Some(TraceRecord::Start {
            episode: session.episode_id(),
            seed: session.seed(),
            rule,
        });
    }

    match (before.phase, session.phase()) {
        (Phase::Playing, Phase::Paused) => Some(TraceRecord::Pause {
            score: session.score(),
        }),
        (Phase::Paused, Phase::Playing) => Some(TraceRecord::Resume),
        (from, Phase::Ready) if from != Phase::Ready => Some(TraceRecord::End {
            episode: session.episode_id(),
        }),
        _ => None,
    }
}

pub struct TraceLog<W: Write> {
    out: W,
    line: Vec<u8>,
}

impl TraceLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TraceLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: Vec::with_capacity(256),
        }
    }

    pub fn record(&mut self, record: &TraceRecord) -> Result<()> {
        self.line.clear();
        serde_json::to_writer(&mut self.line, record)?;
        self.line.push(b'\n');
        self.out.write_all(&self.line)?;
        Ok(())
    }

    /// Write the landing plus any level-up and game-over it caused.
    pub fn record_landing<S: GravityScheduler, R: RandomSource>(
        &mut self,
        event: &LandingEvent,
        session: &Session<S, R>,
    ) -> Result<()> {
        self.record(&TraceRecord::Landing {
            lines: event.lines_cleared,
            points: event.points,
            score: session.score(),
            level: event.level,
        })?;

        if event.level_up {
            self.record(&TraceRecord::LevelUp {
                level: event.level,
                drop_interval_ms: event.drop_interval_ms,
            })?;
        }

        if event.game_over {
            self.record(&TraceRecord::GameOver {
                score: session.score(),
                lines: session.lines(),
                level: session.level(),
                pieces: session.piece_count(),
            })?;
        }
        Ok(())
    }

    /// Record everything that happened since `before` and drain the landing event.
    pub fn observe<S: GravityScheduler, R: RandomSource>(
        &mut self,
        before: Checkpoint,
        session: &mut Session<S, R>,
        rule: &'static str,
    ) -> Result<()> {
        if let Some(record) = transition_record(before, session, rule) {
            self.record(&record)?;
        }
        if let Some(event) = session.take_last_event() {
            self.record_landing(&event, session)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
