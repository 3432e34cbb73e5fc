use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::{debug, info};

use crate::data::Dir;
use crate::engine::{MoveOutcome, Phase, PuzzleEngine};
use crate::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErr {
    NoLevels,
    NoSuchLevel(usize),
}

impl Display for SessionErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SessionErr::NoLevels => write!(f, "No levels to play"),
            SessionErr::NoSuchLevel(index) => write!(f, "No level number {}", index + 1),
        }
    }
}

impl Error for SessionErr {}

/// A set of levels played one after another.
///
/// Tracks which level is current and which have been completed,
/// the engine for the current level is rebuilt on every (re)start.
#[derive(Debug)]
pub struct Session {
    levels: Vec<Level>,
    completed: Vec<bool>,
    current: usize,
    engine: PuzzleEngine,
}

impl Session {
    pub fn new(levels: Vec<Level>) -> Result<Self, SessionErr> {
        let engine = match levels.first() {
            Some(level) => PuzzleEngine::new(level),
            None => return Err(SessionErr::NoLevels),
        };
        let completed = vec![false; levels.len()];
        Ok(Session {
            levels,
            completed,
            current: 0,
            engine,
        })
    }

    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.current]
    }

    pub fn total_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// `false` for indices past the end.
    pub fn completed(&self, index: usize) -> bool {
        self.completed.get(index).cloned().unwrap_or(false)
    }

    pub fn select(&mut self, index: usize) -> Result<(), SessionErr> {
        if index >= self.levels.len() {
            return Err(SessionErr::NoSuchLevel(index));
        }
        debug!("Starting level {}", index + 1);
        self.current = index;
        self.engine = PuzzleEngine::new(&self.levels[index]);
        Ok(())
    }

    pub fn restart(&mut self) {
        debug!("Restarting level {}", self.current + 1);
        self.engine = PuzzleEngine::new(&self.levels[self.current]);
    }

    /// Returns `false` when the current level is the last one.
    pub fn next_level(&mut self) -> bool {
        let next = self.current + 1;
        self.select(next).is_ok()
    }

    pub fn attempt_move(&mut self, dir: Dir) -> MoveOutcome {
        let outcome = self.engine.attempt_move(dir);
        if outcome.is_accepted()
            && self.engine.phase() == Phase::Completed
            && !self.completed[self.current]
        {
            info!("Level {} completed", self.current + 1);
            self.completed[self.current] = true;
        }
        outcome
    }
}
