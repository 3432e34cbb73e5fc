//! The rules: walking, pushing and detecting a solved level.
//!
//! The engine owns the only mutable copy of the player and box positions.
//! Everything outside talks to it through [`PuzzleEngine::attempt_move`]
//! and reads it back through [`PuzzleEngine::snapshot`].

use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::{debug, info, trace};
use serde::Serialize;

use crate::config::Format;
use crate::data::{Dir, Pos};
use crate::level::Level;
use crate::map::Map;
use crate::map_formatter::MapFormatter;
use crate::moves::{Move, Moves};
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accepted {
    ActorMoved,
    BoxPushed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Blocked {
    /// wall, grid edge or a box that can't move
    Obstacle,
    AlreadyCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    Accepted(Accepted),
    Rejected(Blocked),
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        match self {
            MoveOutcome::Accepted(_) => true,
            MoveOutcome::Rejected(_) => false,
        }
    }
}

/// `Completed` is terminal, restarting means building a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Playable,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxSnapshot {
    pub pos: Pos,
    pub on_target: bool,
}

/// Read-only view for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub width: u8,
    pub height: u8,
    pub player: Pos,
    pub boxes: Vec<BoxSnapshot>,
    pub targets: Vec<Pos>,
}

#[derive(Clone)]
pub struct PuzzleEngine {
    map: Map,
    state: State,
    on_target: Vec<bool>,
    // position -> index into `state.boxes`
    box_at: FnvHashMap<Pos, usize>,
    phase: Phase,
    moves: Moves,
}

impl PuzzleEngine {
    pub fn new(level: &Level) -> Self {
        let map = level.map.clone();
        let state = level.state.clone();
        let on_target = state.boxes.iter().map(|&b| map.is_target(b)).collect();
        let box_at = state
            .boxes
            .iter()
            .enumerate()
            .map(|(i, &b)| (b, i))
            .collect();
        debug!(
            "New engine: {} boxes, {} targets",
            state.boxes.len(),
            map.targets().len()
        );
        PuzzleEngine {
            map,
            state,
            on_target,
            box_at,
            phase: Phase::Playable,
            moves: Moves::default(),
        }
    }

    /// Take one step, pushing at most one box.
    ///
    /// Everything is checked before anything is changed so a rejected move
    /// leaves the engine exactly as it was.
    pub fn attempt_move(&mut self, dir: Dir) -> MoveOutcome {
        if self.phase == Phase::Completed {
            trace!("Ignoring {} - level already completed", dir);
            return MoveOutcome::Rejected(Blocked::AlreadyCompleted);
        }

        let (width, height) = (self.map.width(), self.map.height());
        let target = match self.state.player_pos.step(dir, width, height) {
            Some(pos) if !self.map.is_wall(pos) => pos,
            _ => {
                trace!("{} blocked at {}", dir, self.state.player_pos);
                return MoveOutcome::Rejected(Blocked::Obstacle);
            }
        };

        let outcome = match self.box_at.get(&target).cloned() {
            None => {
                self.state.player_pos = target;
                Accepted::ActorMoved
            }
            Some(index) => {
                let behind = match target.step(dir, width, height) {
                    Some(pos) if !self.map.is_wall(pos) && !self.box_at.contains_key(&pos) => {
                        pos
                    }
                    _ => {
                        trace!("Push {} blocked at {}", dir, target);
                        return MoveOutcome::Rejected(Blocked::Obstacle);
                    }
                };
                self.box_at.remove(&target);
                self.box_at.insert(behind, index);
                self.state.boxes[index] = behind;
                self.on_target[index] = self.map.is_target(behind);
                self.state.player_pos = target;
                Accepted::BoxPushed
            }
        };

        self.moves.add(Move::new(dir, outcome == Accepted::BoxPushed));
        trace!("{:?} {} -> {}", outcome, dir, self.state.player_pos);

        if self.is_solved() {
            info!(
                "Level completed in {} moves, {} pushes",
                self.moves.move_cnt(),
                self.moves.push_cnt()
            );
            self.phase = Phase::Completed;
        }
        MoveOutcome::Accepted(outcome)
    }

    /// At least one box and every box on a target.
    ///
    /// A level without boxes is never solved, otherwise it would be
    /// complete as soon as it's loaded.
    pub fn is_solved(&self) -> bool {
        !self.on_target.is_empty() && self.on_target.iter().all(|&on| on)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_pos(&self) -> Pos {
        self.state.player_pos
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Accepted moves so far, pushes in uppercase.
    pub fn moves(&self) -> &Moves {
        &self.moves
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.map.width(),
            height: self.map.height(),
            player: self.state.player_pos,
            boxes: self
                .state
                .boxes
                .iter()
                .zip(&self.on_target)
                .map(|(&pos, &on_target)| BoxSnapshot { pos, on_target })
                .collect(),
            targets: self.map.targets().to_vec(),
        }
    }

    /// Apply `moves` until one is rejected, returns how many were applied.
    ///
    /// Only directions are used, whether a move pushes is up to the level.
    pub fn replay<'a, I>(&mut self, moves: I) -> usize
    where
        I: IntoIterator<Item = &'a Move>,
    {
        let mut applied = 0;
        for mov in moves {
            if !self.attempt_move(mov.dir).is_accepted() {
                break;
            }
            applied += 1;
        }
        applied
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        self.map.format_with_state(format, &self.state)
    }
}

impl Display for PuzzleEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Xsb))
    }
}

impl Debug for PuzzleEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} after {:?}", self.phase, self.moves)?;
        write!(f, "{}", self)
    }
}
