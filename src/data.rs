use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

/// Positions are stored as `u8` so levels are limited to 255 rows/columns.
pub(crate) const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub fn new(x: u8, y: u8) -> Self {
        Pos { x, y }
    }

    /// The neighboring position in `dir` or `None` if it would leave
    /// a `width` x `height` grid.
    pub fn step(self, dir: Dir, width: u8, height: u8) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let x = i16::from(self.x) + i16::from(dx);
        let y = i16::from(self.y) + i16::from(dy);
        if x < 0 || y < 0 || x >= i16::from(width) || y >= i16::from(height) {
            None
        } else {
            Some(Pos::new(x as u8, y as u8))
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    /// `(dx, dy)` with y growing downwards.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }

    pub fn from_delta(dx: i8, dy: i8) -> Option<Dir> {
        DIRECTIONS.iter().cloned().find(|d| d.delta() == (dx, dy))
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Up => 'u',
            Dir::Right => 'r',
            Dir::Down => 'd',
            Dir::Left => 'l',
        };
        write!(f, "{}", c)
    }
}

/// Static terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Wall,
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Empty => write!(f, " "),
            MapCell::Wall => write!(f, "#"),
        }
    }
}

/// What occupies a cell at a given moment, used when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

/// One cell of a level description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCode {
    Empty,
    Wall,
    Player,
    Box,
    Target,
    BoxOnTarget,
    PlayerOnTarget,
}

impl CellCode {
    pub fn code(self) -> &'static str {
        match self {
            CellCode::Empty => ".",
            CellCode::Wall => "W",
            CellCode::Player => "P",
            CellCode::Box => "B",
            CellCode::Target => "T",
            CellCode::BoxOnTarget => "BT",
            CellCode::PlayerOnTarget => "PT",
        }
    }
}

impl FromStr for CellCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(CellCode::Empty),
            "W" => Ok(CellCode::Wall),
            "P" => Ok(CellCode::Player),
            "B" => Ok(CellCode::Box),
            "T" => Ok(CellCode::Target),
            "BT" => Ok(CellCode::BoxOnTarget),
            "PT" => Ok(CellCode::PlayerOnTarget),
            _ => Err(()),
        }
    }
}

impl Display for CellCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
