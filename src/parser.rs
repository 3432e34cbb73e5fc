use std::error::Error;
use std::fmt::{self, Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Format;
use crate::data::{CellCode, MapCell, Pos, MAX_SIZE};
use crate::level::Level;
use crate::map::Map;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Why a level description was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidLevel {
    Empty,
    TooLarge,
    NoPlayer,
    MultiplePlayers,
    UnknownCode {
        x: usize,
        y: usize,
        code: String,
    },
    RowLength {
        y: usize,
        expected: usize,
        actual: usize,
    },
    Dimensions {
        width: usize,
        height: usize,
        rows: usize,
    },
    Json(String),
}

impl Display for InvalidLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidLevel::Empty => write!(f, "Empty level"),
            InvalidLevel::TooLarge => write!(f, "Map larger than 255 rows/columns"),
            InvalidLevel::NoPlayer => write!(f, "No player"),
            InvalidLevel::MultiplePlayers => write!(f, "More than one player"),
            InvalidLevel::UnknownCode { x, y, ref code } => {
                write!(f, "Invalid cell '{}' at pos: [{}, {}]", code, x, y)
            }
            InvalidLevel::RowLength {
                y,
                expected,
                actual,
            } => write!(
                f,
                "Row {} has {} cells, expected {}",
                y, actual, expected
            ),
            InvalidLevel::Dimensions {
                width,
                height,
                rows,
            } => write!(
                f,
                "Declared size {}x{} doesn't match {} rows of tiles",
                width, height, rows
            ),
            InvalidLevel::Json(ref msg) => write!(f, "Malformed level document: {}", msg),
        }
    }
}

impl Error for InvalidLevel {}

/// The on-disk shape of JSON levels, `tiles[y][x]` holds cell codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFile {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Vec<String>>,
}

/// Guess the format from the contents.
pub fn parse(level: &str) -> Result<Level, InvalidLevel> {
    let trimmed = level.trim_start();
    if trimmed.starts_with('{') {
        parse_format(level, Format::Json)
    } else if looks_like_codes(trimmed) || trimmed.contains('W') || trimmed.contains('T') {
        // neither W nor T appears in XSB
        parse_format(level, Format::Codes)
    } else {
        parse_format(level, Format::Xsb)
    }
}

/// Every token is a cell code and at least one of them is separated
/// from its neighbour or longer than one character.
fn looks_like_codes(level: &str) -> bool {
    let mut tokens = 0;
    let mut structural = false;
    for line in level.lines() {
        let mut line_tokens = 0;
        for token in line.split_whitespace() {
            if token.parse::<CellCode>().is_err() {
                return false;
            }
            line_tokens += 1;
            structural |= token.len() > 1;
        }
        structural |= line_tokens > 1;
        tokens += line_tokens;
    }
    tokens > 0 && structural
}

pub fn parse_format(level: &str, format: Format) -> Result<Level, InvalidLevel> {
    debug!("Parsing level as {}", format);
    let level = match format {
        Format::Xsb => parse_xsb(level)?,
        Format::Codes => parse_codes(level)?,
        Format::Json => parse_json(level)?,
    };
    debug!(
        "Parsed {}x{} level with {} boxes and {} targets",
        level.map.width(),
        level.map.height(),
        level.state.boxes.len(),
        level.map.targets().len()
    );
    Ok(level)
}

/// Collects cells row by row and checks the level as a whole at the end.
#[derive(Debug, Default)]
struct LevelBuilder {
    grid: Vec<Vec<MapCell>>,
    targets: Vec<Pos>,
    boxes: Vec<Pos>,
    player_pos: Option<Pos>,
}

impl LevelBuilder {
    fn start_row(&mut self) -> Result<(), InvalidLevel> {
        if self.grid.len() >= MAX_SIZE {
            return Err(InvalidLevel::TooLarge);
        }
        self.grid.push(Vec::new());
        Ok(())
    }

    fn push(&mut self, cell: CellCode) -> Result<(), InvalidLevel> {
        let y = self.grid.len() - 1;
        let x = self.grid[y].len();
        if x >= MAX_SIZE {
            return Err(InvalidLevel::TooLarge);
        }
        let pos = Pos::new(x as u8, y as u8);

        let terrain = match cell {
            CellCode::Wall => MapCell::Wall,
            _ => MapCell::Empty,
        };
        match cell {
            CellCode::Player | CellCode::PlayerOnTarget => {
                if self.player_pos.is_some() {
                    return Err(InvalidLevel::MultiplePlayers);
                }
                self.player_pos = Some(pos);
            }
            CellCode::Box | CellCode::BoxOnTarget => self.boxes.push(pos),
            CellCode::Empty | CellCode::Wall | CellCode::Target => {}
        }
        match cell {
            CellCode::Target | CellCode::BoxOnTarget | CellCode::PlayerOnTarget => {
                self.targets.push(pos)
            }
            _ => {}
        }

        self.grid[y].push(terrain);
        Ok(())
    }

    fn current_row_len(&self) -> usize {
        self.grid.last().map_or(0, Vec::len)
    }

    fn finish(self) -> Result<Level, InvalidLevel> {
        if self.grid.iter().all(Vec::is_empty) {
            return Err(InvalidLevel::Empty);
        }
        let player_pos = self.player_pos.ok_or(InvalidLevel::NoPlayer)?;
        let grid = Vec2d::new(&self.grid, MapCell::Empty);
        Ok(Level::new(
            Map::new(grid, self.targets),
            State::new(player_pos, self.boxes),
        ))
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
fn parse_xsb(level: &str) -> Result<Level, InvalidLevel> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut builder = LevelBuilder::default();
    for (y, line) in level.lines().enumerate() {
        builder.start_row()?;
        for (x, cur_char) in line.trim_end_matches('\r').chars().enumerate() {
            let cell = match cur_char {
                '#' => CellCode::Wall,
                'p' | '@' => CellCode::Player,
                'P' | '+' => CellCode::PlayerOnTarget,
                'b' | '$' => CellCode::Box,
                'B' | '*' => CellCode::BoxOnTarget,
                '.' => CellCode::Target,
                ' ' | '-' | '_' => CellCode::Empty,
                _ => {
                    return Err(InvalidLevel::UnknownCode {
                        x,
                        y,
                        code: cur_char.to_string(),
                    })
                }
            };
            builder.push(cell)?;
        }
    }
    builder.finish()
}

/// Whitespace separated cell codes, all rows equally long.
fn parse_codes(level: &str) -> Result<Level, InvalidLevel> {
    let mut builder = LevelBuilder::default();
    let mut expected = None;
    let rows = level.lines().filter(|line| !line.trim().is_empty());
    for (y, line) in rows.enumerate() {
        builder.start_row()?;
        for (x, token) in line.split_whitespace().enumerate() {
            let cell = token.parse().map_err(|_| InvalidLevel::UnknownCode {
                x,
                y,
                code: token.to_string(),
            })?;
            builder.push(cell)?;
        }

        let actual = builder.current_row_len();
        match expected {
            None => expected = Some(actual),
            Some(expected) if expected != actual => {
                return Err(InvalidLevel::RowLength {
                    y,
                    expected,
                    actual,
                })
            }
            Some(_) => {}
        }
    }
    builder.finish()
}

fn parse_json(level: &str) -> Result<Level, InvalidLevel> {
    let file: LevelFile =
        serde_json::from_str(level).map_err(|err| InvalidLevel::Json(err.to_string()))?;
    parse_level_file(&file)
}

pub fn parse_level_file(file: &LevelFile) -> Result<Level, InvalidLevel> {
    if file.width > MAX_SIZE || file.height > MAX_SIZE {
        return Err(InvalidLevel::TooLarge);
    }
    if file.tiles.len() != file.height {
        return Err(InvalidLevel::Dimensions {
            width: file.width,
            height: file.height,
            rows: file.tiles.len(),
        });
    }

    let mut builder = LevelBuilder::default();
    for (y, row) in file.tiles.iter().enumerate() {
        if row.len() != file.width {
            return Err(InvalidLevel::RowLength {
                y,
                expected: file.width,
                actual: row.len(),
            });
        }
        builder.start_row()?;
        for (x, code) in row.iter().enumerate() {
            let cell = code.parse().map_err(|_| InvalidLevel::UnknownCode {
                x,
                y,
                code: code.clone(),
            })?;
            builder.push(cell)?;
        }
    }
    builder.finish()
}
