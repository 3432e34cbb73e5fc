use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{CellCode, Contents, MapCell, Pos};
use crate::map::Map;
use crate::parser::LevelFile;
use crate::state::State;
use crate::vec2d::Vec2d;

pub struct MapFormatter<'a> {
    map: &'a Map,
    state: Option<&'a State>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(map: &'a Map, state: Option<&'a State>, format: Format) -> Self {
        Self { map, state, format }
    }

    fn contents(&self) -> Vec2d<Contents> {
        let mut state_grid = self.map.grid.scratchpad(Contents::Empty);
        if let Some(state) = self.state {
            for &b in &state.boxes {
                state_grid[b] = Contents::Box;
            }
            state_grid[state.player_pos] = Contents::Player;
        }
        state_grid
    }

    fn cell_code(&self, state_grid: &Vec2d<Contents>, pos: Pos) -> CellCode {
        let target = self.map.is_target(pos);
        match (self.map.grid[pos], state_grid[pos], target) {
            (MapCell::Wall, _, _) => CellCode::Wall,
            (MapCell::Empty, Contents::Empty, false) => CellCode::Empty,
            (MapCell::Empty, Contents::Empty, true) => CellCode::Target,
            (MapCell::Empty, Contents::Box, false) => CellCode::Box,
            (MapCell::Empty, Contents::Box, true) => CellCode::BoxOnTarget,
            (MapCell::Empty, Contents::Player, false) => CellCode::Player,
            (MapCell::Empty, Contents::Player, true) => CellCode::PlayerOnTarget,
        }
    }

    fn write_xsb(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state_grid = self.contents();
        for y in 0..self.map.height() {
            // don't print trailing empty cells to match the input level strings
            let mut last_non_empty = 0;
            for x in 0..self.map.width() {
                if self.cell_code(&state_grid, Pos::new(x, y)) != CellCode::Empty {
                    last_non_empty = x;
                }
            }

            for x in 0..=last_non_empty {
                let c = match self.cell_code(&state_grid, Pos::new(x, y)) {
                    CellCode::Empty => ' ',
                    CellCode::Wall => '#',
                    CellCode::Player => '@',
                    CellCode::Box => '$',
                    CellCode::Target => '.',
                    CellCode::BoxOnTarget => '*',
                    CellCode::PlayerOnTarget => '+',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_codes(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.tiles() {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }

    fn write_json(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = LevelFile {
            width: self.map.width().into(),
            height: self.map.height().into(),
            tiles: self.tiles(),
        };
        let json = serde_json::to_string(&file).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", json)
    }

    fn tiles(&self) -> Vec<Vec<String>> {
        let state_grid = self.contents();
        (0..self.map.height())
            .map(|y| {
                (0..self.map.width())
                    .map(|x| self.cell_code(&state_grid, Pos::new(x, y)).to_string())
                    .collect()
            })
            .collect()
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Xsb => self.write_xsb(f),
            Format::Codes => self.write_codes(f),
            Format::Json => self.write_json(f),
        }
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    #[test]
    fn moved_state_is_drawn() {
        let level: Level = "#####\n#@$.#\n#####".parse().unwrap();
        let moved = State::new(Pos::new(2, 1), vec![Pos::new(3, 1)]);
        assert_eq!(
            level.map.format_with_state(Format::Xsb, &moved).to_string(),
            "#####\n# @*#\n#####\n"
        );
        assert_eq!(
            level.map.format_with_state(Format::Codes, &moved).to_string(),
            "W W W W W\nW . P BT W\nW W W W W\n"
        );
    }

    #[test]
    fn json_document() {
        let level: Level = "###\n#@#\n###".parse().unwrap();
        assert_eq!(
            level.format(Format::Json).to_string(),
            r#"{"width":3,"height":3,"tiles":[["W","W","W"],["W","P","W"],["W","W","W"]]}"#
                .to_string()
                + "\n"
        );
    }
}
