use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a level: terrain and targets.
///
/// Never changes after loading, engines only borrow it for lookups.
#[derive(Clone, PartialEq, Eq)]
pub struct Map {
    pub(crate) grid: Vec2d<MapCell>,
    targets: Vec<Pos>,
    is_target: Vec2d<bool>,
}

impl Map {
    pub(crate) fn new(grid: Vec2d<MapCell>, targets: Vec<Pos>) -> Self {
        let mut is_target = grid.scratchpad(false);
        for &t in &targets {
            is_target[t] = true;
        }
        Map {
            grid,
            targets,
            is_target,
        }
    }

    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    /// `false` outside the grid.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && self.grid[pos] == MapCell::Wall
    }

    /// `false` outside the grid.
    pub fn is_target(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && self.is_target[pos]
    }

    /// Inside the grid and not a wall.
    pub fn is_free(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && !self.is_wall(pos)
    }

    pub fn format_with_state<'a>(&'a self, format: Format, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state), format)
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(self, None, Format::Xsb))
    }
}

impl Debug for Map {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    #[test]
    fn formatting_map() {
        let xsb_level = r"
*###*
#@$.#
*###*#
"
        .trim_start_matches('\n');
        let xsb_map = "
.###.
#  .#
.###.#
"
        .trim_start_matches('\n');
        let xsb_grid = " ###  \n#   # \n ### #\n";

        let level: Level = xsb_level.parse().unwrap();
        assert_eq!(format!("{}", level.map), xsb_map);
        assert_eq!(format!("{:?}", level.map), xsb_map);
        assert_eq!(format!("{}", level.map.grid), xsb_grid);
    }

    #[test]
    fn lookups() {
        let level: Level = "#####\n#@$.#\n#####".parse().unwrap();
        let map = &level.map;
        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 3);
        assert_eq!(map.targets(), &[Pos::new(3, 1)]);
        assert!(map.is_target(Pos::new(3, 1)));
        assert!(!map.is_target(Pos::new(2, 1)));
        assert!(map.is_wall(Pos::new(0, 0)));
        assert!(map.is_free(Pos::new(1, 1)));
        assert!(!map.is_free(Pos::new(4, 1)));
        assert!(!map.is_free(Pos::new(5, 1)));
    }

    #[test]
    fn lookups_outside_grid() {
        let level: Level = "#####\n#@$.#\n#####".parse().unwrap();
        let map = &level.map;
        // (5, 1) would be (0, 2) and (8, 0) would be (3, 1) in row-major order
        assert!(!map.is_wall(Pos::new(5, 1)));
        assert!(!map.is_target(Pos::new(8, 0)));
        assert!(!map.is_wall(Pos::new(0, 3)));
        assert!(!map.is_target(Pos::new(255, 255)));
    }
}
