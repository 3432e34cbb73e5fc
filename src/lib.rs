// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod engine;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod session;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;
use std::path::Path;

use log::debug;

use crate::config::Format;
use crate::level::Level;

pub trait LoadLevel {
    /// Reads the file and guesses the format from its contents.
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        debug!("Loading {}", self.as_ref().display());
        let level = fs::read_file(self)?;
        Ok(level.parse()?)
    }

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>> {
        debug!("Loading {} as {}", self.as_ref().display(), format);
        let level = fs::read_file(self)?;
        Ok(Level::parse_format(&level, format)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::data::DIRECTIONS;
    use crate::engine::{Phase, PuzzleEngine};
    use crate::moves::Moves;

    use super::*;

    #[test]
    fn bundled_levels_load() {
        let mut paths: Vec<_> = fs::read_dir("levels")
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        assert!(paths.len() >= 3);

        for path in &paths {
            let level = path.load_level().unwrap();
            let detected = path.load_level_as(Format::from_path(path)).unwrap();
            assert_eq!(level, detected, "{}", path.display());

            let engine = PuzzleEngine::new(&level);
            assert!(!engine.is_solved(), "{} is solved on load", path.display());
        }
    }

    #[test]
    fn solutions_solve_bundled_levels() {
        let solutions = [
            ("levels/level1.json", "rRR"),
            ("levels/level2.json", "dRRDrdLLruuurDD"),
            ("levels/level3.json", "UdrruulLLrddDullddrRR"),
            ("levels/one-way.txt", "UUU"),
            ("levels/two-rooms.codes", "RRRRDuurDD"),
        ];
        for &(path, solution) in &solutions {
            let level = path.load_level().unwrap();
            let mut engine = PuzzleEngine::new(&level);
            let moves: Moves = solution.parse().unwrap();
            assert_eq!(engine.replay(&moves), moves.move_cnt(), "{}", path);
            assert_eq!(engine.phase(), Phase::Completed, "{}", path);
            assert_eq!(engine.moves(), &moves, "{}", path);
            for &dir in &DIRECTIONS {
                assert!(!engine.attempt_move(dir).is_accepted());
            }
        }
    }

    #[test]
    fn missing_file() {
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }
}
