use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::map::Map;
use crate::map_formatter::MapFormatter;
use crate::parser::{self, InvalidLevel};
use crate::state::State;

/// A loaded level description: the static map and the initial state.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub map: Map,
    pub state: State,
}

impl Level {
    pub fn new(map: Map, state: State) -> Self {
        Level { map, state }
    }

    pub fn parse_format(level: &str, format: Format) -> Result<Self, InvalidLevel> {
        parser::parse_format(level, format)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.map, Some(&self.state), Format::Xsb)
    }

    pub fn codes(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.map, Some(&self.state), Format::Codes)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(&self.map, Some(&self.state), format)
    }
}

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
