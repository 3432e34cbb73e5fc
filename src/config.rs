use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use crate::moves::Moves;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `#@$.*+` text levels
    Xsb,
    /// whitespace separated cell codes, one row per line
    Codes,
    /// `{ "width", "height", "tiles" }` documents
    Json,
}

impl Format {
    /// Guess from the file extension, anything unknown is XSB.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Format {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("json") => Format::Json,
            Some("codes") => Format::Codes,
            _ => Format::Xsb,
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Xsb => write!(f, "xsb"),
            Format::Codes => write!(f, "codes"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// `None` means detect per file
    pub format: Option<Format>,
    /// replay these instead of reading commands from stdin
    pub moves: Option<Moves>,
    pub list: bool,
    pub files: Vec<PathBuf>,
}

impl Config {
    pub fn format_for(&self, path: &Path) -> Format {
        self.format.unwrap_or_else(|| Format::from_path(path))
    }
}
