use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid indexed by `Pos`.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    width: u8,
    height: u8,
}

impl<T> Vec2d<T> {
    pub(crate) fn width(&self) -> u8 {
        self.width
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos::new(x, y)))
    }
}

impl<T: Copy> Vec2d<T> {
    /// Rows shorter than the longest one are padded with `fill`.
    ///
    /// Callers make sure there are at most 255 rows and columns.
    pub(crate) fn new(grid: &[Vec<T>], fill: T) -> Self {
        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = Vec::with_capacity(grid.len() * width);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..width {
                data.push(fill);
            }
        }
        Vec2d {
            data,
            width: width as u8,
            height: grid.len() as u8,
        }
    }

    pub(crate) fn scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.width.into()) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        debug_assert!(self.contains(index), "{} outside {}x{}", index, self.width, self.height);
        let index = usize::from(index.y) * usize::from(self.width) + usize::from(index.x);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        debug_assert!(self.contains(index), "{} outside {}x{}", index, self.width, self.height);
        let index = usize::from(index.y) * usize::from(self.width) + usize::from(index.x);
        &mut self.data[index]
    }
}
