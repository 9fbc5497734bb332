use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{Cell, Occupant, Pos};

/// A row-major collection of cells addressed by `Pos`.
///
/// Rows keep the widths they were parsed with - short rows stay short and
/// positions past their end are simply out of bounds, which makes them
/// impassable without storing padding cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub(crate) fn new(rows: Vec<Vec<Cell>>) -> Grid {
        Grid { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// True if `pos` lies within the declared extent of its row.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0
            && pos.c >= 0
            && (pos.r as usize) < self.rows.len()
            && (pos.c as usize) < self.rows[pos.r as usize].len()
    }

    /// Row-major traversal yielding `(pos, cell, is_row_end)`.
    ///
    /// Restartable - each call starts a fresh pass. This is the one seam
    /// presenters consume; the engine uses it for player/box scans too.
    pub fn cells(&self) -> Cells<'_> {
        Cells { grid: self, r: 0, c: 0 }
    }

    /// Position of the player cell, if any. Parsed grids always have one.
    pub fn player_pos(&self) -> Option<Pos> {
        self.cells()
            .find(|&(_, cell, _)| cell.occupant == Occupant::Player)
            .map(|(pos, _, _)| pos)
    }

    pub fn box_count(&self) -> usize {
        self.cells()
            .filter(|&(_, cell, _)| cell.occupant == Occupant::Box)
            .count()
    }
}

// Out-of-bounds access is a programmer error, so indexing fails fast;
// callers check `contains` first.
impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Cell {
        &self.rows[pos.r as usize][pos.c as usize]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Cell {
        &mut self.rows[pos.r as usize][pos.c as usize]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (_, cell, is_row_end) in self.cells() {
            write!(f, "{}", cell.to_char())?;
            if is_row_end {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug)]
pub struct Cells<'a> {
    grid: &'a Grid,
    r: usize,
    c: usize,
}

impl Iterator for Cells<'_> {
    type Item = (Pos, Cell, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let row = loop {
            let row = self.grid.rows.get(self.r)?;
            if self.c < row.len() {
                break row;
            }
            // zero-width row, nothing to yield
            self.r += 1;
            self.c = 0;
        };

        let pos = Pos::new(self.r as i32, self.c as i32);
        let cell = row[self.c];
        let is_row_end = self.c == row.len() - 1;
        if is_row_end {
            self.r += 1;
            self.c = 0;
        } else {
            self.c += 1;
        }
        Some((pos, cell, is_row_end))
    }
}
