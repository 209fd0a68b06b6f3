//! The double-buffered seat layout.

use crate::{
    cells::{parse_cell, Coord, State},
    error::Error,
    neighbors::{self, Direction, Visibility},
};
use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
    str::FromStr,
};

/// A rectangular seat layout.
///
/// It holds two buffers of the same shape: `current`, the generation that is
/// being read, and `next`, the generation that is being written during a round.
/// Both are stored row by row and never reallocated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    current: Box<[State]>,
    next: Box<[State]>,
}

impl Grid {
    /// Creates a grid from its cells, row by row.
    pub fn new(height: usize, width: usize, cells: Vec<State>) -> Result<Self, Error> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }
        let expected = height
            .checked_mul(width)
            .ok_or(Error::TooLarge { height, width })?;
        if cells.len() != expected {
            return Err(Error::SizeMismatch {
                height,
                width,
                expected,
                found: cells.len(),
            });
        }
        let current = cells.into_boxed_slice();
        let next = current.clone();
        Ok(Grid {
            height,
            width,
            current,
            next,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The current generation, row by row.
    #[inline]
    pub fn current(&self) -> &[State] {
        &self.current
    }

    /// The generation written by the last round, row by row.
    ///
    /// It only differs from [`current`](Self::current) between a round
    /// and the following [`commit`](Self::commit).
    #[inline]
    pub fn next(&self) -> &[State] {
        &self.next
    }

    /// Gets the current state of a cell. Returns `None` if there is no such cell.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<State> {
        self.view().get(coord)
    }

    /// Iterates over the rows of the current generation.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> {
        self.current.chunks(self.width)
    }

    /// A read-only view of the current generation.
    #[inline]
    pub fn view(&self) -> GridView<'_> {
        GridView {
            height: self.height,
            width: self.width,
            cells: &self.current,
        }
    }

    /// Number of occupied seats in the current generation.
    pub fn occupied_count(&self) -> usize {
        self.current
            .iter()
            .filter(|&&state| state == State::Occupied)
            .count()
    }

    /// Number of directions in which an occupied seat is visible from `coord`,
    /// in the current generation.
    pub fn count_visible_occupied(&self, coord: Coord, visibility: Visibility) -> usize {
        neighbors::count_visible_occupied(self.view(), coord, visibility)
    }

    /// Splits the grid into a view of the current generation and
    /// the buffer of the next generation.
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (GridView<'_>, &mut [State]) {
        let view = GridView {
            height: self.height,
            width: self.width,
            cells: &self.current,
        };
        (view, &mut self.next)
    }

    /// Copies the next generation into the current one.
    ///
    /// [`Simulation`](crate::Simulation) does this after every round that
    /// changed some cell.
    #[inline]
    pub fn commit(&mut self) {
        self.current.copy_from_slice(&self.next);
    }
}

/// Parses a seat layout, one row per line.
///
/// * **Floor** is represented by `.`;
/// * **Vacant** seats are represented by `L`;
/// * **Occupied** seats are represented by `#`.
///
/// Blank lines at the end are ignored. A blank line anywhere else is a row
/// of width 0, and thus a [`RaggedRow`](Error::RaggedRow).
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = s.lines().collect();
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::with_capacity(s.len());
        for (row, line) in lines.into_iter().enumerate() {
            let start = cells.len();
            for (col, c) in line.chars().enumerate() {
                cells.push(parse_cell(c, (row, col))?);
            }
            let found = cells.len() - start;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                _ => (),
            }
            height += 1;
        }
        Grid::new(height, width.unwrap_or(0), cells)
    }
}

/// Displays the current generation in the same format as the input.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.rows() {
            for state in row {
                write!(f, "{}", state)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A read-only view of one generation of a [`Grid`].
///
/// Everything a cell needs to decide its next state goes through this view,
/// so a round can never observe the generation it is writing.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    height: usize,
    width: usize,
    cells: &'a [State],
}

impl<'a> GridView<'a> {
    /// Number of rows.
    #[inline]
    pub fn height(self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> usize {
        self.width
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    #[inline]
    pub fn get(self, (row, col): Coord) -> Option<State> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// The coordinates of the cell at row-major position `index`.
    #[inline]
    pub fn coord(self, index: usize) -> Coord {
        (index / self.width, index % self.width)
    }

    /// Moves one step from `coord` in direction `dir`.
    ///
    /// Returns `None` when the step leaves the grid.
    #[inline]
    pub fn offset(self, (row, col): Coord, dir: Direction) -> Option<Coord> {
        let row = row.checked_add_signed(dir.dr)?;
        let col = col.checked_add_signed(dir.dc)?;
        if row < self.height && col < self.width {
            Some((row, col))
        } else {
            None
        }
    }
}

impl<'a> Index<Coord> for GridView<'a> {
    type Output = State;

    #[inline]
    fn index(&self, (row, col): Coord) -> &Self::Output {
        assert!(col < self.width, "column {} out of range", col);
        &self.cells[row * self.width + col]
    }
}
