//! Cells of the seat layout.

use crate::error::Error;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Floor, `.`.
    ///
    /// Not a seat. Floor never changes, and is never counted as a neighbor.
    Floor,
    /// An empty seat, `L`.
    Vacant,
    /// An occupied seat, `#`.
    Occupied,
}

impl State {
    /// Whether the cell is a seat, i.e., not [`Floor`](State::Floor).
    #[inline]
    pub fn is_seat(self) -> bool {
        self != State::Floor
    }

    /// The character used for this state in a seat layout.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            State::Floor => '.',
            State::Vacant => 'L',
            State::Occupied => '#',
        }
    }
}

impl TryFrom<char> for State {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(State::Floor),
            'L' => Ok(State::Vacant),
            '#' => Ok(State::Occupied),
            c => Err(c),
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);

/// Parses a single cell, reporting its position on failure.
pub(crate) fn parse_cell(c: char, (row, col): Coord) -> Result<State, Error> {
    State::try_from(c).map_err(|ch| Error::InvalidChar { row, col, ch })
}
