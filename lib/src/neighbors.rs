//! Which seats a cell can see.
//!
//! A cell looks in each of the eight [directions](Direction), and the
//! [`Visibility`] decides how far it looks.

use crate::{
    cells::{Coord, State},
    grid::GridView,
};
use auto_enums::auto_enum;
use educe::Educe;
use rayon::prelude::*;
use std::{
    fmt::{self, Display, Formatter},
    iter,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit step in one of the eight directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Row offset.
    pub dr: isize,
    /// Column offset.
    pub dc: isize,
}

impl Direction {
    /// All eight directions, the compass plus diagonals.
    pub const ALL: [Direction; 8] = [
        Direction { dr: -1, dc: -1 },
        Direction { dr: -1, dc: 0 },
        Direction { dr: -1, dc: 1 },
        Direction { dr: 0, dc: -1 },
        Direction { dr: 0, dc: 1 },
        Direction { dr: 1, dc: -1 },
        Direction { dr: 1, dc: 0 },
        Direction { dr: 1, dc: 1 },
    ];
}

/// How far a cell looks in each direction.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Visibility {
    /// Only the immediately adjacent cell.
    #[educe(Default)]
    Adjacent,

    /// The first seat in that direction.
    ///
    /// Floor is skipped over. The look stops at the first seat,
    /// or at the edge of the grid.
    LineOfSight,
}

impl Visibility {
    /// The threshold that usually comes with this visibility.
    ///
    /// 4 for [`Adjacent`](Visibility::Adjacent),
    /// 5 for [`LineOfSight`](Visibility::LineOfSight),
    /// since looking further tends to find more occupied seats.
    pub fn default_threshold(self) -> usize {
        match self {
            Visibility::Adjacent => 4,
            Visibility::LineOfSight => 5,
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacent" | "a" => Ok(Visibility::Adjacent),
            "line-of-sight" | "l" => Ok(Visibility::LineOfSight),
            _ => Err(String::from("invalid Visibility")),
        }
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            Visibility::Adjacent => "adjacent",
            Visibility::LineOfSight => "line-of-sight",
        };
        write!(f, "{}", s)
    }
}

/// The cells a look from `origin` towards `dir` passes over, nearest first.
#[auto_enum(Iterator)]
fn ray<'a>(
    view: GridView<'a>,
    origin: Coord,
    dir: Direction,
    visibility: Visibility,
) -> impl Iterator<Item = State> + 'a {
    match visibility {
        Visibility::Adjacent => view.offset(origin, dir).map(|coord| view[coord]).into_iter(),
        Visibility::LineOfSight => {
            iter::successors(view.offset(origin, dir), move |&coord| view.offset(coord, dir))
                .map(move |coord| view[coord])
        }
    }
}

/// Whether an occupied seat is visible from `origin` in direction `dir`.
///
/// A look that leaves the grid sees nothing.
pub fn sees_occupied(
    view: GridView<'_>,
    origin: Coord,
    dir: Direction,
    visibility: Visibility,
) -> bool {
    ray(view, origin, dir, visibility).find(|state| state.is_seat()) == Some(State::Occupied)
}

/// Number of directions in which an occupied seat is visible from `origin`.
///
/// Always between 0 and 8.
pub fn count_visible_occupied(view: GridView<'_>, origin: Coord, visibility: Visibility) -> usize {
    Direction::ALL
        .iter()
        .filter(|&&dir| sees_occupied(view, origin, dir, visibility))
        .count()
}

/// Same as [`count_visible_occupied`], but looks in all eight directions
/// in parallel.
pub fn par_count_visible_occupied(
    view: GridView<'_>,
    origin: Coord,
    visibility: Visibility,
) -> usize {
    Direction::ALL
        .par_iter()
        .filter(|&&dir| sees_occupied(view, origin, dir, visibility))
        .count()
}
