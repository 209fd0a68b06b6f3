//! One round of the automaton.

use crate::{
    cells::State,
    grid::{Grid, GridView},
    neighbors::{count_visible_occupied, par_count_visible_occupied},
    rule::Rule,
};
use educe::Educe;
use rayon::prelude::*;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the work of a round is spread over tasks.
///
/// All of them produce exactly the same generations.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parallelism {
    /// Computes every cell one after another on the calling thread.
    #[cfg_attr(feature = "serde", serde(rename = "serial"))]
    Serial,

    /// One task per cell.
    #[educe(Default)]
    #[cfg_attr(feature = "serde", serde(rename = "cell"))]
    PerCell,

    /// One task per cell, each of which spawns one task per direction.
    #[cfg_attr(feature = "serde", serde(rename = "direction"))]
    PerDirection,
}

impl FromStr for Parallelism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "serial" | "s" => Ok(Parallelism::Serial),
            "cell" | "c" => Ok(Parallelism::PerCell),
            "direction" | "d" => Ok(Parallelism::PerDirection),
            _ => Err(String::from("invalid Parallelism")),
        }
    }
}

impl Display for Parallelism {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            Parallelism::Serial => "serial",
            Parallelism::PerCell => "cell",
            Parallelism::PerDirection => "direction",
        };
        write!(f, "{}", s)
    }
}

/// Computes the next state of the cell at `index`, writes it to `slot`,
/// and tells whether it differs from the current state.
#[inline]
fn update_cell(
    view: GridView<'_>,
    rule: &Rule,
    parallelism: Parallelism,
    index: usize,
    slot: &mut State,
) -> bool {
    let coord = view.coord(index);
    let state = view[coord];
    let next = if state.is_seat() {
        let occupied = match parallelism {
            Parallelism::PerDirection => {
                par_count_visible_occupied(view, coord, rule.visibility())
            }
            _ => count_visible_occupied(view, coord, rule.visibility()),
        };
        rule.next_state(state, occupied)
    } else {
        state
    };
    *slot = next;
    next != state
}

/// Runs one round, filling the next generation of `grid` from its current one.
///
/// Returns the number of cells whose state changed. The current generation is
/// left untouched; see [`Grid::next`].
///
/// Parallel rounds run on the rayon thread pool the caller is in.
pub fn changed_cells(grid: &mut Grid, rule: &Rule, parallelism: Parallelism) -> usize {
    let (view, next) = grid.split_mut();
    match parallelism {
        Parallelism::Serial => next
            .iter_mut()
            .enumerate()
            .map(|(index, slot)| update_cell(view, rule, parallelism, index, slot))
            .filter(|&changed| changed)
            .count(),
        Parallelism::PerCell | Parallelism::PerDirection => next
            .par_iter_mut()
            .enumerate()
            .map(|(index, slot)| update_cell(view, rule, parallelism, index, slot))
            .filter(|&changed| changed)
            .count(),
    }
}

/// Runs one round. Returns whether any cell changed.
pub fn run_round(grid: &mut Grid, rule: &Rule, parallelism: Parallelism) -> bool {
    changed_cells(grid, rule, parallelism) > 0
}
