//! The update rule.

use crate::{cells::State, error::Error, neighbors::Visibility};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rule applied to every seat in each round.
///
/// * An empty seat with no visible occupied seat becomes occupied.
/// * An occupied seat with at least `threshold` visible occupied seats
///   becomes empty.
/// * Otherwise the seat does not change. Floor never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    visibility: Visibility,
    threshold: usize,
}

impl Rule {
    /// Creates a new rule.
    ///
    /// Returns an error if `threshold` is not between 1 and 8.
    pub fn new(visibility: Visibility, threshold: usize) -> Result<Self, Error> {
        if !(1..=8).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        Ok(Rule {
            visibility,
            threshold,
        })
    }

    /// How far a seat looks.
    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Number of visible occupied seats that makes an occupied seat empty.
    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The next state of a cell with `occupied` visible occupied seats.
    #[inline]
    pub fn next_state(&self, state: State, occupied: usize) -> State {
        match state {
            State::Vacant if occupied == 0 => State::Occupied,
            State::Occupied if occupied >= self.threshold => State::Vacant,
            state => state,
        }
    }
}

/// The rule with the usual threshold for the visibility.
impl From<Visibility> for Rule {
    fn from(visibility: Visibility) -> Self {
        Rule {
            visibility,
            threshold: visibility.default_threshold(),
        }
    }
}
