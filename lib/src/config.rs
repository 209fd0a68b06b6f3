//! Simulation configuration.

use crate::{
    error::Error, grid::Grid, neighbors::Visibility, round::Parallelism, rule::Rule,
    simulation::Simulation,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The simulation will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// How far a seat looks.
    pub visibility: Visibility,

    /// Number of visible occupied seats that makes an occupied seat empty.
    ///
    /// `None` means the usual threshold for the visibility:
    /// 4 for adjacent, 5 for line of sight.
    pub threshold: Option<usize>,

    /// How the work of a round is spread over tasks.
    pub parallelism: Parallelism,

    /// Number of worker threads.
    ///
    /// `None` means that rounds run on rayon's global thread pool.
    pub threads: Option<usize>,

    /// Maximal number of rounds to run, including the one that finds
    /// the fixed point.
    ///
    /// `None` means that there is no limit.
    #[educe(Default(expression = "Some(10_000)"))]
    pub max_rounds: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given visibility.
    pub fn new(visibility: Visibility) -> Self {
        Config {
            visibility,
            ..Config::default()
        }
    }

    /// Sets the visibility.
    pub fn set_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the threshold.
    pub fn set_threshold<T: Into<Option<usize>>>(mut self, threshold: T) -> Self {
        self.threshold = threshold.into();
        self
    }

    /// Sets how the work of a round is spread over tasks.
    pub fn set_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets the number of worker threads.
    pub fn set_threads<T: Into<Option<usize>>>(mut self, threads: T) -> Self {
        self.threads = threads.into();
        self
    }

    /// Sets the maximal number of rounds.
    pub fn set_max_rounds<T: Into<Option<u64>>>(mut self, max_rounds: T) -> Self {
        self.max_rounds = max_rounds.into();
        self
    }

    /// The rule described by this configuration.
    ///
    /// Returns an error if the threshold is out of range.
    pub fn rule(&self) -> Result<Rule, Error> {
        match self.threshold {
            Some(threshold) => Rule::new(self.visibility, threshold),
            None => Ok(Rule::from(self.visibility)),
        }
    }

    /// Creates a new simulation of `grid` from the configuration.
    pub fn simulation(&self, grid: Grid) -> Result<Simulation, Error> {
        Simulation::new(grid, self)
    }
}
