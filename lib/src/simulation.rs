//! Running rounds until nothing changes.

use crate::{
    config::Config,
    error::Error,
    grid::Grid,
    round::{changed_cells, Parallelism},
    rule::Rule,
};
use log::{debug, info, trace, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The last round changed some cells.
    Running,
    /// The last round changed nothing. This is terminal.
    Converged,
}

/// A seat layout together with the rule that drives it.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    rule: Rule,
    parallelism: Parallelism,

    /// Dedicated thread pool. `None` means rayon's global pool.
    pool: Option<ThreadPool>,

    /// Maximal number of rounds to run, including the one that finds
    /// the fixed point.
    max_rounds: Option<u64>,

    status: Status,

    /// Number of rounds run.
    rounds: u64,

    /// Number of rounds that changed the grid.
    generation: u64,
}

impl Simulation {
    /// Creates a new simulation from a grid and a configuration.
    pub fn new(grid: Grid, config: &Config) -> Result<Self, Error> {
        if config.threads == Some(0) || config.max_rounds == Some(0) {
            return Err(Error::NonPositiveError);
        }
        let rule = config.rule()?;
        let pool = match config.threads {
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("seatsim-{}", i))
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?;
                debug!("Built a thread pool with {} threads", threads);
                Some(pool)
            }
            None => None,
        };
        debug!(
            "New {}x{} simulation: {} visibility, threshold {}, {} parallelism",
            grid.height(),
            grid.width(),
            rule.visibility(),
            rule.threshold(),
            config.parallelism
        );
        Ok(Simulation {
            grid,
            rule,
            parallelism: config.parallelism,
            pool,
            max_rounds: config.max_rounds,
            status: Status::Running,
            rounds: 0,
            generation: 0,
        })
    }

    /// The seat layout.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the simulation and returns the seat layout.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// How the work of a round is spread over tasks.
    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Simulation status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of rounds run so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Number of rounds that changed the grid so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of occupied seats at the equilibrium.
    ///
    /// `None` until the simulation has converged.
    pub fn occupied_count(&self) -> Option<usize> {
        match self.status {
            Status::Converged => Some(self.grid.occupied_count()),
            Status::Running => None,
        }
    }

    /// Runs one round.
    ///
    /// If some cell changed, the new generation becomes the current one.
    /// Otherwise the simulation is converged, and further calls do nothing.
    pub fn step(&mut self) -> Status {
        if self.status == Status::Converged {
            return self.status;
        }
        let grid = &mut self.grid;
        let rule = &self.rule;
        let parallelism = self.parallelism;
        let changed = match &self.pool {
            Some(pool) => pool.install(|| changed_cells(grid, rule, parallelism)),
            None => changed_cells(grid, rule, parallelism),
        };
        self.rounds += 1;
        trace!("Round {}: {} cells changed", self.rounds, changed);
        if changed > 0 {
            self.grid.commit();
            self.generation += 1;
        } else {
            self.status = Status::Converged;
        }
        self.status
    }

    /// Runs rounds until the grid reaches its equilibrium.
    ///
    /// Returns the number of occupied seats.
    pub fn run(&mut self) -> Result<usize, Error> {
        self.run_until(&AtomicBool::new(false))
    }

    /// Runs rounds until the grid reaches its equilibrium,
    /// or until `cancel` is set.
    ///
    /// `cancel` is checked between rounds. Returns the number of occupied seats.
    pub fn run_until(&mut self, cancel: &AtomicBool) -> Result<usize, Error> {
        while self.status == Status::Running {
            if cancel.load(Ordering::Relaxed) {
                warn!("Cancelled after {} rounds", self.rounds);
                return Err(Error::Cancelled(self.rounds));
            }
            if let Some(max_rounds) = self.max_rounds {
                if self.rounds >= max_rounds {
                    warn!("No equilibrium after {} rounds", self.rounds);
                    return Err(Error::NotConverged(self.rounds));
                }
            }
            self.step();
        }
        let count = self.grid.occupied_count();
        info!(
            "Converged after {} rounds ({} generations) with {} occupied seats",
            self.rounds, self.generation, count
        );
        Ok(count)
    }
}
