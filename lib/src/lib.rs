//! A parallel cellular automaton on seat layouts.
//!
//! Every round, each seat looks around, then all seats update at once:
//! an empty seat with no visible occupied seat becomes occupied, and an
//! occupied seat that sees too many occupied seats becomes empty.
//! Rounds repeat until nothing changes.
//!
//! ```
//! use seatsim_lib::{Config, Grid, Visibility};
//!
//! let grid: Grid = "L.LL.LL.LL\n\
//!             LLLLLLL.LL\n\
//!             L.L.L..L..\n\
//!             LLLL.LL.LL\n\
//!             L.LL.LL.LL\n\
//!             L.LLLLL.LL\n\
//!             ..L.L.....\n\
//!             LLLLLLLLLL\n\
//!             L.LLLLLL.L\n\
//!             L.LLLLL.LL"
//!     .parse()?;
//! let mut simulation = Config::new(Visibility::Adjacent).simulation(grid)?;
//! assert_eq!(simulation.run()?, 37);
//! # Ok::<(), seatsim_lib::Error>(())
//! ```

mod cells;
mod config;
mod error;
mod grid;
pub mod neighbors;
mod round;
mod rule;
mod simulation;

pub use cells::{Coord, State};
pub use config::Config;
pub use error::Error;
pub use grid::{Grid, GridView};
pub use neighbors::{count_visible_occupied, Direction, Visibility};
pub use round::{changed_cells, run_round, Parallelism};
pub use rule::Rule;
pub use simulation::{Simulation, Status};
