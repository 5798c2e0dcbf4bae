//! Conway's Game of Life on square grids whose edges wrap around.
//!
//! # Examples
//!
//! ```
//! use torlife_core::prelude::*;
//!
//! let mut grid = Grid::new(&[
//!     [0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0],
//! ])
//! .unwrap();
//! grid.tick();
//! assert_eq!("00000\n00100\n00100\n00100\n00000", grid.visual_grid());
//! ```

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod cell;
mod config;
pub mod errors;
pub mod grid;
pub mod rule;
pub mod topology;

pub use config::GridConfig;

pub mod prelude {
    //! Commonly used types.

    pub use crate::cell::{Cell, CellState};
    pub use crate::config::GridConfig;
    pub use crate::errors::{ConstructionError, ConstructionResult, RuleParseError};
    pub use crate::grid::Grid;
    pub use crate::rule::{Rule, LIFE};
}
