//! Square toroidal grids of cells and generation stepping.

use itertools::Itertools;
use log::{debug, info, trace};
use rayon::prelude::*;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, CellState};
use crate::config::GridConfig;
use crate::errors::{ConstructionError, ConstructionResult};
use crate::topology::{flatten_idx, neighbor_indices, unflatten_idx};

#[cfg(test)]
mod tests;

/// Conway's Game of Life on an `n`x`n` grid whose edges wrap around.
///
/// Every generation is computed in two passes over all cells: the first
/// computes each cell's next state from the current states of its neighbors,
/// and the second commits those states. No cell's state changes until every
/// cell has been evaluated.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    tick_count: u64,
    /// Row-major.
    cells: Vec<Cell>,
    original_grid: Vec<Vec<CellState>>,
    config: GridConfig,
}

impl Grid {
    /// Constructs a grid from a square matrix of cell states using the
    /// default config.
    ///
    /// See `Grid::with_config()`.
    pub fn new<T, R>(matrix: &[R]) -> ConstructionResult<Self>
    where
        R: AsRef<[T]>,
        T: Copy + fmt::Debug,
        CellState: TryFrom<T>,
    {
        Self::with_config(matrix, GridConfig::default())
    }

    /// Constructs a grid from a square matrix of values convertible to cell
    /// states (`0`/`1`, `bool`, `'0'`/`'1'`, or `CellState`).
    ///
    /// Returns an error if the matrix is empty, if any row's length differs
    /// from the number of rows, or if any value is not a valid cell state.
    pub fn with_config<T, R>(matrix: &[R], config: GridConfig) -> ConstructionResult<Self>
    where
        R: AsRef<[T]>,
        T: Copy + fmt::Debug,
        CellState: TryFrom<T>,
    {
        let ret = Self::validate(matrix).map(|original_grid| Self::build(original_grid, config));
        match &ret {
            Ok(grid) if config.debug => info!("Grid created: \n{}", grid.visual_grid()),
            Ok(grid) => debug!("Created {}x{} grid", grid.size, grid.size),
            Err(e) if config.debug => info!("{}", e),
            Err(e) => debug!("Grid construction failed: {}", e),
        }
        ret
    }

    /// Checks that `matrix` is square and binary, and converts it to cell
    /// states.
    fn validate<T, R>(matrix: &[R]) -> ConstructionResult<Vec<Vec<CellState>>>
    where
        R: AsRef<[T]>,
        T: Copy + fmt::Debug,
        CellState: TryFrom<T>,
    {
        let size = matrix.len();
        if size == 0 {
            return Err(ConstructionError::EmptyGrid);
        }
        if let Some((row, r)) = matrix
            .iter()
            .find_position(|r| r.as_ref().len() != size)
        {
            return Err(ConstructionError::NonSquareGrid {
                row,
                len: r.as_ref().len(),
                expected: size,
            });
        }
        matrix
            .iter()
            .enumerate()
            .map(|(row, r)| {
                r.as_ref()
                    .iter()
                    .enumerate()
                    .map(|(col, &value)| {
                        CellState::try_from(value).map_err(|_| ConstructionError::InvalidState {
                            row,
                            col,
                            value: format!("{:?}", value),
                        })
                    })
                    .collect::<ConstructionResult<Vec<_>>>()
            })
            .collect()
    }

    /// Materializes cells from a validated matrix and links each one to its
    /// neighbors.
    fn build(original_grid: Vec<Vec<CellState>>, config: GridConfig) -> Self {
        let size = original_grid.len();
        let mut cells = original_grid
            .iter()
            .enumerate()
            .flat_map(|(row, r)| {
                r.iter()
                    .enumerate()
                    .map(move |(col, &state)| Cell::new(row, col, state))
            })
            .collect_vec();
        for cell in &mut cells {
            let neighbors = neighbor_indices(size, cell.row(), cell.col());
            cell.link_neighbors(neighbors);
        }
        Self {
            size,
            tick_count: 0,
            cells,
            original_grid,
            config,
        }
    }

    /// Returns the side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
    /// Returns the number of generations that have been simulated.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
    /// Returns the matrix that the grid was constructed from.
    #[inline]
    pub fn original_grid(&self) -> &[Vec<CellState>] {
        &self.original_grid
    }
    /// Returns the config that the grid was constructed with.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }
    /// Returns the cell at the given position, or `None` if it is out of
    /// bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            Some(&self.cells[flatten_idx(self.size, row, col)])
        } else {
            None
        }
    }
    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl '_ + Iterator<Item = &Cell> {
        self.cells.iter()
    }
    /// Returns the number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.state().is_alive()).count()
    }

    /// Advances the grid by one generation.
    pub fn tick(&mut self) {
        if self.config.parallel {
            self.evaluate_all_parallel();
            self.cells.par_iter_mut().for_each(Cell::commit);
        } else {
            self.evaluate_all();
            self.cells.iter_mut().for_each(Cell::commit);
        }
        self.tick_count += 1;

        trace!("Simulated generation {}", self.tick_count);
        if self.config.debug {
            info!("Iteration #{}\n{}", self.tick_count, self.visual_grid());
        }
    }

    /// Advances the grid by `n` generations, one at a time.
    pub fn iterate(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Computes the pending state of every cell. No current state is modified.
    fn evaluate_all(&mut self) {
        let rule = self.config.rule;
        for idx in 0..self.cells.len() {
            let live_count = self.cells[idx].live_neighbors(&self.cells);
            self.cells[idx].evaluate_next_state(live_count, &rule);
        }
    }

    /// Same as `evaluate_all()`, but counts neighbors on the rayon thread pool.
    /// All counting finishes before any pending state is stored.
    fn evaluate_all_parallel(&mut self) {
        let rule = self.config.rule;
        let cells = &self.cells;
        let live_counts: Vec<u8> = cells
            .par_iter()
            .map(|cell| cell.live_neighbors(cells))
            .collect();
        self.cells
            .par_iter_mut()
            .zip(live_counts)
            .for_each(|(cell, live_count)| cell.evaluate_next_state(live_count, &rule));
    }

    /// Returns a snapshot of the current state of every cell, as a matrix with
    /// the same shape as the input.
    pub fn current_grid(&self) -> Vec<Vec<CellState>> {
        self.rows()
            .map(|row| row.iter().map(Cell::state).collect_vec())
            .collect_vec()
    }

    /// Returns the grid as lines of `0` and `1` joined by newlines.
    pub fn visual_grid(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.state().to_char()).collect::<String>())
            .join("\n")
    }

    fn rows(&self) -> impl '_ + Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Returns the position of the cell at a flat index.
    pub fn position_of(&self, idx: usize) -> (usize, usize) {
        unflatten_idx(self.size, idx)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.visual_grid())
    }
}

impl FromStr for Grid {
    type Err = ConstructionError;

    /// Parses a grid from the format produced by `Grid::visual_grid()`. Blank
    /// lines and trailing whitespace are ignored.
    fn from_str(s: &str) -> ConstructionResult<Self> {
        let rows = s
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect_vec())
            .collect_vec();
        Self::new(&rows)
    }
}
