//! Single cells and their binary states.

use std::convert::TryFrom;
use std::fmt;

use crate::errors::InvalidCellState;
use crate::rule::Rule;
use crate::topology::NEIGHBOR_COUNT;

/// State of a single cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellState {
    #[allow(missing_docs)]
    Dead = 0,
    #[allow(missing_docs)]
    Alive = 1,
}
impl Default for CellState {
    fn default() -> Self {
        Self::Dead
    }
}
impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl CellState {
    /// Returns `true` if the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
    /// Returns the state as `0` or `1`.
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }
    /// Returns the state as `'0'` or `'1'`.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Self::Dead => '0',
            Self::Alive => '1',
        }
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}
impl From<CellState> for bool {
    #[inline]
    fn from(state: CellState) -> Self {
        state.is_alive()
    }
}
impl From<CellState> for u8 {
    #[inline]
    fn from(state: CellState) -> Self {
        state.to_u8()
    }
}

impl TryFrom<char> for CellState {
    type Error = InvalidCellState;

    fn try_from(ch: char) -> Result<Self, InvalidCellState> {
        match ch {
            '0' => Ok(Self::Dead),
            '1' => Ok(Self::Alive),
            _ => Err(InvalidCellState(ch.to_string())),
        }
    }
}

macro_rules! impl_try_from_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl TryFrom<$int> for CellState {
                type Error = InvalidCellState;

                fn try_from(value: $int) -> Result<Self, InvalidCellState> {
                    match value {
                        0 => Ok(Self::Dead),
                        1 => Ok(Self::Alive),
                        _ => Err(InvalidCellState(value.to_string())),
                    }
                }
            }
        )*
    };
}
impl_try_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A cell in a toroidal grid.
///
/// Neighbors are stored as flat indices into the cell array of the grid that
/// owns this cell, so a cell on its own can only be evaluated against that
/// array.
#[derive(Debug, Clone)]
pub struct Cell {
    row: usize,
    col: usize,
    state: CellState,
    pending_state: Option<CellState>,
    neighbors: Option<[usize; NEIGHBOR_COUNT]>,
}

impl Cell {
    /// Constructs an unlinked cell at the given position.
    pub fn new(row: usize, col: usize, state: CellState) -> Self {
        Self {
            row,
            col,
            state,
            pending_state: None,
            neighbors: None,
        }
    }

    /// Returns the row of the cell.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }
    /// Returns the column of the cell.
    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }
    /// Returns the current state of the cell.
    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }
    /// Returns the state computed by the last evaluation, if it has not been
    /// committed yet.
    #[inline]
    pub fn pending_state(&self) -> Option<CellState> {
        self.pending_state
    }
    /// Returns the flat indices of the neighbors of the cell, in link order.
    /// This is empty if the cell has not been linked.
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        match &self.neighbors {
            Some(neighbors) => neighbors,
            None => &[],
        }
    }

    /// Sets the neighbors of the cell, replacing any previous ones.
    pub fn link_neighbors(&mut self, neighbors: [usize; NEIGHBOR_COUNT]) {
        self.neighbors = Some(neighbors);
    }

    /// Counts the live neighbors of the cell, reading their current states
    /// from `cells`.
    ///
    /// # Panics
    ///
    /// This function panics if a neighbor index is out of bounds for `cells`.
    pub fn live_neighbors(&self, cells: &[Cell]) -> u8 {
        self.neighbors()
            .iter()
            .map(|&idx| cells[idx].state.to_u8())
            .sum()
    }

    /// Computes the next state of the cell from its live neighbor count and
    /// stores it as pending. The current state is left untouched.
    pub fn evaluate_next_state(&mut self, live_count: u8, rule: &Rule) {
        self.pending_state = Some(rule.next_state(self.state, live_count));
    }

    /// Replaces the current state with the pending one. Does nothing if no
    /// state is pending.
    pub fn commit(&mut self) {
        if let Some(next) = self.pending_state.take() {
            self.state = next;
        }
    }
}
