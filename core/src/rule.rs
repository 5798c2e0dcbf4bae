//! 2-state outer-totalistic rules on the 8-cell Moore neighborhood.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellState;
use crate::errors::{RuleParseError, RuleParseResult};
use crate::topology::NEIGHBOR_COUNT;

lazy_static::lazy_static! {
    /// Regex matching a rule string in `B3/S23` notation.
    static ref RULE_REGEX: regex::Regex =
        regex::Regex::new(r"^[Bb](\d*)/?[Ss](\d*)$").unwrap();
}

/// A 2-state totalistic 2D range-1 Moore-neighborhood rule, stored as lookup
/// tables indexed by live neighbor count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rule {
    birth: [bool; NEIGHBOR_COUNT + 1],
    survival: [bool; NEIGHBOR_COUNT + 1],
}
impl Default for Rule {
    fn default() -> Self {
        LIFE
    }
}

impl Rule {
    /// Constructs a rule from the neighbor counts that cause birth and
    /// survival. Counts above 8 are ignored.
    pub fn new(birth: &[u8], survival: &[u8]) -> Self {
        let mut ret = Self {
            birth: [false; NEIGHBOR_COUNT + 1],
            survival: [false; NEIGHBOR_COUNT + 1],
        };
        for &n in birth.iter().filter(|&&n| n as usize <= NEIGHBOR_COUNT) {
            ret.birth[n as usize] = true;
        }
        for &n in survival.iter().filter(|&&n| n as usize <= NEIGHBOR_COUNT) {
            ret.survival[n as usize] = true;
        }
        ret
    }

    /// Returns the state that a cell in state `state` with `live_count` live
    /// neighbors has in the next generation.
    #[inline]
    pub fn next_state(&self, state: CellState, live_count: u8) -> CellState {
        let table = match state {
            CellState::Alive => &self.survival,
            CellState::Dead => &self.birth,
        };
        table
            .get(live_count as usize)
            .copied()
            .unwrap_or(false)
            .into()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for i in 0..=NEIGHBOR_COUNT {
            if self.birth[i] {
                write!(f, "{}", i)?;
            }
        }
        write!(f, "/S")?;
        for i in 0..=NEIGHBOR_COUNT {
            if self.survival[i] {
                write!(f, "{}", i)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> RuleParseResult<Self> {
        let captures = RULE_REGEX
            .captures(s.trim())
            .ok_or_else(|| RuleParseError::InvalidSyntax(s.to_owned()))?;
        let mut conditions = [[false; NEIGHBOR_COUNT + 1]; 2];
        for i in 0..2 {
            // Group 0 is the whole match.
            for ch in captures[i + 1].chars() {
                let n = ch
                    .to_digit(10)
                    .ok_or_else(|| RuleParseError::InvalidSyntax(s.to_owned()))?;
                if n as usize > NEIGHBOR_COUNT {
                    return Err(RuleParseError::InvalidCount(n));
                }
                conditions[i][n as usize] = true;
            }
        }
        Ok(Self {
            birth: conditions[0],
            survival: conditions[1],
        })
    }
}

/// Conway's Game of Life.
pub const LIFE: Rule = Rule {
    birth: [false, false, false, true, false, false, false, false, false],
    survival: [false, false, true, true, false, false, false, false, false],
};
