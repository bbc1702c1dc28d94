// rules.rs - Rule table: one turn instruction per cell state

use std::fmt;
use std::str::FromStr;

use crate::error::{AntError, Result, RuleError};

/// Shortest accepted rule string.
pub const MIN_RULE_LEN: usize = 2;
/// Longest accepted rule string.
pub const MAX_RULE_LEN: usize = 20;

/// Turn taken by the ant when it leaves a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    Right,
    Left,
}

impl Turn {
    /// Parses a single rule symbol, ignoring case.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(Turn::Right),
            'L' => Some(Turn::Left),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Turn::Right => 'R',
            Turn::Left => 'L',
        }
    }
}

/// Ordered turn instructions; entry `i` applies to cells in state `i`.
///
/// A table is immutable once built. Starting a new run replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleTable {
    turns: Vec<Turn>,
}

impl RuleTable {
    /// Validates and case-folds a rule string such as `"RL"` or `"llrr"`.
    ///
    /// Characters are checked before length, so `"RX"` reports the bad
    /// character rather than a length problem.
    pub fn parse(source: &str) -> Result<Self> {
        let mut turns = Vec::with_capacity(source.len());
        for (position, ch) in source.chars().enumerate() {
            match Turn::from_char(ch) {
                Some(turn) => turns.push(turn),
                None => return Err(RuleError::InvalidCharacter { ch, position }.into()),
            }
        }

        if !(MIN_RULE_LEN..=MAX_RULE_LEN).contains(&turns.len()) {
            return Err(RuleError::InvalidLength {
                len: turns.len(),
                min: MIN_RULE_LEN,
                max: MAX_RULE_LEN,
            }
            .into());
        }

        Ok(Self { turns })
    }

    /// Number of states, `N`.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the turn for a cell in `state`.
    pub fn turn_for(&self, state: usize) -> Result<Turn> {
        self.turns.get(state).copied().ok_or(AntError::RuleIndex {
            state,
            len: self.turns.len(),
        })
    }
}

impl FromStr for RuleTable {
    type Err = AntError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for turn in &self.turns {
            write!(f, "{}", turn.as_char())?;
        }
        Ok(())
    }
}
