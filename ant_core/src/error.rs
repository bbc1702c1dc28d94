// error.rs - Error types for the ant simulation

use thiserror::Error;

use crate::engine::RunState;

/// Result alias used across the crate.
pub type Result<T, E = AntError> = std::result::Result<T, E>;

/// Why a rule string was rejected. Both messages are shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A character other than `R`/`L` (either case) was found.
    #[error("invalid character '{ch}' at position {position}: rules may only contain R and L")]
    InvalidCharacter { ch: char, position: usize },

    /// The rule string is too short or too long.
    #[error("invalid length {len}: rules must be between {min} and {max} characters long")]
    InvalidLength { len: usize, min: usize, max: usize },
}

/// Degenerate simulation setup, caught before the engine starts running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("resolution must be at least one pixel per cell")]
    ZeroResolution,

    #[error("canvas {canvas_width}x{canvas_height} at resolution {resolution} gives an empty grid")]
    EmptyGrid {
        canvas_width: u32,
        canvas_height: u32,
        resolution: u32,
    },

    #[error("grid dimensions {width}x{height} must both be non-zero")]
    ZeroDimension { width: usize, height: usize },

    #[error("ant position ({x}, {y}) is outside the {width}x{height} grid")]
    AntOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Errors raised by the simulation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AntError {
    #[error(transparent)]
    InvalidRule(#[from] RuleError),

    /// Lookup of a state the rule table has no entry for.
    #[error("cell state {state} has no rule (rule table has {len} entries)")]
    RuleIndex { state: usize, len: usize },

    /// The driver asked the engine to do something it can't do in its current state.
    #[error("cannot {op} while the simulation is {state}")]
    IllegalState { op: &'static str, state: RunState },

    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("invalid color '{0}': expected #RGB or #RRGGBB")]
    InvalidColor(String),
}
