//! Langton's Ant simulation core.
//!
//! The engine owns a toroidal grid of cell states, the ant, and the rule
//! table. A driver calls [`Engine::tick`] on a timer; every step records a
//! cell change that a [`Renderer`] picks up when the changes are drained.

pub mod ant;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod grid;
pub mod notify;
pub mod palette;
pub mod presets;
pub mod rules;

pub use ant::{Ant, Heading};
pub use config::{Config, GfxConfig, SimConfig, Speed};
pub use engine::{Engine, RunState};
pub use error::{AntError, ConfigError, Result, RuleError};
pub use grid::{CellState, Grid, GridSize};
pub use notify::{CellChange, CellEvent, ChangeBuffer, RecordingRenderer, Renderer};
pub use palette::{Palette, Rgb};
pub use rules::{RuleTable, Turn};
