// config.rs - Tunables for the simulation and its presentation

use std::time::Duration;

use crate::error::Result;
use crate::grid::GridSize;
use crate::palette::{Palette, Rgb};
use crate::rules::RuleTable;

/// Slowest speed multiplier.
pub const MIN_SPEED: u32 = 1;
/// Fastest speed multiplier.
pub const MAX_SPEED: u32 = 1000;

/// Speed multiplier: how many steps the driver runs per tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u32);

impl Speed {
    /// Clamps `multiplier` to `MIN_SPEED..=MAX_SPEED`.
    pub fn new(multiplier: u32) -> Self {
        Self(multiplier.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn multiplier(self) -> u32 {
        self.0
    }

    pub fn moves_per_tick(self) -> usize {
        self.0 as usize
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(MIN_SPEED)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub sim: SimConfig,
    pub gfx: GfxConfig,
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Rule string used for the first run.
    pub rules: String,
    pub speed: Speed,
    /// Time between step ticks.
    pub tick_interval: Duration,
    /// Time between repaints (draining the change buffer).
    pub repaint_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rules: "RL".to_owned(),
            speed: Speed::default(),
            tick_interval: Duration::from_millis(16),
            repaint_interval: Duration::from_millis(33),
        }
    }
}

impl SimConfig {
    pub fn rule_table(&self) -> Result<RuleTable> {
        RuleTable::parse(&self.rules)
    }
}

#[derive(Debug, Clone)]
pub struct GfxConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Pixels per cell.
    pub resolution: u32,
    pub gradient_start: Rgb,
    pub gradient_end: Rgb,
}

impl Default for GfxConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 800,
            resolution: 4,
            gradient_start: Rgb::BLACK,
            gradient_end: Rgb::WHITE,
        }
    }
}

impl GfxConfig {
    pub fn grid_size(&self) -> Result<GridSize> {
        GridSize::from_canvas(self.canvas_width, self.canvas_height, self.resolution)
    }

    /// Palette sized for `states` cell states.
    pub fn palette(&self, states: usize) -> Palette {
        Palette::new(self.gradient_start, self.gradient_end, states)
    }
}
