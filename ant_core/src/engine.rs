// engine.rs - Simulation engine: owns the grid, the ant and the rule table

use std::fmt;

use log::{info, trace};

use crate::ant::Ant;
use crate::error::{AntError, ConfigError, Result};
use crate::grid::{CellState, Grid, GridSize};
use crate::notify::{CellChange, ChangeBuffer, Renderer};
use crate::rules::RuleTable;

/// Whether the driver may call `step`. Pausing is the driver simply not
/// calling it, so there is no separate paused state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RunState {
    Stopped,
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Stopped => f.write_str("stopped"),
            RunState::Running => f.write_str("running"),
        }
    }
}

/// Langton's Ant on a toroidal grid.
///
/// All operations take `&mut self`; callers are expected to serialize access
/// (one logical thread drives both stepping and draining).
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    ant: Ant,
    rules: Option<RuleTable>,
    state: RunState,
    changes: ChangeBuffer,
}

impl Engine {
    /// Creates a stopped engine with an all-zero grid and no rules.
    pub fn new(size: GridSize) -> Self {
        Self {
            grid: Grid::new(size),
            ant: Ant::centered(size),
            rules: None,
            state: RunState::Stopped,
            changes: ChangeBuffer::new(),
        }
    }

    /// Installs `rules` and resets everything: every cell back to 0, the ant
    /// at the grid center facing down with no steps taken. Calling this on a
    /// running engine restarts it.
    pub fn start(&mut self, rules: RuleTable) {
        info!(
            "Starting run with rules {} on a {}x{} grid",
            rules,
            self.grid.width(),
            self.grid.height()
        );
        self.grid.clear();
        self.ant = Ant::centered(self.grid.size());
        self.rules = Some(rules);
        self.state = RunState::Running;
        self.changes.push_clear();
    }

    /// Halts stepping. The grid and ant are left exactly as they are.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            info!("Stopping after {} steps", self.ant.step_count);
        }
        self.state = RunState::Stopped;
    }

    /// Reallocates the grid for new dimensions. The new grid is all zero and
    /// the ant is recentered; the run state, rules and step count are kept.
    pub fn resize(&mut self, size: GridSize) {
        info!("Resizing grid to {}x{}", size.width, size.height);
        self.grid = Grid::new(size);
        self.ant = Ant {
            step_count: self.ant.step_count,
            ..Ant::centered(size)
        };
        self.changes.push_clear();
    }

    /// Puts the ant somewhere specific, e.g. to set up a scenario.
    pub fn place_ant(&mut self, ant: Ant) -> Result<()> {
        let size = self.grid.size();
        if !size.contains(ant.x, ant.y) {
            return Err(ConfigError::AntOutOfBounds {
                x: ant.x,
                y: ant.y,
                width: size.width,
                height: size.height,
            }
            .into());
        }
        self.ant = ant;
        Ok(())
    }

    /// Advances the ant by one step and returns the cell it just left.
    ///
    /// The order is fixed: read the cell, turn, advance the cell, notify,
    /// move, wrap, count.
    pub fn step(&mut self) -> Result<CellChange> {
        let rules = match (self.state, &self.rules) {
            (RunState::Running, Some(rules)) => rules,
            _ => {
                return Err(AntError::IllegalState {
                    op: "step",
                    state: self.state,
                });
            }
        };

        let Ant { x, y, .. } = self.ant;
        let state = self.grid.get(x, y) as usize;
        let turn = rules.turn_for(state)?;
        self.ant.heading = self.ant.heading.turned(turn);

        let next = ((state + 1) % rules.len()) as CellState;
        self.grid.set(x, y, next);
        let change = CellChange { x, y, state: next };
        self.changes.push(change);

        let (nx, ny) = self.ant.heading.advance(x, y, self.grid.size());
        self.ant.x = nx;
        self.ant.y = ny;
        self.ant.step_count += 1;

        Ok(change)
    }

    /// Runs `moves` steps in order; one tick of the driver.
    pub fn tick(&mut self, moves: usize) -> Result<usize> {
        if self.state != RunState::Running {
            return Err(AntError::IllegalState {
                op: "tick",
                state: self.state,
            });
        }
        for _ in 0..moves {
            self.step()?;
        }
        trace!(
            "tick: {} moves, ant at ({}, {}) after {} steps",
            moves,
            self.ant.x,
            self.ant.y,
            self.ant.step_count
        );
        Ok(moves)
    }

    /// Hands every pending cell event to `renderer`.
    pub fn drain_changes<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> usize {
        self.changes.drain_into(renderer)
    }

    pub fn pending_changes(&self) -> &ChangeBuffer {
        &self.changes
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    pub fn rules(&self) -> Option<&RuleTable> {
        self.rules.as_ref()
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn step_count(&self) -> u64 {
        self.ant.step_count
    }

    /// Number of cells in each state, indexed by state. Has one entry per
    /// rule, or a single entry before any rules are installed.
    pub fn histogram(&self) -> Vec<usize> {
        let states = self.rules.as_ref().map_or(1, RuleTable::len);
        let mut counts = vec![0; states];
        for &s in self.grid.cells() {
            counts[s as usize] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::Heading;
    use crate::notify::{CellEvent, RecordingRenderer};

    fn engine(w: usize, h: usize, rules: &str) -> Engine {
        let mut engine = Engine::new(GridSize::new(w, h).unwrap());
        engine.start(rules.parse().unwrap());
        engine
    }

    #[test]
    fn test_step_while_stopped() {
        let mut engine = Engine::new(GridSize::new(3, 3).unwrap());
        assert_eq!(
            engine.step(),
            Err(AntError::IllegalState {
                op: "step",
                state: RunState::Stopped
            })
        );
        assert!(engine.tick(5).is_err());
        assert_eq!(engine.step_count(), 0);
    }

    #[test]
    fn test_first_step_from_reset() {
        let mut engine = engine(3, 3, "RL");
        let change = engine.step().unwrap();
        assert_eq!(change, CellChange { x: 1, y: 1, state: 1 });
        // Down turned right faces left.
        assert_eq!(engine.ant().heading, Heading::Left);
        assert_eq!((engine.ant().x, engine.ant().y), (0, 1));
        assert_eq!(engine.step_count(), 1);
    }

    #[test]
    fn test_state_advance_wraps_to_zero() {
        let mut engine = engine(3, 3, "RRL");
        // Park the ant on the same cell three times.
        for expected in [1, 2, 0] {
            engine
                .place_ant(Ant {
                    x: 0,
                    y: 0,
                    heading: Heading::Up,
                    step_count: engine.step_count(),
                })
                .unwrap();
            let change = engine.step().unwrap();
            assert_eq!(change.state, expected);
            assert_eq!(engine.grid().get(0, 0), expected);
        }
    }

    #[test]
    fn test_stop_does_not_mutate() {
        let mut engine = engine(5, 5, "RL");
        engine.tick(7).unwrap();
        let grid = engine.grid().clone();
        let ant = *engine.ant();

        engine.stop();
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert_eq!(engine.grid(), &grid);
        assert_eq!(engine.ant(), &ant);
        assert!(engine.step().is_err());
    }

    #[test]
    fn test_place_ant_out_of_bounds() {
        let mut engine = engine(4, 4, "RL");
        let ant = Ant {
            x: 4,
            y: 0,
            heading: Heading::Up,
            step_count: 0,
        };
        assert!(matches!(
            engine.place_ant(ant),
            Err(AntError::Configuration(ConfigError::AntOutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_resize_zeroes_and_recenters() {
        let mut engine = engine(5, 5, "RL");
        engine.tick(20).unwrap();
        engine.resize(GridSize::new(8, 6).unwrap());

        assert_eq!(engine.grid().size(), GridSize::new(8, 6).unwrap());
        assert_eq!(engine.grid().non_zero().count(), 0);
        assert_eq!((engine.ant().x, engine.ant().y), (4, 3));
        assert_eq!(engine.ant().heading, Heading::Down);
        assert!(engine.is_running());
        assert_eq!(engine.pending_changes().events(), &[CellEvent::Cleared]);
    }

    #[test]
    fn test_resize_keeps_step_count() {
        let mut engine = engine(5, 5, "RL");
        engine.tick(10).unwrap();
        engine.resize(GridSize::new(7, 7).unwrap());
        assert_eq!(engine.step_count(), 10);

        engine.tick(3).unwrap();
        assert_eq!(engine.step_count(), 13);
        assert_eq!(engine.rules().map(RuleTable::to_string), Some("RL".to_owned()));
    }

    #[test]
    fn test_changes_drained_to_renderer() {
        let mut engine = engine(5, 5, "RL");
        engine.tick(3).unwrap();

        let mut renderer = RecordingRenderer::default();
        // one clear from start plus three changes
        assert_eq!(engine.drain_changes(&mut renderer), 4);
        assert_eq!(renderer.clears, 1);
        assert_eq!(renderer.changes.len(), 3);
        assert!(engine.pending_changes().is_empty());
    }

    #[test]
    fn test_histogram() {
        let mut engine = Engine::new(GridSize::new(4, 4).unwrap());
        assert_eq!(engine.histogram(), vec![16]);

        engine.start("LLRR".parse().unwrap());
        engine.tick(1).unwrap();
        assert_eq!(engine.histogram(), vec![15, 1, 0, 0]);
    }
}
