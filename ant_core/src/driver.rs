// driver.rs - Async driver: a step timer and a repaint timer on one task
//
// Both timers are polled from the same `select!` loop, so engine calls never
// overlap even though stepping and repainting run on separate schedules.

use std::time::Duration;

use log::{debug, info};
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

use crate::config::{SimConfig, Speed};
use crate::engine::Engine;
use crate::error::{AntError, Result};
use crate::notify::Renderer;

#[derive(Debug, Clone)]
pub struct DriverOptions {
    pub tick_interval: Duration,
    pub repaint_interval: Duration,
    pub speed: Speed,
    /// Return after this many ticks, leaving the engine running.
    pub max_ticks: Option<u64>,
}

impl From<&SimConfig> for DriverOptions {
    fn from(config: &SimConfig) -> Self {
        Self {
            tick_interval: config.tick_interval,
            repaint_interval: config.repaint_interval,
            speed: config.speed,
            max_ticks: None,
        }
    }
}

/// What happened during one call to `run`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub steps: u64,
    pub repaints: u64,
    /// Whether the run ended because of the stop signal.
    pub stopped: bool,
}

/// Drives a running `engine` until `stop` carries `true` or `max_ticks` is
/// reached. A stop signal also stops the engine. Pending changes are drained
/// into `renderer` one last time before returning.
///
/// Dropping the stop sender is not a stop; the driver just stops listening.
pub async fn run<R: Renderer + ?Sized>(
    engine: &mut Engine,
    renderer: &mut R,
    options: &DriverOptions,
    mut stop: watch::Receiver<bool>,
) -> Result<RunSummary> {
    if !engine.is_running() {
        return Err(AntError::IllegalState {
            op: "drive",
            state: engine.run_state(),
        });
    }

    let moves = options.speed.moves_per_tick();
    let mut ticks = time::interval(options.tick_interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut repaints = time::interval(options.repaint_interval);
    repaints.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut summary = RunSummary::default();
    let mut stop_open = true;
    info!(
        "Driving engine at {}x ({:?} per tick, repaint every {:?})",
        options.speed.multiplier(),
        options.tick_interval,
        options.repaint_interval
    );

    loop {
        if *stop.borrow_and_update() {
            engine.stop();
            summary.stopped = true;
            break;
        }
        if options.max_ticks.is_some_and(|max| summary.ticks >= max) {
            break;
        }

        tokio::select! {
            biased;

            changed = stop.changed(), if stop_open => {
                if changed.is_err() {
                    debug!("Stop sender dropped; running until the tick limit");
                    stop_open = false;
                }
            }
            _ = ticks.tick() => {
                summary.steps += engine.tick(moves)? as u64;
                summary.ticks += 1;
            }
            _ = repaints.tick() => {
                engine.drain_changes(renderer);
                summary.repaints += 1;
            }
        }
    }

    engine.drain_changes(renderer);
    info!(
        "Driver finished: {} ticks, {} steps, {} repaints",
        summary.ticks, summary.steps, summary.repaints
    );
    Ok(summary)
}

/// Stop handle paired with the receiver `run` listens on.
pub fn stop_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}
