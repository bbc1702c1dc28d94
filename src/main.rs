// main.rs - Langton's Ant desktop front-end
// The simulation lives in ant_core; this crate drives it from the egui frame
// loop (or a tokio timer in headless mode) and paints what it reports.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow, bail};
use eframe::egui;
use egui::Color32;
use log::{info, warn};

use ant_core::driver::{self, DriverOptions};
use ant_core::presets::{self, PRESETS};
use ant_core::{Config, Engine, GridSize, Palette, Rgb, RuleTable, Speed};

mod canvas; // Renderer that remembers cell states for painting
mod ui;     // eframe::App implementation

use canvas::Canvas;

const USAGE: &str = "usage: langtons_ant [--headless <RULES|PRESET> <TICKS> [SPEED]]";

fn main() -> Result<()> {
    simple_logger::init().map_err(|e| anyhow!("failed to initialise logging: {}", e))?;
    info!("Starting Langton's Ant v{} ...", env!("CARGO_PKG_VERSION"));

    let config = Config::default();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--headless") => run_headless(config, &args[1..]),
        Some(other) => bail!("unknown argument '{}'\n{}", other, USAGE),
        None => run_gui(config),
    }
}

fn run_gui(config: Config) -> Result<()> {
    let app = LangtonsAnt::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1060.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Langton's ant",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("window closed with an error: {}", e))
}

/// Runs the async driver without a window and logs where the ant ended up.
fn run_headless(config: Config, args: &[String]) -> Result<()> {
    let (rules, ticks, speed) = match args {
        [rules, ticks] => (rules, ticks, None),
        [rules, ticks, speed] => (rules, ticks, Some(speed)),
        _ => bail!(USAGE),
    };
    // A preset name ("classic", "chaotic", ...) or a literal rule string
    let rules = match presets::find(rules) {
        Some(preset) => preset.rule_table()?,
        None => RuleTable::parse(rules).context("invalid rules")?,
    };
    let ticks: u64 = ticks.parse().context("TICKS must be a non-negative integer")?;
    let speed = match speed {
        Some(s) => Speed::new(s.parse().context("SPEED must be a positive integer")?),
        None => config.sim.speed,
    };

    let size = config.gfx.grid_size()?;
    let mut engine = Engine::new(size);
    let mut canvas = Canvas::new(size);
    engine.start(rules);

    // Nothing is on screen, so there is no reason to wait a frame per tick.
    let options = DriverOptions {
        tick_interval: Duration::from_millis(1),
        speed,
        max_ticks: Some(ticks),
        ..DriverOptions::from(&config.sim)
    };
    let (_stop_tx, stop_rx) = driver::stop_channel();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    let summary = runtime.block_on(driver::run(&mut engine, &mut canvas, &options, stop_rx))?;

    let ant = engine.ant();
    info!(
        "{} steps over {} ticks; ant at ({}, {}) facing {:?}",
        summary.steps, summary.ticks, ant.x, ant.y, ant.heading
    );
    for (state, count) in engine.histogram().iter().enumerate() {
        info!("state {:>2}: {} cells", state, count);
    }
    info!("{} cells painted", canvas.painted_cells());
    Ok(())
}

/// Langton's Ant application state.
pub struct LangtonsAnt {
    pub engine: Engine,
    pub canvas: Canvas,
    pub palette: Palette,
    pub config: Config,

    pub rules_input: String,
    pub selected_preset: usize,
    pub speed: u32,
    pub is_paused: bool,
    pub last_update: Instant,
    pub last_repaint: Instant,
    pub start_color: Color32,
    pub end_color: Color32,
    /// Message for the warning window, if one is open.
    pub warning: Option<String>,
}

impl LangtonsAnt {
    pub fn new(config: Config) -> Result<Self> {
        let size = config.gfx.grid_size().context("bad canvas configuration")?;
        let states = config.sim.rule_table().map_or(2, |r| r.len());

        Ok(Self {
            engine: Engine::new(size),
            canvas: Canvas::new(size),
            palette: config.gfx.palette(states),
            rules_input: config.sim.rules.clone(),
            selected_preset: 0,
            speed: config.sim.speed.multiplier(),
            is_paused: false,
            last_update: Instant::now(),
            last_repaint: Instant::now(),
            start_color: to_color32(config.gfx.gradient_start),
            end_color: to_color32(config.gfx.gradient_end),
            warning: None,
            config,
        })
    }

    /// Validates the rules field and starts a fresh run, or opens the warning
    /// window and leaves the engine alone.
    pub fn start_run(&mut self) {
        match RuleTable::parse(&self.rules_input) {
            Ok(rules) => {
                self.rules_input = rules.to_string();
                self.palette.sync(rules.len());
                self.engine.start(rules);
                self.is_paused = false;
                self.last_update = Instant::now();
            }
            Err(err) => {
                warn!("Rejected rules {:?}: {}", self.rules_input, err);
                self.warning = Some(err.to_string());
            }
        }
    }

    pub fn stop_run(&mut self) {
        self.engine.stop();
        self.is_paused = false;
    }

    /// One driver tick: `speed` steps.
    pub fn advance(&mut self) {
        let moves = Speed::new(self.speed).moves_per_tick();
        if let Err(err) = self.engine.tick(moves) {
            warn!("Tick refused: {}", err);
        }
    }

    pub fn repaint(&mut self) {
        self.engine.drain_changes(&mut self.canvas);
    }

    pub fn apply_selected_preset(&mut self) {
        if let Some(preset) = PRESETS.get(self.selected_preset) {
            self.rules_input = preset.rules.to_owned();
        }
    }

    /// Picks up gradient edits from the color buttons.
    pub fn sync_gradient(&mut self) {
        self.palette
            .set_endpoints(from_color32(self.start_color), from_color32(self.end_color));
    }

    /// Changes the cell size, rebuilding the grid for the new dimensions.
    pub fn set_resolution(&mut self, resolution: u32) {
        let gfx = &self.config.gfx;
        match GridSize::from_canvas(gfx.canvas_width, gfx.canvas_height, resolution) {
            Ok(size) => {
                self.config.gfx.resolution = resolution;
                self.engine.resize(size);
                self.canvas.resize(size);
            }
            Err(err) => warn!("Keeping resolution {}: {}", gfx.resolution, err),
        }
    }
}

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

pub fn from_color32(color: Color32) -> Rgb {
    Rgb::new(color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> LangtonsAnt {
        LangtonsAnt::new(Config::default()).unwrap()
    }

    #[test]
    fn test_bad_rules_open_warning() {
        let mut app = app();
        app.rules_input = "RX".to_owned();
        app.start_run();

        assert!(!app.engine.is_running());
        assert!(app.engine.rules().is_none());
        let warning = app.warning.as_deref().unwrap();
        assert!(warning.contains("invalid character"), "{}", warning);
    }

    #[test]
    fn test_overlong_rules_report_full_length() {
        let mut app = app();
        app.rules_input = "RL".repeat(15);
        app.start_run();

        assert!(!app.engine.is_running());
        assert!(app.warning.as_deref().unwrap().contains("invalid length 30"));
    }

    #[test]
    fn test_start_folds_case_and_resizes_palette() {
        let mut app = app();
        app.rules_input = "rl".to_owned();
        app.start_run();

        assert!(app.engine.is_running());
        assert!(app.warning.is_none());
        assert_eq!(app.rules_input, "RL");
        assert_eq!(app.palette.len(), 2);

        app.stop_run();
        app.rules_input = "llrr".to_owned();
        app.start_run();
        assert_eq!(app.rules_input, "LLRR");
        assert_eq!(app.palette.len(), 4);
        assert_eq!(app.palette.color(3), Some(app.config.gfx.gradient_end));
    }

    #[test]
    fn test_degenerate_resolution_rejected() {
        let mut app = app();
        let size = app.engine.grid().size();

        app.set_resolution(0);
        app.set_resolution(801);
        assert_eq!(app.config.gfx.resolution, 4);
        assert_eq!(app.engine.grid().size(), size);
        assert_eq!(app.canvas.size(), size);

        app.set_resolution(8);
        assert_eq!(app.engine.grid().size(), GridSize::new(100, 100).unwrap());
        assert_eq!(app.canvas.size(), GridSize::new(100, 100).unwrap());
    }

    #[test]
    fn test_advance_paints_after_repaint() {
        let mut app = app();
        app.speed = 50;
        app.start_run();
        app.advance();
        assert_eq!(app.engine.step_count(), 50);
        assert_eq!(app.canvas.painted_cells(), 0);

        app.repaint();
        assert_eq!(
            app.canvas.painted_cells(),
            app.engine.grid().non_zero().count()
        );
    }
}
