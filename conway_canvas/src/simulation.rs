// simulation.rs - Explicit simulation state: grid, speed, run state, generation

use std::time::Duration;

use rand::Rng;

use crate::config::Config;
use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;
use crate::life::next_generation;
use crate::ticker::{RepeatingTask, Tick};

/// Share of cells alive after a random fill.
pub const RANDOM_DENSITY: f64 = 1.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    speed: u32,
    min_speed: u32,
    max_speed: u32,
    task: RepeatingTask,
    generation: u64,
}

impl Simulation {
    pub fn new(config: &Config) -> Self {
        let speed = config.clamp_speed(config.initial_speed);
        Self {
            grid: Grid::new(config.columns(), config.rows()),
            speed,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            task: RepeatingTask::new(RepeatingTask::interval_for_rate(speed)),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Minimum time between generations at the current speed.
    pub fn interval(&self) -> Duration {
        self.task.interval()
    }

    pub fn speed_range(&self) -> std::ops::RangeInclusive<u32> {
        self.min_speed..=self.max_speed
    }

    pub fn state(&self) -> RunState {
        if self.task.is_scheduled() {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    /// Clamped to the configured range. Takes effect on the next poll.
    pub fn set_speed(&mut self, speed: u32) {
        let speed = speed.clamp(self.min_speed, self.max_speed);
        if speed != self.speed {
            log::debug!("speed: {} -> {} gen/sec", self.speed, speed);
            self.speed = speed;
            self.task.set_interval(RepeatingTask::interval_for_rate(speed));
        }
    }

    /// Idle -> Running. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        let started = self.task.start();
        if started {
            log::info!("simulation started at generation {}", self.generation);
        }
        started
    }

    /// Running -> Idle, dropping any pending tick.
    pub fn pause(&mut self) -> bool {
        let paused = self.task.cancel();
        if paused {
            log::info!("simulation paused at generation {}", self.generation);
        }
        paused
    }

    /// Any state -> Idle with a fresh empty grid.
    pub fn clear(&mut self) {
        self.task.cancel();
        self.grid = Grid::new(self.grid.columns(), self.grid.rows());
        self.generation = 0;
        log::info!("grid cleared");
    }

    /// Polls the frame gate and advances one generation when it fires.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        let tick = self.task.poll(now_ms);
        if tick == Tick::Fire {
            self.advance();
        }
        tick
    }

    /// Single manual step, regardless of the frame gate.
    pub fn step(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        log::trace!(
            "generation {}: {} live cells",
            self.generation,
            self.grid.population()
        );
    }

    pub fn toggle(&mut self, col: usize, row: usize) -> bool {
        self.grid.toggle(col, row)
    }

    /// Swaps in a grid of the same dimensions, e.g. a loaded pattern.
    /// A mismatched grid is rejected and the current one kept.
    pub fn replace_grid(&mut self, grid: Grid) -> LifeResult<()> {
        if !grid.same_shape(&self.grid) {
            return Err(LifeError::DimensionMismatch {
                columns: self.grid.columns(),
                rows: self.grid.rows(),
                found_columns: grid.columns(),
                found_rows: grid.rows(),
            });
        }
        self.grid = grid;
        self.generation = 0;
        Ok(())
    }

    /// Stops the simulation and fills the grid randomly.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.task.cancel();
        self.grid.randomize(rng, RANDOM_DENSITY);
        self.generation = 0;
        log::debug!("random fill: {} live cells", self.grid.population());
    }
}
