// lib.rs - Conway's Game of Life with mouse editing, speed control and named patterns

pub mod app;
pub mod brush;
pub mod config;
pub mod error;
pub mod grid;
pub mod life;
pub mod render;
pub mod simulation;
pub mod storage;
pub mod ticker;
mod ui;

pub use app::ConwayApp;
pub use config::Config;
pub use error::{LifeError, LifeResult};
pub use grid::Grid;
pub use life::next_generation;
pub use simulation::{RunState, Simulation};
