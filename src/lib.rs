#![warn(clippy::all)]

mod board;
mod cell;
mod grid;
mod pattern;
mod stepper;
mod utils;

pub use board::Board;
pub use cell::Cell;
pub use grid::Grid;
pub use pattern::Pattern;
pub use stepper::{neighbor_count, Stepper};
pub use utils::{Config, Error, NiceInt, Result, Schedule, Topology};
