use crate::{Board, Cell, Config, Grid, Result, Schedule, Topology};
use async_scoped::TokioScope;
use log::{debug, trace};
use std::num::NonZeroUsize;

/// Number of alive cells among the 8 positions around (`row`, `col`).
///
/// With [`Topology::Bounded`] positions outside the grid count as dead. With
/// [`Topology::Torus`] every position is wrapped modulo the grid sides and
/// always counted, so on a grid with a side of 1 or 2 the same cell may be
/// counted at several positions.
pub fn neighbor_count(grid: &Grid, topology: Topology, row: usize, col: usize) -> u8 {
    let (h, w) = (grid.height() as i64, grid.width() as i64);
    let (r, c) = (row as i64, col as i64);
    let mut alive = 0;
    for nr in r - 1..=r + 1 {
        for nc in c - 1..=c + 1 {
            if nr == r && nc == c {
                continue;
            }
            let cell = match topology {
                Topology::Bounded => {
                    if nr < 0 || nc < 0 || nr >= h || nc >= w {
                        continue;
                    }
                    grid.at(nr as usize, nc as usize)
                }
                Topology::Torus => grid.at(nr.rem_euclid(h) as usize, nc.rem_euclid(w) as usize),
            };
            alive += cell as u8;
        }
    }
    alive
}

/// Computes row `row` of the next generation into `dst`.
fn update_row(current: &Grid, topology: Topology, row: usize, dst: &mut [Cell]) {
    for (col, cell) in dst.iter_mut().enumerate() {
        let n = neighbor_count(current, topology, row, col);
        *cell = current.at(row, col).next_generation(n);
    }
}

enum Executor {
    Sequential,
    Threads(NonZeroUsize),
    Tasks(tokio::runtime::Runtime),
}

/// Computes generation transitions of a [`Board`].
///
/// Each row of the next generation is an independent unit of work: it reads
/// the shared current generation and writes only its own row. Whatever the
/// [`Schedule`], [`Stepper::step`] returns only after every row is written.
pub struct Stepper {
    executor: Executor,
}

impl Stepper {
    /// Fails only if the runtime for [`Schedule::Tasks`] cannot be started.
    pub fn new(schedule: Schedule) -> Result<Self> {
        let executor = match schedule {
            Schedule::Sequential => Executor::Sequential,
            Schedule::Threads(n) => Executor::Threads(n),
            Schedule::Tasks => {
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(Config::worker_threads().get())
                    .thread_name("conway-rows")
                    .build()?;
                Executor::Tasks(runtime)
            }
        };
        debug!("stepper with {:?} schedule", schedule);
        Ok(Self { executor })
    }

    pub fn sequential() -> Self {
        Self {
            executor: Executor::Sequential,
        }
    }

    pub fn schedule(&self) -> Schedule {
        match &self.executor {
            Executor::Sequential => Schedule::Sequential,
            Executor::Threads(n) => Schedule::Threads(*n),
            Executor::Tasks(_) => Schedule::Tasks,
        }
    }

    /// Write the generation following `board`'s current one into its next
    /// buffer. The current generation is left untouched, so stepping twice
    /// without [`Board::swap`] produces the same result.
    pub fn step(&self, board: &mut Board) {
        let topology = board.topology();
        let (current, next) = board.buffers();
        match &self.executor {
            Executor::Sequential => Self::step_sequential(current, next, topology),
            Executor::Threads(n) => Self::step_threads(current, next, topology, n.get()),
            Executor::Tasks(runtime) => Self::step_tasks(runtime, current, next, topology),
        }
    }

    /// [`Stepper::step`] followed by [`Board::swap`].
    pub fn step_and_swap(&self, board: &mut Board) {
        self.step(board);
        board.swap();
        trace!(
            "generation {}: population {}",
            board.generation(),
            board.population()
        );
    }

    /// Advance `board` by `generations`.
    pub fn run(&self, board: &mut Board, generations: u64) {
        debug!(
            "running {} generations from generation {}",
            generations,
            board.generation()
        );
        for _ in 0..generations {
            self.step_and_swap(board);
        }
    }

    fn step_sequential(current: &Grid, next: &mut Grid, topology: Topology) {
        for (row, dst) in next.rows_mut().enumerate() {
            update_row(current, topology, row, dst);
        }
    }

    fn step_threads(current: &Grid, next: &mut Grid, topology: Topology, threads: usize) {
        let (width, height) = (current.width(), current.height());
        let threads = threads.clamp(1, height);
        if threads == 1 {
            return Self::step_sequential(current, next, topology);
        }
        let band = height.div_ceil(threads);
        std::thread::scope(|s| {
            for (i, rows) in next.cells_mut().chunks_mut(band * width).enumerate() {
                s.spawn(move || {
                    for (j, dst) in rows.chunks_exact_mut(width).enumerate() {
                        update_row(current, topology, i * band + j, dst);
                    }
                });
            }
        });
    }

    /// One task per row, all joined before returning.
    ///
    /// Must not be called from a current-thread tokio runtime.
    fn step_tasks(
        runtime: &tokio::runtime::Runtime,
        current: &Grid,
        next: &mut Grid,
        topology: Topology,
    ) {
        let _guard = runtime.enter();
        let ((), results) = TokioScope::<()>::scope_and_block(|s| {
            for (row, dst) in next.rows_mut().enumerate() {
                s.spawn(async move { update_row(current, topology, row, dst) });
            }
        });
        for result in results {
            if let Err(err) = result {
                if err.is_panic() {
                    std::panic::resume_unwind(err.into_panic());
                }
            }
        }
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self {
            executor: Executor::Threads(Config::worker_threads()),
        }
    }
}
