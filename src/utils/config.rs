use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::LevelFilter;

pub struct Config {
    worker_threads: Option<NonZeroUsize>,
    log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worker_threads: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub const SEED: u64 = 42;
    pub const FILL_RATE: f64 = 0.3;

    pub const BOARD_WIDTH: i64 = 80;
    pub const BOARD_HEIGHT: i64 = 50;
    pub const PATTERN_OFFSET: [i64; 2] = [10, 10];
    pub const WRAP: bool = true;
    pub const GENERATIONS: u64 = 100;

    /// Environment variable read by the demo binary to override the log level.
    pub const LOG_ENV: &'static str = "CONWAY_LOG";

    fn get() -> MutexGuard<'static, Config> {
        static CONFIG: OnceLock<Mutex<Config>> = OnceLock::new();
        CONFIG
            .get_or_init(|| Mutex::new(Config::default()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Threads used by the default schedule; falls back to the available parallelism.
    pub fn worker_threads() -> NonZeroUsize {
        Self::get().worker_threads.unwrap_or_else(|| {
            std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
        })
    }

    pub fn set_worker_threads(threads: Option<NonZeroUsize>) {
        Self::get().worker_threads = threads;
    }

    pub fn log_level() -> LevelFilter {
        Self::get().log_level
    }

    pub fn set_log_level(level: LevelFilter) {
        Self::get().log_level = level;
    }
}
