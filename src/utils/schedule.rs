use super::Config;
use std::num::NonZeroUsize;

/// How the row units of a generation are executed.
///
/// Every schedule produces bit-identical results; they only differ in which
/// threads compute which rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Rows in order on the calling thread.
    Sequential,
    /// Rows dealt out in contiguous bands to this many scoped threads.
    Threads(NonZeroUsize),
    /// One tokio task per row.
    Tasks,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::Threads(Config::worker_threads())
    }
}
