mod config;
mod error;
mod format_int;
mod schedule;
mod topology;

pub use config::Config;
pub use error::{Error, Result};
pub use format_int::NiceInt;
pub use schedule::Schedule;
pub use topology::Topology;
