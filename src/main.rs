#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use conway::{Board, Config, NiceInt, Pattern, Schedule, Stepper};
use log::{info, LevelFilter};
use std::str::FromStr;
use std::time::Instant;

const USAGE: &str = "usage: conway [pattern] [generations] [width] [height] [wrap|bounded] [sequential|threads|tasks]";

fn parse_arg<T: FromStr>(arg: Option<String>, what: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid {} {:?}\n{}", what, s, USAGE)),
        None => Ok(default),
    }
}

fn init_logger() -> Result<()> {
    if let Ok(s) = std::env::var(Config::LOG_ENV) {
        let level = LevelFilter::from_str(&s)
            .map_err(|_| anyhow!("invalid {} value {:?}", Config::LOG_ENV, s))?;
        Config::set_log_level(level);
    }
    if let Some(level) = Config::log_level().to_level() {
        simple_logger::init_with_level(level).map_err(|e| anyhow!("{}", e))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logger()?;

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "glider-gun".to_owned());
    let pattern =
        Pattern::preset(&name).ok_or_else(|| anyhow!("unknown pattern {:?}\n{}", name, USAGE))?;
    let generations = parse_arg(args.next(), "generations", Config::GENERATIONS)?;
    let width = parse_arg(args.next(), "width", Config::BOARD_WIDTH)?;
    let height = parse_arg(args.next(), "height", Config::BOARD_HEIGHT)?;
    let wrap = match args.next().as_deref() {
        None => Config::WRAP,
        Some("wrap") => true,
        Some("bounded") => false,
        Some(other) => return Err(anyhow!("invalid boundary {:?}\n{}", other, USAGE)),
    };
    let schedule = match args.next().as_deref() {
        None | Some("threads") => Schedule::default(),
        Some("sequential") => Schedule::Sequential,
        Some("tasks") => Schedule::Tasks,
        Some(other) => return Err(anyhow!("invalid schedule {:?}\n{}", other, USAGE)),
    };

    let mut board = Board::new(width, height)?;
    board.set_boundary_policy(wrap);
    let [row, col] = Config::PATTERN_OFFSET;
    board
        .load_pattern(&pattern, row, col)
        .with_context(|| format!("{} does not fit the board", name))?;

    let stepper = Stepper::new(schedule)?;
    info!(
        "{} on {}x{} board, {:?} schedule",
        name,
        width,
        height,
        stepper.schedule()
    );
    let timer = Instant::now();
    stepper.run(&mut board, generations);
    let elapsed = timer.elapsed();

    print!("{}", board);
    println!(
        "generation {}, population {}",
        NiceInt::from(board.generation()),
        NiceInt::from(board.population())
    );
    info!(
        "{} generations in {:.3}s",
        NiceInt::from(generations),
        elapsed.as_secs_f64()
    );
    Ok(())
}
