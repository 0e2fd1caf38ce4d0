use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use mineboard_core::{Board, CellCount, Coord, mult};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::app::App;

mod app;
mod command;
mod render;
mod timer;

/// Play minesweeper in the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(short = 'W', long, default_value_t = 16)]
    width: Coord,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = 16)]
    height: Coord,

    /// Number of mines, half of the cells by default
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Seed for mine placement, taken from the clock by default
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final game snapshot as JSON on exit
    #[arg(long)]
    dump: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(log_level) = args.verbose.log_level() {
        env_logger::Builder::new()
            .filter_level(log_level.to_level_filter())
            .init();
    }
    log::debug!("args: {:?}", args);

    let mines = args
        .mines
        .unwrap_or_else(|| mult(args.width, args.height) / 2);
    let board = Board::new(args.width, args.height, mines).with_context(|| {
        format!(
            "Cannot start a {}x{} game with {} mines",
            args.width, args.height, mines
        )
    })?;
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut app = App::new(board, seed);
    let mut stdout = io::stdout().lock();
    app.run(io::stdin().lock(), &mut stdout)?;

    if args.dump {
        serde_json::to_writer_pretty(&mut stdout, app.session())?;
        writeln!(stdout)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_classic_board() {
        let args = Args::parse_from(["mineboard"]);
        assert_eq!((args.width, args.height), (16, 16));
        assert_eq!(args.mines, None);
        assert!(!args.dump);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn verbosity_flags_pick_log_level() {
        let args = Args::parse_from(["mineboard", "-vvv"]);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Debug));

        let args = Args::parse_from(["mineboard", "-q"]);
        assert_eq!(args.verbose.log_level(), None);
    }
}
