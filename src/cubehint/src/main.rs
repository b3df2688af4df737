#![warn(clippy::pedantic)]

mod config;
mod net;
mod repl;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use facelet_cube::{FaceletState, MoveEngine, Scrambler, format_scramble};
use log::{LevelFilter, info};
use oll_hint::{Hint, get_hint};
use owo_colors::OwoColorize;

use crate::{config::Config, repl::Session};

/// Turns a 3x3x3 cube and suggests the next two-look OLL algorithm
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cubehint.toml` in the working directory if it exists.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Reject moves with an unknown modifier instead of reading them as a
    /// single quarter turn
    #[arg(long)]
    strict: bool,

    /// Draw the cube without colors
    #[arg(long)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply moves to a solved cube and print the next OLL step.
    Hint {
        /// The moves to apply, e.g. "F R U R' U' F'".
        #[arg(default_value = "")]
        moves: String,
    },
    /// Apply moves to a solved cube and draw the result.
    Show {
        /// The moves to apply, e.g. "R U R' U'".
        #[arg(default_value = "")]
        moves: String,
    },
    /// Print a random scramble and the hint for the scrambled cube.
    Scramble {
        /// Number of moves; overrides the configuration file.
        #[arg(long, short)]
        length: Option<usize>,
        /// Seed for a reproducible scramble; overrides the configuration file.
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Turn a cube interactively.
    Repl,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.strict {
        config.strict_modifiers = true;
    }
    info!("Using configuration {config:?}");

    let engine = MoveEngine::new(config.strictness());
    let colored = !cli.plain;

    match cli.command {
        Commands::Hint { moves } => {
            let mut state = FaceletState::solved();
            engine.execute(&mut state, moves.split_whitespace())?;
            print_hint(get_hint(&state));
        }
        Commands::Show { moves } => {
            let mut state = FaceletState::solved();
            engine.execute(&mut state, moves.split_whitespace())?;
            println!("{}", net::render(&state, &config.color_names, colored));
        }
        Commands::Scramble { length, seed } => {
            let mut scrambler = match seed.or(config.seed) {
                Some(seed) => Scrambler::with_seed(seed),
                None => Scrambler::new(),
            };
            let scramble = scrambler.generate(length.unwrap_or(config.scramble_length));

            let mut state = FaceletState::solved();
            state.apply_algorithm(&scramble);

            println!("{}", format_scramble(&scramble));
            println!("{}", net::render(&state, &config.color_names, colored));
            print_hint(get_hint(&state));
        }
        Commands::Repl => repl::run(Session::new(config, colored))?,
    }

    Ok(())
}

fn print_hint(hint: Hint) {
    match hint {
        Hint::Oll { case, .. } => println!("{hint}  {}", format!("({case})").dimmed()),
        Hint::SearchExhausted { .. } => println!("{}", hint.red()),
        Hint::F2LNotReady | Hint::PllNotReady => println!("{hint}"),
    }
}
