//! minefield - minesweeper for the terminal
//!
//! A single-player minesweeper played entirely with the keyboard. The
//! game rules live in the `minefield-core` crate; this binary parses the
//! command line, loads the config file and runs the event loop around a
//! crossterm renderer.
//!
//! # Quick Start
//!
//! ```text
//! minefield                  # 9x9 with 10 mines
//! minefield -W 16 -H 16 -m 40
//! minefield --seed 7         # reproducible layout
//! ```
//!
//! # Keybindings
//!
//! | Key | Action |
//! |-----|--------|
//! | h/j/k/l, arrows | Move the cursor |
//! | H/L (or 0/$) | Jump to the left/right edge |
//! | g/G | Jump to the top/bottom edge |
//! | f, Space | Flag the selected cell |
//! | r, Enter, Tab | Reveal (press twice to chord) |
//! | q | Quit |

mod config;
mod ui;

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use minefield_core::{Action, Field, FieldParams, GameStatus};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::ui::{InputEvent, KeyMapper, Renderer};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command line options; unset fields fall back to the config file.
#[derive(Default)]
struct CliArgs {
    width: Option<usize>,
    height: Option<usize>,
    mines: Option<usize>,
    seed: Option<u64>,
}

fn print_version() {
    eprintln!("minefield {}", VERSION);
}

fn print_help() {
    eprintln!("minefield {} - minesweeper for the terminal", VERSION);
    eprintln!();
    eprintln!("Usage: minefield [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -W, --width <N>       Field width (default 9)");
    eprintln!("  -H, --height <N>      Field height (default 9)");
    eprintln!("  -m, --mines <N>       Number of mines (default 10)");
    eprintln!("      --seed <N>        Seed the mine layout (reproducible games)");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  h/j/k/l, arrows       Move the cursor");
    eprintln!("  H/L or 0/$            Jump to the left/right edge");
    eprintln!("  g/G                   Jump to the top/bottom edge");
    eprintln!("  f, Space              Flag the selected cell");
    eprintln!("  r, Enter, Tab         Reveal (press twice to chord)");
    eprintln!("  q                     Quit");
    eprintln!();
    eprintln!("Configuration: ~/.minefield/config.toml");
}

fn parse_args() -> Result<CliArgs, String> {
    let args: Vec<String> = env::args().collect();
    let mut cli = CliArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-W" | "--width" => cli.width = Some(next_value(&args, &mut i)?),
            "-H" | "--height" => cli.height = Some(next_value(&args, &mut i)?),
            "-m" | "--mines" => cli.mines = Some(next_value(&args, &mut i)?),
            "--seed" => cli.seed = Some(next_value(&args, &mut i)?),
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(cli)
}

fn next_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let name = args[*i].clone();
    *i += 1;
    let value = args
        .get(*i)
        .ok_or_else(|| format!("Missing value for {}", name))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", name, value))
}

/// Logging goes to a file because the terminal itself is the game board.
fn init_logging() {
    let log_path = config::state_dir()
        .map(|dir| dir.join("minefield.log"))
        .unwrap_or_else(|| PathBuf::from("minefield.log"));

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();

    let config = Config::load();
    let params = FieldParams {
        width: cli.width.unwrap_or(config.field.width),
        height: cli.height.unwrap_or(config.field.height),
        mines: cli.mines.unwrap_or(config.field.mines),
    };

    // Construct before touching the terminal, so a bad configuration is
    // reported on a normal screen.
    let mut field = match cli.seed {
        Some(seed) => Field::with_rng(params, &mut StdRng::seed_from_u64(seed)),
        None => Field::new(params),
    }
    .with_context(|| {
        format!(
            "cannot start a {}x{} game with {} mines",
            params.width, params.height, params.mines
        )
    })?;

    info!(
        "minefield {} starting: {}x{} with {} mines",
        VERSION, params.width, params.height, params.mines
    );

    let mut renderer = Renderer::new();
    renderer.init()?;

    let result = run_game(&mut field, &mut renderer);

    let _ = renderer.cleanup();
    result
}

/// Main event loop: one blocking key event per iteration, processed to
/// completion before the next read.
fn run_game(field: &mut Field, renderer: &mut Renderer) -> anyhow::Result<()> {
    renderer.render(field)?;

    let mut previous: Option<InputEvent> = None;

    loop {
        let input = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => KeyMapper::map(&key),
            Event::Resize(..) => {
                renderer.render(field)?;
                continue;
            }
            _ => None,
        };

        let Some(input) = input else { continue };

        match input {
            InputEvent::Quit => {
                info!("quit");
                break;
            }
            InputEvent::Action(action) => {
                debug!("action: {:?}", action);
                field.apply_action(action);

                // A repeated reveal is the chord: the second press opens
                // the satisfied neighbourhood around the cursor.
                if action == Action::Reveal
                    && previous == Some(InputEvent::Action(Action::Reveal))
                {
                    field.apply_action(Action::RevealAround);
                }
            }
        }

        match field.status() {
            GameStatus::Won => {
                field.reveal_all();
                renderer.render_end(field, true)?;
                info!("game won");
                wait_for_any_key()?;
                break;
            }
            GameStatus::Lost => {
                field.reveal_all();
                renderer.render_end(field, false)?;
                info!("game lost");
                wait_for_any_key()?;
                break;
            }
            GameStatus::Running => renderer.render(field)?,
        }

        previous = Some(input);
    }

    Ok(())
}

fn wait_for_any_key() -> anyhow::Result<()> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}
