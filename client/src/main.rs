mod app;
mod render;

use app::SnakeApp;
use clap::{App as CliApp, Arg, ArgMatches};
use eframe::egui;
use game::prelude::*;
use logger::*;
use std::{process, time::Duration};

fn main() {
    init_logger();

    let matches = CliApp::new("Snake")
        .about("Classic snake on a grid")
        .arg(
            Arg::with_name("grid_size")
                .short("g")
                .long("grid-size")
                .value_name("COLSxROWS")
                .help("Amount of columns and rows [default: 32x32]"),
        )
        .arg(
            Arg::with_name("length")
                .short("l")
                .long("length")
                .value_name("LENGTH")
                .help("Initial snake length, a number or a range like 3..6 [default: 3]"),
        )
        .arg(
            Arg::with_name("direction")
                .short("d")
                .long("direction")
                .value_name("DIRECTION")
                .help("Initial direction: north, south, east, west or random [default: east]"),
        )
        .arg(
            Arg::with_name("delay")
                .long("delay")
                .value_name("DURATION")
                .help("Time between ticks, like 70ms [default: 70ms]"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for fruit placement and random settings"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> game::Result<()> {
    let settings = settings(matches)?;
    let delay = matches
        .value_of("delay")
        .map(humantime::parse_duration)
        .transpose()?;
    let seed = matches
        .value_of("seed")
        .map(str::parse::<u64>)
        .transpose()?;

    let engine = match seed {
        Some(seed) => GameEngine::seeded(settings, seed)?,
        None => GameEngine::new(settings)?,
    };
    let board = render::board_size(engine.grid().size());
    info!(
        "Starting a {} game, tick every {:?}",
        engine.grid(),
        delay.unwrap_or(GAME_DELAY)
    );

    let engine = share(engine);
    let ticker = Ticker::spawn(engine.clone(), delay.filter(|d| *d > Duration::ZERO));
    let app = SnakeApp::new(engine, ticker);

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(board + egui::vec2(220.0, 20.0)),
        ..Default::default()
    };
    eframe::run_native(Box::new(app), native_options)
}

/// Collect [`Settings`] from the command line.
fn settings(matches: &ArgMatches<'_>) -> game::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(size) = matches.value_of("grid_size") {
        settings.grid_size = parse_grid_size(size)?;
    }
    if let Some(length) = matches.value_of("length") {
        settings.snake_length = length.parse()?;
    }
    if let Some(direction) = matches.value_of("direction") {
        settings.snake_direction = match direction {
            "random" => None,
            direction => Some(direction.parse()?),
        };
    }

    settings.validate()?;
    Ok(settings)
}

/// Parse `COLSxROWS`, like `32x24`.
fn parse_grid_size(s: &str) -> game::Result<(usize, usize)> {
    let (cols, rows) = s
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| format!("grid size must look like 32x32, got {:?}", s))?;
    Ok((cols.trim().parse()?, rows.trim().parse()?))
}
