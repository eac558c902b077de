//! Terminal arena runner (default binary).
//!
//! Builds a walled arena with a player, patrolling enemies and an item, then
//! runs the engine loop against the real keyboard. With `--script` the same
//! game runs headless on a fixed key sequence and prints every frame.

use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_instant::core::{ArenaLayout, Behavior};
use tui_instant::engine::{Engine, EngineConfig};
use tui_instant::input::{CrosstermInput, ScriptedInput};
use tui_instant::term::{PlainScreen, TerminalRenderer, MAX_GRID_WIDTH};
use tui_instant::types::{KeyMode, DEFAULT_HEIGHT, DEFAULT_WIDTH, QUIT_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DisplayMode {
    /// Redraw in place on the alternate screen
    Terminal,
    /// Print every frame below a run of blank lines
    Plain,
}

#[derive(Debug, Parser)]
#[command(name = "tui-instant", version, about = "Walk around a walled arena in the terminal")]
struct Args {
    /// Arena width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(3..=MAX_GRID_WIDTH as i64))]
    width: u16,

    /// Arena height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(3..))]
    height: u16,

    /// Frame cap (0 = unlimited)
    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[arg(long, value_enum, default_value_t = DisplayMode::Terminal)]
    display: DisplayMode,

    /// Number of patrolling enemies (at most 3)
    #[arg(long, default_value_t = 1)]
    enemies: usize,

    /// Enemies move once every N frames
    #[arg(long, default_value_t = 8)]
    enemy_period: u32,

    /// Keep walking in the last pressed direction
    #[arg(long)]
    held: bool,

    /// Run headless on this key sequence and print the frames
    #[arg(long, value_name = "KEYS")]
    script: Option<String>,

    /// Write logs here instead of stderr. Interactive runs with RUST_LOG set
    /// default to tui-instant.log
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Log file used when an interactive run would otherwise log over the playfield.
const DEFAULT_LOG_FILE: &str = "tui-instant.log";

fn main() -> Result<()> {
    let args = Args::parse();
    let log_file = log_target(&args, env::var_os("RUST_LOG").is_some());
    init_tracing(log_file.as_deref())?;

    let mut engine = build_engine(&args);
    match &args.script {
        Some(keys) => run_headless(&mut engine, keys),
        None => run_interactive(&mut engine, args.display),
    }
}

/// Where logs go. Interactive runs own the terminal, so stderr is only used
/// headless or when logging is off.
fn log_target(args: &Args, logging_enabled: bool) -> Option<PathBuf> {
    if let Some(path) = &args.log_file {
        return Some(path.clone());
    }
    let interactive = args.script.is_none();
    (interactive && logging_enabled).then(|| PathBuf::from(DEFAULT_LOG_FILE))
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
    }
    Ok(())
}

fn build_engine(args: &Args) -> Engine {
    let fps = if args.script.is_some() { 0 } else { args.fps };
    let mut engine = Engine::new(EngineConfig::new(args.width, args.height).with_fps(fps));

    let mode = if args.held {
        KeyMode::Held
    } else {
        KeyMode::OnPress
    };

    let layout = ArenaLayout::new(args.width, args.height);
    for mut entity in layout.entities(args.enemies) {
        match &mut entity.behavior {
            Behavior::Player(control) => control.mode = mode,
            Behavior::Enemy(patrol) => *patrol = patrol.clone().with_period(args.enemy_period),
            _ => {}
        }
        engine.add(entity);
    }
    engine
}

fn run_headless(engine: &mut Engine, keys: &str) -> Result<()> {
    let mut input = ScriptedInput::from_keys(keys.chars());
    // Make sure the loop ends once the script runs out.
    input.push(QUIT_KEY);

    let mut screen = PlainScreen::new(io::stdout().lock()).with_clear_lines(1);
    engine
        .run(&mut input, &mut screen)
        .context("headless run failed")?;
    info!(frames = engine.frames(), "headless run finished");
    Ok(())
}

fn run_interactive(engine: &mut Engine, mode: DisplayMode) -> Result<()> {
    let mut input = CrosstermInput::acquire().context("failed to acquire terminal input")?;

    let result = match mode {
        DisplayMode::Terminal => {
            let mut screen = TerminalRenderer::new();
            screen.enter().context("failed to enter alternate screen")?;
            engine.run(&mut input, &mut screen)
        }
        DisplayMode::Plain => {
            let mut screen = PlainScreen::new(io::stdout()).raw();
            engine.run(&mut input, &mut screen)
        }
    };

    result.context("game loop failed")?;
    Ok(())
}
