//! `roastery` — terminal UI for browsing and adding coffees.
//!
//! # Usage
//!
//! ```
//! roastery
//! roastery --name city --roast light
//! roastery --config ~/.config/roastery/config.toml --log-file /tmp/roastery.log
//! roastery --list --roast dark --json
//! ```

mod app;
mod config;
mod ui;

use std::{
  fs::File,
  io::{self, Write as _},
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{ConfigFile, Settings};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use roastery_core::{
  coffee::RoastFilter, controller::ViewController, store::CoffeeStore as _, view::ListView,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roastery", version, about = "Browse, filter and add coffees")]
struct Args {
  /// Path to a TOML config file (default filters, log file).
  #[arg(short, long, value_name = "FILE", env = "ROASTERY_CONFIG")]
  config: Option<PathBuf>,

  /// Initial name filter (case-insensitive substring).
  #[arg(long)]
  name: Option<String>,

  /// Initial roast filter: all, light, medium or dark.
  #[arg(long)]
  roast: Option<RoastFilter>,

  /// Print the filtered list and exit instead of starting the UI.
  #[arg(long)]
  list: bool,

  /// With --list, print JSON instead of plain text.
  #[arg(long, requires = "list")]
  json: bool,

  /// Write logs to this file.
  #[arg(long, value_name = "FILE", env = "ROASTERY_LOG_FILE")]
  log_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(path)?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(file_cfg, args.name, args.roast, args.log_file)?;

  // The UI owns the terminal, so logs only go to stderr in list mode.
  init_tracing(settings.log_file.as_deref(), args.list)?;

  let controller = ViewController::seeded().with_query(settings.query.clone());
  tracing::info!(
    records = controller.store().len(),
    name = %settings.query.name,
    roast = %settings.query.roast,
    "starting roastery"
  );

  if args.list {
    return print_list(controller.view(), args.json);
  }

  let mut app = App::new(controller);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

fn init_tracing(log_file: Option<&Path>, stderr: bool) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  match log_file {
    Some(path) => {
      let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    }
    None if stderr => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    }
    None => {}
  }
  Ok(())
}

// ─── List mode ────────────────────────────────────────────────────────────────

fn print_list(view: &ListView, json: bool) -> Result<()> {
  let mut out = io::stdout().lock();
  if json {
    serde_json::to_writer_pretty(&mut out, view).context("serialising list")?;
    writeln!(out)?;
    return Ok(());
  }

  match view {
    ListView::Empty { message, hint } => {
      writeln!(out, "{message}")?;
      writeln!(out, "{hint}")?;
    }
    ListView::Cards { cards } => {
      for card in cards {
        writeln!(
          out,
          "{:>14}  {:<6}  {}",
          card.id.to_string(),
          card.roast.to_string(),
          card.name
        )?;
      }
    }
  }
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if !event::poll(Duration::from_millis(250)).context("polling for input")? {
      continue;
    }

    match event::read().context("reading input")? {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      Event::Resize(_, _) => {
        // Terminal will redraw on next iteration.
      }
      _ => {}
    }
  }

  Ok(())
}
