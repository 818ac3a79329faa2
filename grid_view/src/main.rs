// main.rs - Cross Logic: a two-category logic-puzzle grid

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use grid_model::{PuzzleConfig, presets};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod ui;    // eframe::App impl for GridView
mod view;  // Grid state binding

use view::GridView;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Cross Logic: mark deductions on a two-category logic-puzzle grid",
    long_about = None
)]
struct Cli {
    /// Load the puzzle from a TOML file.
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    puzzle: Option<PathBuf>,

    /// Built-in puzzle to open.
    #[arg(long, default_value = presets::DEFAULT_PRESET)]
    preset: String,

    /// Print the built-in puzzle names and exit.
    #[arg(long)]
    list_presets: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_presets {
        for preset in presets::PRESETS {
            println!("{}", preset.name);
        }
        return Ok(());
    }

    let config = load_config(&cli)?;
    let title = config.title.clone();
    let (rows, columns) = config.shape();
    info!(%title, rows, columns, rules = config.rules.len(), "opening puzzle");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(GridView::new(config))),
    )
    .map_err(|err| anyhow::anyhow!("window closed with error: {err}"))
}

fn load_config(cli: &Cli) -> Result<PuzzleConfig> {
    match &cli.puzzle {
        Some(path) => PuzzleConfig::load(path)
            .with_context(|| format!("could not open puzzle {}", path.display())),
        None => presets::load(&cli.preset)
            .with_context(|| format!("could not open built-in puzzle '{}'", cli.preset)),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CROSS_LOGIC_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "grid_view=debug,grid_model=debug,info"
        } else {
            "grid_view=info,grid_model=info,warn"
        })
    });

    let format = env::var("CROSS_LOGIC_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}
