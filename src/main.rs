//! Roster - master/detail role roster in the terminal
//!
//! This is the binary entry point. Domain logic lives in the workspace crates.

mod headless;

use std::path::{Path, PathBuf};

use clap::Parser;
use roster_app::config::{self, RecordsFile};
use roster_app::{AppState, SelectionMode};
use tracing::info;

const RECORDS_FILENAME: &str = "records.toml";

/// Roster - browse, edit and remove an employee's role assignments
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Master/detail role roster for the terminal", long_about = None)]
struct Args {
    /// Records fixture (defaults to .roster/records.toml, then built-in demo data)
    #[arg(long, value_name = "FILE")]
    records: Option<PathBuf>,

    /// Selection mode, overriding the configured default
    #[arg(long, value_name = "single|multi")]
    mode: Option<SelectionMode>,

    /// Read commands from stdin and print JSON events instead of drawing the TUI
    #[arg(long)]
    headless: bool,

    /// Write a default .roster/config.toml and exit
    #[arg(long)]
    init: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init {
        config::init_config_dir(&base_path)?;
        println!(
            "Wrote {}",
            base_path.join(config::ROSTER_DIR).join("config.toml").display()
        );
        return Ok(());
    }

    if let Err(e) = roster_core::logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let settings = config::load_settings(&base_path);
    let file = load_records_file(&base_path, args.records.as_deref())?;
    let mut state = AppState::from_records(file, settings, args.mode);

    if args.headless {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        headless::run_headless(&mut state, stdin.lock(), &mut stdout)?;
    } else {
        roster_tui::run(&mut state)?;
    }

    Ok(())
}

/// Explicit `--records` must load; the default location is optional
fn load_records_file(
    base_path: &Path,
    explicit: Option<&Path>,
) -> roster_core::Result<RecordsFile> {
    if let Some(path) = explicit {
        return config::load_records(path);
    }

    let default_path = base_path.join(config::ROSTER_DIR).join(RECORDS_FILENAME);
    if default_path.exists() {
        return config::load_records(&default_path);
    }

    info!("No records at {:?}, using demo data", default_path);
    Ok(RecordsFile::demo(chrono::Local::now().date_naive()))
}
