mod list;
mod logging;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use todomatic_core::{EmptySource, Filter, JsonSeedFile, TaskSource, TaskStore};
use tracing::info;

#[derive(Parser)]
#[command(name = "todomatic")]
#[command(about = "A minimal keyboard-driven to-do list", long_about = None)]
struct Cli {
    /// JSON file with the initial tasks (default: ~/.todomatic/tasks.json if it exists)
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Start with an empty list, ignoring any seed file
    #[arg(long, global = true, conflicts_with = "seed")]
    empty: bool,

    /// Initial filter: All, Active or Completed
    #[arg(long, global = true, default_value_t = Filter::All)]
    filter: Filter,

    /// Write logs to this file (the TUI is silent otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui,
    /// Print the tasks matching the filter
    List,
}

fn load_store(cli: &Cli) -> Result<TaskStore> {
    let source: Box<dyn TaskSource> = if cli.empty {
        Box::new(EmptySource)
    } else {
        match &cli.seed {
            Some(path) => Box::new(JsonSeedFile::new(path)),
            None => Box::new(JsonSeedFile::default_location()?),
        }
    };

    let store = TaskStore::with_tasks(source.load()?).set_filter(cli.filter);
    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = !matches!(cli.command, Some(Commands::List));
    logging::init(cli.log_file.as_deref(), interactive)?;

    let store = load_store(&cli)?;
    info!(tasks = store.len(), filter = %store.filter(), "starting");

    match cli.command {
        Some(Commands::List) => list::show_list(&store),
        Some(Commands::Tui) | None => tui::run(store)?,
    }
    Ok(())
}
