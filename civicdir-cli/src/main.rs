mod commands;
mod render;
mod utils;

use anyhow::Result;
use civicdir_core::civicdir::Civicdir;
use civicdir_core::event::EventCategory;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::edit::EditArgs;
use commands::list::Scope;
use commands::new::NewArgs;

#[derive(Parser)]
#[command(name = "civicdir")]
#[command(about = "Keep track of town halls, forums, meetings, rallies, debates and conferences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event (prompts for anything missing)
    New(NewArgs),
    /// List events grouped by day
    List {
        /// Only events that haven't started yet
        #[arg(long, conflicts_with = "past")]
        upcoming: bool,

        /// Only events that already started, most recent first
        #[arg(long)]
        past: bool,

        /// Only events of this category
        #[arg(short = 'k', long)]
        category: Option<EventCategory>,
    },
    /// Show every field of one event
    Show { id: String },
    /// Change fields of an event
    Edit(EditArgs),
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show configuration paths and display settings
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("civicdir_cli=warn,civicdir_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let civicdir = Civicdir::load()?;

    match cli.command {
        Commands::New(args) => commands::new::run(&civicdir, args),
        Commands::List {
            upcoming,
            past,
            category,
        } => {
            let scope = match (upcoming, past) {
                (true, _) => Scope::Upcoming,
                (_, true) => Scope::Past,
                _ => Scope::All,
            };
            commands::list::run(&civicdir, scope, category)
        }
        Commands::Show { id } => commands::show::run(&civicdir, &id),
        Commands::Edit(args) => commands::edit::run(&civicdir, args),
        Commands::Delete { id, force } => commands::delete::run(&civicdir, &id, force),
        Commands::Config => commands::config::run(&civicdir),
    }
}
