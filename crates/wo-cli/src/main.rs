//! CLI frontend for the Whiteout text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "whiteout",
    about = "Whiteout: escape a dead research station on the ice",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively
    Play {
        /// World file to load (default: the bundled world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Leave the exit list out of room descriptions
        #[arg(long)]
        no_exits: bool,
    },

    /// Validate a world file and print a summary
    Check {
        /// World file to load (default: the bundled world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// List the rooms of a world
    Rooms {
        /// World file to load (default: the bundled world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            world,
            no_color,
            no_exits,
        } => commands::play::run(world, !no_color, !no_exits),
        Commands::Check { world } => commands::check::run(world),
        Commands::Rooms { world } => commands::rooms::run(world),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
