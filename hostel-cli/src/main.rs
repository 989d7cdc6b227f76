//! Hostel room allocation CLI.
//!
//! # Usage
//!
//! ```text
//! hostel [menu]                                  interactive menu (default)
//! hostel rooms [--available]
//! hostel students [--json]
//! hostel book <name> --roll <n> --room <id>
//! hostel vacate <roll>
//! hostel search <name>
//! ```
//!
//! Global options: `--config <path>`, `--rooms <n>`, `--data-file <path>`.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    book::BookArgs, rooms::RoomsArgs, search::SearchArgs, students::StudentsArgs,
    vacate::VacateArgs, GlobalArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "hostel",
    version,
    about = "Allocate hostel rooms to students",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive menu (the default when no subcommand is given).
    Menu,

    /// List rooms, available first, then occupied.
    Rooms(RoomsArgs),

    /// List every student on the roster and their room.
    Students(StudentsArgs),

    /// Book a room for a new student.
    Book(BookArgs),

    /// Vacate the room held by a roll number and remove the student.
    Vacate(VacateArgs),

    /// Find a student's room by exact name.
    Search(SearchArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.global.resolve()?;
    match cli.command {
        None | Some(Commands::Menu) => commands::menu::run(&config),
        Some(Commands::Rooms(args)) => args.run(&config),
        Some(Commands::Students(args)) => args.run(&config),
        Some(Commands::Book(args)) => args.run(&config),
        Some(Commands::Vacate(args)) => args.run(&config),
        Some(Commands::Search(args)) => args.run(&config),
    }
}

/// Log to stderr so command output on stdout stays clean. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
