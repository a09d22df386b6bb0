use crate::allocate::{run_allocation, show_catalog, AllocateArgs, CatalogArgs};
use admission::error::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "admission",
    about = "Allocate applicants to university departments by score and preference",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the admission allocation (default command)
    Allocate(AllocateArgs),
    /// Print the department catalog an allocation would use
    Catalog(CatalogArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Allocate(AllocateArgs::default()));

    match command {
        Command::Allocate(args) => run_allocation(args),
        Command::Catalog(args) => show_catalog(args),
    }
}
