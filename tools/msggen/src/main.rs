mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate::GenerateArgs, list::ListArgs, show::ShowArgs};

#[derive(Parser)]
#[command(name = "msggen", about = "Generate ROS .msg definitions from foxglove schemas")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write .msg files (or merged bundles) for the built-in schemas
    Generate(GenerateArgs),
    /// Print one schema's definition to stdout
    Show(ShowArgs),
    /// List built-in schemas and enums
    List(ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::Show(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
