mod c14n;
mod id;
mod io;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the canonical form of an XML document, as used for signing.
    C14n(c14n::C14n),
    /// Print the identifier of the root element that a signature reference
    /// would point to.
    ///
    /// This is a shortcut for `c14n --print-id` that discards the output.
    Id(id::Id),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::C14n(c14n) => {
            c14n.run()?;
        }
        Commands::Id(id) => {
            id.run()?;
        }
    }
    Ok(())
}
