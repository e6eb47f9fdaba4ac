mod adopt;
mod commands;
mod config;
mod context;
mod output;
mod state;
mod traits;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{ImportAllCommand, ImportCommand, ListCommand};
use config::Config;
use context::Context;
use traits::RealFileSystem;

#[derive(Parser)]
#[command(name = "tfadopt")]
#[command(about = "Adopt unmanaged cloud resources into Terraform state", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the state snapshot (defaults to ./terraform.tfstate)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// State tool whose import subcommand registers adopted resources
    #[arg(long, global = true)]
    state_tool: Option<String>,

    /// Cloud region to query
    #[arg(long, global = true, env = "AWS_REGION")]
    region: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List remote resources not yet tracked in state
    List,

    /// Import one resource by address (<type>/<identifier>)
    Import {
        /// Resource address, e.g. aws_iam_role/deploy
        address: String,
    },

    /// Import every untracked resource
    ImportAll {
        /// Keep failed artifacts under an error-marked filename
        #[arg(short, long)]
        verbose: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&RealFileSystem, cli.state, cli.state_tool, cli.region)?;
    let ctx = Context::new(config.region.clone());

    match cli.command {
        Commands::List => {
            ListCommand::execute(&ctx, &config)?;
        }
        Commands::Import { address } => {
            ImportCommand::execute(&ctx, &config, &address)?;
        }
        Commands::ImportAll { verbose, yes } => {
            ImportAllCommand::execute(&ctx, &config, verbose, yes)?;
        }
    }

    Ok(())
}
