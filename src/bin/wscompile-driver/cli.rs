//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// wscompile driver - plans and launches the JAX-RPC wscompile tool
#[derive(Parser)]
#[command(name = "wscompile-driver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to wscompile.toml (defaults to the nearest one upward)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan and run the wscompile invocation
    Run(RunArgs),

    /// Print the planned wscompile arguments (no run)
    Plan(PlanArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Run on the ambient JVM instead of forking the configured JDK
    #[arg(long)]
    pub no_fork: bool,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Emit the plan as JSON
    #[arg(long)]
    pub json: bool,
}
