//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan sources and report unknown breakpoints and parse errors
//! - `build`: Rewrite every source file into an output directory
//! - `transform`: Rewrite a single file to stdout
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Transform(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Do not generate source maps (overrides config file)
    #[arg(long)]
    pub no_sourcemap: bool,

    /// Keep unknown responsive keys as variant prefixes (overrides config file)
    #[arg(long)]
    pub enable_variants: bool,

    /// Name of the call to rewrite (overrides config file)
    #[arg(long, env = "CLS_FUNCTION_NAME")]
    pub function_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Directory the rewritten files are written to
    #[arg(long)]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TransformCommand {
    /// File to rewrite
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report unknown breakpoints and unparseable files
    Check(CheckCommand),
    /// Rewrite all source files into an output directory
    Build(BuildCommand),
    /// Rewrite one file and print the result
    Transform(TransformCommand),
    /// Initialize a new .clsrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
