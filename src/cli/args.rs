//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Verify format strings against declared signatures
//! - `init`: Initialize catalint configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;
use crate::core::{MessageId, MissingLocalePolicy};

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
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root; .catalintrc.json is searched from here
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Signature file path (overrides config file)
    #[arg(long)]
    pub signatures: Option<PathBuf>,

    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Highest message id to verify (overrides config file)
    #[arg(long, value_parser = clap::value_parser!(MessageId).range(1..))]
    pub max_id: Option<MessageId>,

    /// Stop at the first failing message id
    #[arg(long)]
    pub fail_fast: bool,

    /// How to treat a locale with no string for a message (overrides config file)
    #[arg(long, value_enum)]
    pub missing_locales: Option<MissingLocalePolicy>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify that every locale string matches its declared parameters
    Check(CheckCommand),
    /// Initialize a new .catalintrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
