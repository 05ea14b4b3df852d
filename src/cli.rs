//! Command-line interface definitions and parsing
//!
//! Defines the `nodesel` CLI with `clap`. Every command takes a forest JSON
//! file; global flags override the matching settings from the config file.
//!
//! # Commands
//!
//! - **check**: classify tags independently against an accepted set
//! - **batch**: classify tags in order, each against the ones before it
//! - **suggest**: list completions for a partially typed tag
//! - **tree**: print the catalog outline
//! - **config**: show, locate, or persist the effective configuration
//! - **completions**: generate a shell completion script

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

use crate::config::NodeselConfig;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the path of the config file
    Path,
    /// Write the effective configuration (file plus flags) to the config file
    Init,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Classify each tag against the accepted set
    #[command(visible_alias = "c")]
    Check {
        /// Forest JSON file
        #[arg(value_name = "FOREST")]
        forest: PathBuf,

        /// Raw tag strings to classify
        #[arg(value_name = "TAG", required = true, num_args = 1..)]
        tags: Vec<String>,

        /// Tags already accepted (repeatable)
        #[arg(short = 'a', long = "accept", value_name = "TAG")]
        accept: Vec<String>,
    },

    /// Classify tags in order; later tags see earlier ones as accepted
    #[command(visible_alias = "b")]
    Batch {
        /// Forest JSON file
        #[arg(value_name = "FOREST")]
        forest: PathBuf,

        /// Raw tag strings, in insertion order
        #[arg(value_name = "TAG", required = true, num_args = 1..)]
        tags: Vec<String>,

        /// Tags accepted before the batch (repeatable)
        #[arg(short = 'a', long = "accept", value_name = "TAG")]
        accept: Vec<String>,
    },

    /// Suggest completions for a partially typed tag
    #[command(visible_alias = "s")]
    Suggest {
        /// Forest JSON file
        #[arg(value_name = "FOREST")]
        forest: PathBuf,

        /// Partially typed tag (empty lists the roots)
        #[arg(value_name = "PARTIAL", default_value = "")]
        partial: String,

        /// Maximum number of suggestions (overrides config)
        #[arg(short = 'n', long = "max", value_name = "N")]
        max: Option<usize>,

        /// Tags already accepted (repeatable)
        #[arg(short = 'a', long = "accept", value_name = "TAG")]
        accept: Vec<String>,
    },

    /// Print the catalog as an indented tree
    Tree {
        /// Forest JSON file
        #[arg(value_name = "FOREST")]
        forest: PathBuf,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
#[command(name = "nodesel")]
#[command(about = "Match delimited tags against a node hierarchy", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Path segment delimiter (overrides config)
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", global = true)]
    pub delimiter: Option<String>,

    /// Leading metadata levels stripped from tags (overrides config)
    #[arg(short = 'm', long = "meta-levels", value_name = "N", global = true)]
    pub meta_levels: Option<usize>,

    /// Match names ignoring case
    #[arg(short = 'i', long = "ignore-case", global = true)]
    pub ignore_case: bool,

    /// Emit results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Layer command-line overrides on top of the loaded configuration
    #[must_use]
    pub fn apply_overrides(&self, mut config: NodeselConfig) -> NodeselConfig {
        if let Some(delimiter) = &self.delimiter {
            config.delimiter.clone_from(delimiter);
        }
        if let Some(levels) = self.meta_levels {
            config.num_meta_levels = levels;
        }
        if let Commands::Suggest { max: Some(max), .. } = &self.command {
            config.max_suggestions = Some(*max);
        }
        config.case_insensitive |= self.ignore_case;
        config.quiet |= self.quiet;
        config
    }
}

/// Write a completion script for `shell`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
