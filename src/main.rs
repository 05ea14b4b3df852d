//! Nodesel CLI application entry point
//!
//! Loads a forest of named nodes from JSON and answers the questions a
//! tree-node selector asks while the user types.
//!
//! # Usage
//!
//! ```bash
//! # Classify tags against the catalog
//! nodesel check forest.json "Data:Subdata" "Data:Sub" --accept Data
//!
//! # Paste several tags at once; later copies become duplicates
//! nodesel batch forest.json Data Data Data
//!
//! # Complete the segment being typed
//! nodesel suggest forest.json "Data:" --max 10
//!
//! # Outline of the catalog, first level treated as metadata
//! nodesel -m 1 tree forest.json
//! ```
//!
//! # Configuration
//!
//! Defaults are read from `~/.config/nodesel/config.toml` on Linux (created
//! on first run) or from the file given with `--config`. `nodesel config init`
//! writes the effective settings, flags included, back to that file.

use nodesel::{
    NodeselError,
    cli::{self, Cli, Commands, ConfigCommands},
    commands,
    config::NodeselConfig,
    matcher::AcceptedTags,
    output::{OutputWriter, StdoutWriter},
};
use std::process;

type Result<T> = std::result::Result<T, NodeselError>;

/// Load the config file, falling back to defaults when the default location is unusable
fn load_config(cli: &Cli, out: &dyn OutputWriter) -> Result<NodeselConfig> {
    if let Some(path) = &cli.config {
        return Ok(NodeselConfig::load_from(path)?);
    }

    match NodeselConfig::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            out.warning(&format!("Using default configuration: {e}"));
            Ok(NodeselConfig::default())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let bootstrap = StdoutWriter::new(cli.quiet);
    let config = cli.apply_overrides(load_config(&cli, &bootstrap)?);
    let out = StdoutWriter::new(config.quiet);
    let quiet = config.quiet;
    let json = cli.json;

    match &cli.command {
        Commands::Check {
            forest,
            tags,
            accept,
        } => {
            let catalog = commands::open_catalog(forest, &config, &out)?;
            let accepted: AcceptedTags = accept.iter().cloned().collect();
            commands::check(&catalog, tags, &accepted, json, quiet, &out)?;
        }
        Commands::Batch {
            forest,
            tags,
            accept,
        } => {
            let catalog = commands::open_catalog(forest, &config, &out)?;
            let accepted: AcceptedTags = accept.iter().cloned().collect();
            commands::batch(&catalog, tags, &accepted, json, quiet, &out)?;
        }
        Commands::Suggest {
            forest,
            partial,
            accept,
            ..
        } => {
            let catalog = commands::open_catalog(forest, &config, &out)?;
            let accepted: AcceptedTags = accept.iter().cloned().collect();
            commands::suggest(
                &catalog,
                partial,
                &accepted,
                config.max_suggestions,
                json,
                quiet,
                &out,
            )?;
        }
        Commands::Tree { forest } => {
            let catalog = commands::open_catalog(forest, &config, &out)?;
            commands::tree(&catalog, &out);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    NodeselError::InvalidInput(format!("Failed to render config: {e}"))
                })?;
                out.write(rendered.trim_end());
            }
            ConfigCommands::Path => {
                let path = match &cli.config {
                    Some(path) => path.clone(),
                    None => NodeselConfig::config_path()?,
                };
                out.write(&path.display().to_string());
            }
            ConfigCommands::Init => {
                // Refuse to persist settings no catalog could be built with
                config.catalog_options()?;
                let path = match &cli.config {
                    Some(path) => {
                        config.save_to(path)?;
                        path.clone()
                    }
                    None => {
                        config.save()?;
                        NodeselConfig::config_path()?
                    }
                };
                out.success(&format!("Wrote configuration to {}", path.display()));
            }
        },
        Commands::Completions { shell } => {
            cli::generate_completions(*shell, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse_args();
    let quiet = cli.quiet;

    if let Err(e) = run(cli) {
        StdoutWriter::new(quiet).error(&e.to_string());
        process::exit(1);
    }
}
