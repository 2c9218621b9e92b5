// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lehua - command-line dictionary.
//!
//! Loads configuration, sets up logging, reads the configured word list into
//! a trie and answers lookups, listings and prefix queries against it.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use lehua_lib::config::{self, ConfigResult, GlobalConfig, LehuaConfig, LogConfig};
use lehua_lib::dictionary::{Dictionary, WordMetaData};
use lehua_lib::error::{
    report_error, set_error_reporter, ErrorContext, LehuaError, LehuaResult, TracingErrorReporter,
};

/// Command line arguments for Lehua.
#[derive(Parser, Debug)]
#[clap(name = "lehua", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Look up words (defaults to the configured lookup words)
    Lookup {
        /// Words to look up
        words: Vec<String>,
    },

    /// List every word with a given part of speech
    Browse {
        /// Part of speech (defaults to the configured one)
        #[clap(long)]
        pos: Option<String>,
    },

    /// List every word starting with a prefix
    Prefix {
        /// Prefix to search for
        prefix: String,
    },

    /// Show dictionary statistics
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct LookupResult<'a> {
    word: &'a str,
    entry: Option<&'a WordMetaData>,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays clean.
fn init_logging(log: &LogConfig) -> LehuaResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LehuaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Configuration file to use: the one given, else the default if present.
fn config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        let default = PathBuf::from(config::DEFAULT_CONFIG_PATH);
        default.exists().then_some(default)
    })
}

fn print_json<T: Serialize>(value: &T) -> LehuaResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_entries(entries: &[&WordMetaData], json: bool) -> LehuaResult<()> {
    if json {
        return print_json(&entries);
    }
    for meta in entries {
        println!("{meta}");
    }
    Ok(())
}

/// Installs the loaded configuration globally and opens its dictionary.
fn open_dictionary(loaded: ConfigResult<LehuaConfig>) -> LehuaResult<(GlobalConfig, Dictionary)> {
    config::init_global_config(loaded?);
    let global = config::get_global_config()?;
    let config = global.get();
    let dictionary = Dictionary::from_config(&config.dictionary, config.trie)?;
    Ok((global, dictionary))
}

fn generate_config(output: &Path) -> LehuaResult<()> {
    info!("Generating default configuration");
    let default_config = LehuaConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| LehuaError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(command: Command, json: bool, loaded: ConfigResult<LehuaConfig>) -> LehuaResult<()> {
    match command {
        Command::GenConfig { output } => generate_config(&output),
        Command::Validate => {
            loaded?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::Lookup { words } => {
            let (global, dictionary) = open_dictionary(loaded)?;
            let words = if words.is_empty() {
                global.get().dictionary.lookup_words.clone()
            } else {
                words
            };

            let mut results = Vec::with_capacity(words.len());
            for word in &words {
                results.push(LookupResult {
                    word,
                    entry: dictionary.lookup(word)?,
                });
            }

            if json {
                return print_json(&results);
            }
            for result in &results {
                match result.entry {
                    Some(meta) => println!("{meta}"),
                    None => println!("{}: not found", result.word),
                }
            }
            Ok(())
        }
        Command::Browse { pos } => {
            let (global, dictionary) = open_dictionary(loaded)?;
            let pos = pos.unwrap_or_else(|| global.get().dictionary.part_of_speech.clone());
            print_entries(&dictionary.words_with_part_of_speech(&pos), json)
        }
        Command::Prefix { prefix } => {
            let (_, dictionary) = open_dictionary(loaded)?;
            print_entries(&dictionary.words_with_prefix(&prefix)?, json)
        }
        Command::Stats => {
            let (_, dictionary) = open_dictionary(loaded)?;
            let stats = dictionary.stats();
            if json {
                return print_json(&stats);
            }
            println!("words: {}", stats.words);
            println!("nodes: {}", stats.nodes);
            for (pos, count) in &stats.parts_of_speech {
                println!("  {pos}: {count}");
            }
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Configuration decides how to log, so load it first and report later.
    let loaded =
        config::ConfigLoader::new(config_path(args.config), config::ENV_PREFIX).load();
    let log = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();

    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter::new()));
    info!(version = lehua_lib::VERSION, "Starting lehua");

    let command = args.command.unwrap_or(Command::Lookup { words: Vec::new() });
    if let Err(error) = run(command, args.json, loaded) {
        report_error(ErrorContext::new(error, "cli"));
        process::exit(1);
    }
}
