//! Olelo - Main entrypoint.
//!
//! Loads configuration and the dictionary, then answers definition and
//! autocomplete queries from the command line or an interactive prompt.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use olelo_lib::config::{self, ConfigLoader, LogConfig, OleloConfig};
use olelo_lib::dictionary::{DictionaryService, VocabularyLoader};
use olelo_lib::error::{set_error_reporter, OleloError, OleloResult, TracingErrorReporter};

/// Command line arguments for Olelo.
#[derive(Parser, Debug)]
#[clap(name = "olelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding the configured path
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the definition of a word
    Define {
        /// Word to look up
        word: String,
    },

    /// List every word starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Print matches as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Answer queries from standard input (`?word` for a definition)
    Repl,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` overrides the configured level.
fn init_logging(log: &LogConfig) -> OleloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| OleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_service(config: &OleloConfig, dictionary: Option<PathBuf>) -> anyhow::Result<DictionaryService> {
    let path = dictionary.unwrap_or_else(|| config.dictionary.path.clone());
    let loader = VocabularyLoader::new(&config.dictionary, config.trie.clone());
    let vocabulary = loader
        .load_path(&path)
        .with_context(|| format!("loading dictionary {}", path.display()))?;
    Ok(DictionaryService::from(vocabulary))
}

fn print_matches(matches: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(matches).map_err(OleloError::from)?);
    } else {
        for word in matches {
            println!("{word}");
        }
    }
    Ok(())
}

fn run_repl(service: &DictionaryService) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    info!(words = service.word_count(), "Ready for queries");

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        if let Some(word) = query.strip_prefix('?') {
            match service.get_definition(word) {
                Some(definition) => writeln!(stdout, "{}: {definition}", word.trim())?,
                None => writeln!(stdout, "no definition for '{}'", word.trim())?,
            }
        } else {
            let matches = service.get_matches(query);
            if matches.is_empty() {
                writeln!(stdout, "no matches")?;
            }
            for word in matches {
                writeln!(stdout, "{word}")?;
            }
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    config::init_global_config(config.clone());
    info!(version = olelo_lib::VERSION, "Starting olelo");

    match args.command.unwrap_or(Command::Repl) {
        Command::Define { word } => {
            let service = load_service(&config, args.dictionary)?;
            match service.get_definition(&word) {
                Some(definition) => println!("{definition}"),
                None => {
                    eprintln!("no definition for '{word}'");
                    process::exit(2);
                }
            }
            Ok(())
        }
        Command::Complete { prefix, json } => {
            let service = load_service(&config, args.dictionary)?;
            print_matches(&service.get_matches(&prefix), json)
        }
        Command::Repl => {
            let service = load_service(&config, args.dictionary)?;
            run_repl(&service)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            let effective = config::global_config()
                .ok_or_else(|| OleloError::Custom("Global configuration not initialized".to_string()))?;
            let toml = toml::to_string_pretty(effective)
                .map_err(|e| OleloError::Custom(format!("Failed to serialize config: {e}")))?;
            print!("{toml}");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = OleloConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(OleloError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| OleloError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml).map_err(OleloError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
