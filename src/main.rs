//! Lanai - Main entrypoint.
//!
//! Loads a newline-delimited dictionary into a trie and answers prefix and
//! membership queries from the command line.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lanai_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig};
use lanai_lib::data_structures::lanai_trie::{LanaiTrie, TracingListener};
use lanai_lib::dictionary::{self, LoadOptions};
use lanai_lib::error::{report_error, ErrorContext, LanaiError, LanaiResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[command(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every trie allocation and deallocation at trace level
    #[arg(long)]
    trace_allocations: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the first words of the dictionary starting with a prefix
    Search {
        /// Prefix to look up (defaults to the configured prefix)
        prefix: Option<String>,

        /// Maximum number of words to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Dictionary file overriding the configured one
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
    },

    /// Check whether the dictionary contains a word
    Contains {
        /// Word to look up
        word: String,

        /// Dictionary file overriding the configured one
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to standard error.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(io::stderr);

    let result = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from the configured limits and loads the dictionary into it.
fn load_trie(
    config: &LanaiConfig,
    dictionary_path: Option<&Path>,
    trace_allocations: bool,
) -> LanaiResult<LanaiTrie> {
    let mut trie_config = config.trie.to_trie_config();
    if trace_allocations {
        trie_config = trie_config.with_listener(Arc::new(TracingListener));
    }

    let mut trie = LanaiTrie::with_config(trie_config);
    let path = dictionary_path.unwrap_or(config.dictionary.path.as_path());
    let summary = dictionary::load_file(path, &mut trie, LoadOptions::from(&config.dictionary))?;

    info!(
        words = trie.len(),
        nodes = trie.node_count(),
        duplicates = summary.duplicates,
        "dictionary ready"
    );
    Ok(trie)
}

fn run(args: Args, config: LanaiConfig, config_loader: &ConfigLoader) -> LanaiResult<()> {
    let command = args.command.unwrap_or(Command::Search {
        prefix: None,
        limit: None,
        dictionary: None,
    });

    match command {
        Command::Search {
            prefix,
            limit,
            dictionary: dictionary_path,
        } => {
            let prefix = prefix.unwrap_or_else(|| config.search.default_prefix.clone());
            let limit = config.search.resolve_limit(limit)?;
            let trie = load_trie(&config, dictionary_path.as_deref(), args.trace_allocations)?;

            let words = trie.words_matching_prefix(&prefix, limit);

            let mut out = io::stdout().lock();
            writeln!(out, "First {} words matching prefix {}:", words.len(), prefix)?;
            for word in &words {
                writeln!(out, "{}", String::from_utf8_lossy(word))?;
            }

            trie.destroy();
            Ok(())
        }
        Command::Contains {
            word,
            dictionary: dictionary_path,
        } => {
            let trie = load_trie(&config, dictionary_path.as_deref(), args.trace_allocations)?;
            let found = trie.contains_word(&word);

            let mut out = io::stdout().lock();
            writeln!(out, "{word}: {}", if found { "found" } else { "not found" })?;

            trie.destroy();
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            config_loader.load()?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LanaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is configured from the file that just failed to load
            if init_logging(&LogConfig::default()).is_ok() {
                lanai_lib::init();
            }
            report_error(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        report_error(ErrorContext::new(e, "logging"));
        process::exit(1);
    }
    lanai_lib::init();

    if let Err(e) = run(args, config, &config_loader) {
        let context = if dictionary::is_empty_line_error(&e) {
            ErrorContext::new(e, "dictionary")
                .with_details("set dictionary.skip_empty_lines = true to ignore blank lines")
        } else {
            ErrorContext::new(e, "cli")
        };
        report_error(context);
        process::exit(1);
    }
}
