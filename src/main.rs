//! # gobuster-cmd
//!
//! Generate a `gobuster dir` command line from scan options.
//!
//! Options come from command-line arguments, layered over the defaults file at
//! `~/.config/gobuster-cmd/config.toml`. The tool only prints the command; it
//! never runs gobuster.
//!
//! ## Features
//!
//! - Deterministic token order for every option combination
//! - Shell-safe quoting of values (or raw output with `--raw`)
//! - Catalog of common dirb, dirbuster and SecLists wordlists
//! - Interactive prompt for a missing target or wordlist
//! - JSON output for scripting
//!
//! ## Usage
//!
//! ```bash
//! # Basic usage
//! gobuster-cmd http://example.com -p dirb-common
//!
//! # Extensions, more threads, skip TLS checks
//! gobuster-cmd https://example.com -w ~/lists/big.txt -x php,html -t 50 -k
//!
//! # Interactive mode
//! gobuster-cmd --interactive
//! ```

use std::process::exit;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use gobuster_cmd::{
    cli::Cli,
    compiler,
    config::FileConfig,
    output::JsonOutput,
    prompt::fill_missing,
    wordlist::WordlistPreset,
};
use tracing_subscriber::EnvFilter;

/// Shown instead of a command while required options are missing
const PLACEHOLDER: &str = "Fill in required fields to generate command";

/// Entry point for the gobuster-cmd application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_wordlists() {
    println!("{}", "Predefined wordlists:".bold());
    for preset in WordlistPreset::all() {
        let name = preset
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default();
        println!(
            "  {} {:<28} {}",
            format!("{name:<24}").cyan(),
            preset.to_string(),
            preset.path().dimmed()
        );
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments and sets up logging
/// 2. Loads the configuration file (explicit `--config` or the user default)
/// 3. Layers arguments over the file into an option set
/// 4. Optionally prompts for a missing target or wordlist
/// 5. Compiles the command and prints it, the placeholder, or a JSON document
///
/// # Errors
///
/// This function can return errors from:
/// - An explicit `--config` file that cannot be read or parsed
/// - Out-of-range values in the configuration file
/// - Interactive prompts
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    let json_mode = args.json();

    init_tracing(args.verbose());

    if args.list_wordlists() {
        print_wordlists();
        return Ok(());
    }

    let file_config = match args.config_file() {
        Some(path) => FileConfig::from_path(&path)?,
        None => match FileConfig::load() {
            Ok(config) => config,
            Err(e) => {
                if !json_mode {
                    eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
                }
                FileConfig::default()
            }
        },
    };

    let style = args.quote_style(&file_config);
    let mut options = args.option_set(&file_config)?;

    if args.interactive() {
        options = fill_missing(options)?;
    }

    let result = compiler::tokens(&options, style);

    if json_mode {
        let output = JsonOutput::from_result(result);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match result {
        Ok(tokens) => println!("{}", tokens.join(" ")),
        Err(reason) => {
            println!("{PLACEHOLDER}");
            eprintln!("{} {reason}", "Not ready:".yellow());
        }
    }

    Ok(())
}
