//! Command-line interface and option layering.
//!
//! Arguments are grouped the same way the generated command is: wordlist,
//! performance, status code filtering, output and network options. Each group
//! is merged with the configuration file to produce the [`OptionSet`] handed
//! to the compiler.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::debug;

use crate::compiler::QuoteStyle;
use crate::config::file::expand_tilde;
use crate::config::options::{
    DEFAULT_HIDE_STATUS_CODES, DEFAULT_SHOW_STATUS_CODES, DEFAULT_THREADS,
    DEFAULT_TIMEOUT_SECONDS, THREADS_RANGE, TIMEOUT_RANGE,
};
use crate::config::{FileConfig, Flag, FlagSet, OptionSet};
use crate::wordlist::WordlistPreset;

#[derive(Parser)]
struct WordlistArgs {
    /// Path to a custom wordlist (overrides --wordlist-preset)
    #[arg(short = 'w', long, value_name = "PATH")]
    wordlist: Option<String>,

    /// One of the predefined wordlists (see --list-wordlists)
    #[arg(short = 'p', long, value_enum, value_name = "NAME")]
    wordlist_preset: Option<WordlistPreset>,

    /// Comma-separated file extensions to check (e.g., php,html,txt)
    #[arg(short = 'x', long)]
    extensions: Option<String>,
}

#[derive(Parser)]
struct PerformanceArgs {
    /// Number of concurrent gobuster threads [default: 10]
    #[arg(
        short = 't',
        long,
        value_parser = clap::value_parser!(i64).range(1..=1000)
    )]
    threads: Option<i64>,

    /// Request timeout in seconds [default: 10]
    #[arg(
        short = 'T',
        long,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(i64).range(1..=60)
    )]
    timeout: Option<i64>,
}

#[derive(Parser)]
struct FilteringArgs {
    /// Status codes to show [default: 200,204,301,302,307,401,403]
    #[arg(short = 's', long, value_name = "CODES")]
    status_codes: Option<String>,

    /// Status codes to hide [default: 404]
    #[arg(short = 'b', long, value_name = "CODES")]
    hide_codes: Option<String>,
}

#[derive(Parser)]
struct OutputArgs {
    /// Show full URLs in gobuster's output (-e)
    #[arg(short = 'e', long)]
    full_url: bool,

    /// Don't print gobuster's banner and noise (-q)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Don't display gobuster's progress (-z)
    #[arg(short = 'z', long)]
    no_progress: bool,

    /// File gobuster should write its results to (-o)
    #[arg(short = 'o', long, value_name = "FILE")]
    output_file: Option<String>,
}

#[derive(Parser)]
struct NetworkArgs {
    /// Follow redirects (-r)
    #[arg(short = 'r', long)]
    follow_redirects: bool,

    /// Skip TLS certificate verification (-k)
    #[arg(short = 'k', long)]
    skip_ssl: bool,

    /// Custom User-Agent
    #[arg(short = 'a', long)]
    user_agent: Option<String>,

    /// Extra request header, e.g. "X-API-Key: value" (repeatable)
    #[arg(short = 'H', long = "header", action = clap::ArgAction::Append)]
    headers: Vec<String>,

    /// Proxy for gobuster's requests (e.g., http://proxy:8080)
    #[arg(long)]
    proxy: Option<String>,
}

#[derive(Parser)]
struct RenderArgs {
    /// Emit values verbatim instead of shell-quoting them
    #[arg(long)]
    raw: bool,

    /// Print the result as a JSON document
    #[arg(long)]
    json: bool,

    /// Prompt for the target and wordlist when they are missing
    #[arg(short = 'i', long, conflicts_with = "json")]
    interactive: bool,

    /// List the predefined wordlists and exit
    #[arg(long)]
    list_wordlists: bool,

    /// Read defaults from this file instead of the user config file
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log compilation details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Parser)]
#[command(name = "gobuster-cmd", version)]
#[command(about = "Generate a gobuster directory brute-force command from scan options")]
pub struct Cli {
    /// The target URL to scan (e.g., http://example.com)
    target: Option<String>,

    /// Wordlist options
    #[command(flatten)]
    wordlist: WordlistArgs,

    /// Performance options
    #[command(flatten)]
    performance: PerformanceArgs,

    /// Status code filtering options
    #[command(flatten)]
    filtering: FilteringArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Network options
    #[command(flatten)]
    network: NetworkArgs,

    /// Rendering options
    #[command(flatten)]
    render: RenderArgs,
}

/// Reject a config file number outside the range the CLI accepts.
fn check_range(
    field: &str,
    value: i64,
    range: &std::ops::RangeInclusive<i64>,
) -> Result<i64> {
    if !range.contains(&value) {
        bail!(
            "Config value `{field}` = {value} is out of range ({}..={})",
            range.start(),
            range.end()
        );
    }
    Ok(value)
}

impl Cli {
    #[must_use]
    pub const fn json(&self) -> bool {
        self.render.json
    }

    #[must_use]
    pub const fn interactive(&self) -> bool {
        self.render.interactive
    }

    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.render.verbose
    }

    #[must_use]
    pub const fn list_wordlists(&self) -> bool {
        self.render.list_wordlists
    }

    /// Explicit config file given with `--config`, if any.
    #[must_use]
    pub fn config_file(&self) -> Option<PathBuf> {
        self.render.config.as_deref().map(expand_tilde)
    }

    /// Quoting policy: `--raw`, else the config file, else shell quoting.
    #[must_use]
    pub fn quote_style(&self, file_config: &FileConfig) -> QuoteStyle {
        if self.render.raw {
            QuoteStyle::Display
        } else {
            file_config.quote_style.unwrap_or_default()
        }
    }

    /// Merge the arguments with `file_config` into an [`OptionSet`].
    ///
    /// Missing target or wordlist is not an error here; the compiler reports
    /// those.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file sets `threads` or `timeout` outside
    /// the range the CLI itself accepts.
    pub fn option_set(&self, file_config: &FileConfig) -> Result<OptionSet> {
        let scan = &file_config.scan;
        let filtering = &file_config.filtering;
        let output = &file_config.output;
        let network = &file_config.network;

        let threads = match self.performance.threads {
            Some(threads) => threads,
            None => match scan.threads {
                Some(threads) => check_range("scan.threads", threads, &THREADS_RANGE)?,
                None => DEFAULT_THREADS,
            },
        };

        let timeout_seconds = match self.performance.timeout {
            Some(timeout) => timeout,
            None => match scan.timeout {
                Some(timeout) => check_range("scan.timeout", timeout, &TIMEOUT_RANGE)?,
                None => DEFAULT_TIMEOUT_SECONDS,
            },
        };

        // A preset picked on the command line must not lose to a custom path
        // coming from the config file.
        let custom_wordlist_path = match (
            &self.wordlist.wordlist,
            self.wordlist.wordlist_preset,
        ) {
            (Some(path), _) => path.clone(),
            (None, Some(_)) => String::new(),
            (None, None) => scan
                .wordlist
                .as_deref()
                .map(|path| expand_tilde(path).to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let wordlist_path = self
            .wordlist
            .wordlist_preset
            .or(scan.wordlist_preset)
            .map(|preset| preset.path().to_string())
            .unwrap_or_default();

        let mut options = OptionSet {
            target: self.target.clone().unwrap_or_default(),
            wordlist_path,
            custom_wordlist_path,
            extensions: self
                .wordlist
                .extensions
                .clone()
                .or_else(|| scan.extensions.clone())
                .unwrap_or_default(),
            threads,
            timeout_seconds,
            show_status_codes: self
                .filtering
                .status_codes
                .clone()
                .or_else(|| filtering.show_codes.clone())
                .unwrap_or_else(|| DEFAULT_SHOW_STATUS_CODES.to_string()),
            hide_status_codes: self
                .filtering
                .hide_codes
                .clone()
                .or_else(|| filtering.hide_codes.clone())
                .unwrap_or_else(|| DEFAULT_HIDE_STATUS_CODES.to_string()),
            flags: FlagSet::new(),
            output_file: self
                .output
                .output_file
                .clone()
                .or_else(|| {
                    output
                        .output_file
                        .as_deref()
                        .map(|path| expand_tilde(path).to_string_lossy().into_owned())
                })
                .unwrap_or_default(),
            user_agent: self
                .network
                .user_agent
                .clone()
                .or_else(|| network.user_agent.clone())
                .unwrap_or_default(),
            custom_headers: if self.network.headers.is_empty() {
                network
                    .headers
                    .as_ref()
                    .map(|headers| headers.join("\n"))
                    .unwrap_or_default()
            } else {
                self.network.headers.join("\n")
            },
            proxy: self
                .network
                .proxy
                .clone()
                .or_else(|| network.proxy.clone())
                .unwrap_or_default(),
        };

        let switches = [
            (Flag::ShowFullUrl, self.output.full_url, output.full_url),
            (Flag::Quiet, self.output.quiet, output.quiet),
            (Flag::NoProgress, self.output.no_progress, output.no_progress),
            (
                Flag::FollowRedirects,
                self.network.follow_redirects,
                network.follow_redirects,
            ),
            (Flag::SkipSsl, self.network.skip_ssl, network.skip_ssl),
        ];
        for (flag, from_cli, from_file) in switches {
            options.flags.set(flag, from_cli || from_file.unwrap_or(false));
        }

        debug!(
            scan_target = %options.target,
            wordlist = options.effective_wordlist().unwrap_or(""),
            threads = options.threads,
            timeout = options.timeout_seconds,
            "layered options"
        );

        Ok(options)
    }
}
