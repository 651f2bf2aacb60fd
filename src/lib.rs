//! # gobuster-cmd
//!
//! Compile a set of scan options into a ready-to-paste `gobuster dir` command.
//!
//! This library provides the core of the gobuster-cmd CLI tool: the
//! [`OptionSet`](config::OptionSet) option model, the pure
//! [`compile`](compiler::compile) function that renders it, the catalog of
//! well-known wordlists, and the configuration file that supplies defaults.
//!
//! ```
//! use gobuster_cmd::{compiler::compile, config::{Flag, OptionSet}};
//!
//! let options = OptionSet::new("http://example.com")
//!     .with_wordlist("/usr/share/wordlists/dirb/common.txt")
//!     .with_flag(Flag::Quiet);
//! let command = compile(&options).unwrap();
//! assert!(command.starts_with("gobuster dir -u http://example.com"));
//! ```

pub mod cli;
pub mod compiler;
pub mod config;
pub mod output;
pub mod prompt;
pub mod utils;
pub mod wordlist;
