//! Configuration types and options for the application.
//!
//! This module contains the option model consumed by the compiler and the
//! configuration file that provides persistent defaults.

pub mod file;
pub mod flags;
pub mod options;

pub use file::FileConfig;
pub use flags::{Flag, FlagSet};
pub use options::OptionSet;
