//! Utility functions and helpers.
//!
//! This module contains small helpers shared by the compiler and the CLI,
//! such as shell quoting.

pub mod quote;

pub use quote::shell_quote;
