//! The option model handed to the command compiler.
//!
//! An [`OptionSet`] is a plain snapshot of everything a user can select. It
//! performs no cross-field validation: an incomplete set (no target yet, no
//! wordlist yet) is still a valid value that callers can inspect, and the
//! compiler is the one deciding whether it is ready to render.

use serde::{Deserialize, Serialize};

use crate::config::flags::{Flag, FlagSet};

/// Default number of concurrent gobuster threads
pub const DEFAULT_THREADS: i64 = 10;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: i64 = 10;

/// Status codes shown by default
pub const DEFAULT_SHOW_STATUS_CODES: &str = "200,204,301,302,307,401,403";

/// Status codes hidden by default
pub const DEFAULT_HIDE_STATUS_CODES: &str = "404";

/// Accepted range for the thread count at the input surface.
pub const THREADS_RANGE: std::ops::RangeInclusive<i64> = 1..=1000;

/// Accepted range for the timeout at the input surface.
pub const TIMEOUT_RANGE: std::ops::RangeInclusive<i64> = 1..=60;

/// All user-selectable options for a `gobuster dir` invocation.
///
/// Empty strings mean "not set". Numeric fields are forwarded as-is by the
/// compiler, even outside [`THREADS_RANGE`] / [`TIMEOUT_RANGE`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSet {
    /// Scan target, URL or host
    pub target: String,

    /// Path picked from the predefined wordlists
    pub wordlist_path: String,

    /// User-supplied wordlist path, overrides `wordlist_path` when non-empty
    pub custom_wordlist_path: String,

    /// Comma-separated file extensions, passed through unchecked
    pub extensions: String,

    pub threads: i64,

    pub timeout_seconds: i64,

    /// Comma-separated status codes to show
    pub show_status_codes: String,

    /// Comma-separated status codes to hide
    pub hide_status_codes: String,

    /// Bare boolean switches
    pub flags: FlagSet,

    pub output_file: String,

    pub user_agent: String,

    /// Raw header lines, one per line
    pub custom_headers: String,

    pub proxy: String,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            target: String::new(),
            wordlist_path: String::new(),
            custom_wordlist_path: String::new(),
            extensions: String::new(),
            threads: DEFAULT_THREADS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            show_status_codes: DEFAULT_SHOW_STATUS_CODES.to_string(),
            hide_status_codes: DEFAULT_HIDE_STATUS_CODES.to_string(),
            flags: FlagSet::new(),
            output_file: String::new(),
            user_agent: String::new(),
            custom_headers: String::new(),
            proxy: String::new(),
        }
    }
}

impl OptionSet {
    /// Create a default option set for `target`.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// The wordlist the compiler will use, if any.
    ///
    /// The custom path wins whenever it is non-empty.
    #[must_use]
    pub fn effective_wordlist(&self) -> Option<&str> {
        if !self.custom_wordlist_path.is_empty() {
            Some(&self.custom_wordlist_path)
        } else if !self.wordlist_path.is_empty() {
            Some(&self.wordlist_path)
        } else {
            None
        }
    }

    /// Whether a custom wordlist path shadows the predefined selection.
    #[must_use]
    pub fn has_custom_wordlist(&self) -> bool {
        !self.custom_wordlist_path.is_empty()
    }

    #[must_use]
    pub fn is_set(&self, flag: Flag) -> bool {
        self.flags.contains(flag)
    }

    #[must_use]
    pub fn with_wordlist(mut self, path: impl Into<String>) -> Self {
        self.wordlist_path = path.into();
        self
    }

    #[must_use]
    pub fn with_custom_wordlist(mut self, path: impl Into<String>) -> Self {
        self.custom_wordlist_path = path.into();
        self
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: impl Into<String>) -> Self {
        self.extensions = extensions.into();
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: i64) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, seconds: i64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_status_codes(
        mut self,
        show: impl Into<String>,
        hide: impl Into<String>,
    ) -> Self {
        self.show_status_codes = show.into();
        self.hide_status_codes = hide.into();
        self
    }

    #[must_use]
    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.insert(flag);
        self
    }

    #[must_use]
    pub fn with_output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = path.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: impl Into<String>) -> Self {
        self.custom_headers = headers.into();
        self
    }

    #[must_use]
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = proxy.into();
        self
    }
}
