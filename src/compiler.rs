//! Turns an [`OptionSet`] into a `gobuster dir` command line.
//!
//! Compilation is a pure function of its input: no I/O, no shared state, and
//! the same options always render to the same string. Tokens are emitted in a
//! fixed order so the output stays stable while the user edits options.
//!
//! ```text
//! gobuster dir -u <target> -w <wordlist> [-x <ext>] -t <n> --timeout <n>s
//!     [-s <codes>] [-b <codes>] [-e] [-q] [-z] [-o <file>] [-r] [-k]
//!     [-a "<agent>"] [-H "<header>"]... [--proxy <url>]
//! ```

use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{
    Flag, OptionSet,
    options::{THREADS_RANGE, TIMEOUT_RANGE},
};
use crate::utils::shell_quote;

/// Program name at the head of every command
pub const PROGRAM: &str = "gobuster";

/// Directory brute-force mode, the only mode this compiler renders
pub const MODE: &str = "dir";

/// Flags emitted right after the status code filters.
const OUTPUT_FLAGS: [Flag; 3] = [Flag::ShowFullUrl, Flag::Quiet, Flag::NoProgress];

/// Flags emitted right after the output file.
const NETWORK_FLAGS: [Flag; 2] = [Flag::FollowRedirects, Flag::SkipSsl];

/// Reason a command cannot be rendered yet.
///
/// Both variants are expected while options are still being filled in; they
/// mean "no command yet" rather than a failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompileError {
    /// The target is empty
    MissingTarget,

    /// Neither a predefined nor a custom wordlist is set
    MissingWordlist,
}

impl CompileError {
    /// Stable machine-readable identifier.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::MissingTarget => "missing_target",
            Self::MissingWordlist => "missing_wordlist",
        }
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTarget => write!(f, "a target URL is required"),
            Self::MissingWordlist => write!(f, "a wordlist is required"),
        }
    }
}

impl std::error::Error for CompileError {}

/// How values are written into the command.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// Values verbatim; user agent and headers wrapped in double quotes.
    ///
    /// Only suitable for display: a target containing `;` or a header
    /// containing `"` produces a string a shell would misread.
    Display,

    /// Every value quoted for a POSIX shell when it needs it.
    #[default]
    Shell,
}

impl QuoteStyle {
    fn value<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Display => Cow::Borrowed(value),
            Self::Shell => shell_quote(value),
        }
    }

    /// Free-text values (user agent, headers).
    fn text<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Display => Cow::Owned(format!("\"{value}\"")),
            Self::Shell => shell_quote(value),
        }
    }
}

/// Accumulates the command's tokens in emission order.
struct CommandBuilder {
    style: QuoteStyle,
    tokens: Vec<String>,
}

impl CommandBuilder {
    fn new(style: QuoteStyle) -> Self {
        Self {
            style,
            tokens: vec![PROGRAM.to_string(), MODE.to_string()],
        }
    }

    fn flag(&mut self, flag: &str) {
        self.tokens.push(flag.to_string());
    }

    fn option(&mut self, flag: &str, value: &str) {
        self.flag(flag);
        self.tokens.push(self.style.value(value).into_owned());
    }

    fn option_if_set(&mut self, flag: &str, value: &str) {
        if !value.is_empty() {
            self.option(flag, value);
        }
    }

    fn text_option(&mut self, flag: &str, value: &str) {
        self.flag(flag);
        self.tokens.push(self.style.text(value).into_owned());
    }

    fn switches(&mut self, options: &OptionSet, flags: &[Flag]) {
        for flag in flags {
            if options.is_set(*flag) {
                self.flag(flag.token());
            }
        }
    }

    fn finish(self) -> Vec<String> {
        self.tokens
    }
}

/// Non-empty, trimmed header lines of `raw`, in input order.
pub fn header_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// Render `options` to a token list.
///
/// Every flag and every value is a separate token; joining them with single
/// spaces gives the command string.
///
/// # Errors
///
/// - [`CompileError::MissingTarget`] if `options.target` is empty
/// - [`CompileError::MissingWordlist`] if no wordlist path is set
pub fn tokens(
    options: &OptionSet,
    style: QuoteStyle,
) -> Result<Vec<String>, CompileError> {
    if options.target.is_empty() {
        return Err(CompileError::MissingTarget);
    }
    let Some(wordlist) = options.effective_wordlist() else {
        return Err(CompileError::MissingWordlist);
    };

    if !THREADS_RANGE.contains(&options.threads) {
        warn!(threads = options.threads, "thread count outside the usual range");
    }
    if !TIMEOUT_RANGE.contains(&options.timeout_seconds) {
        warn!(
            timeout = options.timeout_seconds,
            "timeout outside the usual range"
        );
    }

    let mut cmd = CommandBuilder::new(style);

    cmd.option("-u", &options.target);
    cmd.option("-w", wordlist);
    cmd.option_if_set("-x", &options.extensions);

    cmd.option("-t", &options.threads.to_string());
    cmd.option("--timeout", &format!("{}s", options.timeout_seconds));

    cmd.option_if_set("-s", &options.show_status_codes);
    cmd.option_if_set("-b", &options.hide_status_codes);

    cmd.switches(options, &OUTPUT_FLAGS);
    cmd.option_if_set("-o", &options.output_file);
    cmd.switches(options, &NETWORK_FLAGS);

    if !options.user_agent.is_empty() {
        cmd.text_option("-a", &options.user_agent);
    }
    for header in header_lines(&options.custom_headers) {
        cmd.text_option("-H", header);
    }
    cmd.option_if_set("--proxy", &options.proxy);

    let tokens = cmd.finish();
    debug!(tokens = tokens.len(), ?style, "compiled gobuster command");

    Ok(tokens)
}

/// Compile `options` using `style` for values.
///
/// # Errors
///
/// See [`tokens`].
pub fn compile_with(
    options: &OptionSet,
    style: QuoteStyle,
) -> Result<String, CompileError> {
    tokens(options, style).map(|tokens| tokens.join(" "))
}

/// Compile `options` into a shell-safe `gobuster dir` command.
///
/// # Errors
///
/// See [`tokens`].
///
/// # Examples
///
/// ```
/// # use gobuster_cmd::{compiler::compile, config::OptionSet};
/// let options = OptionSet::new("http://example.com").with_wordlist("/tmp/words.txt");
/// assert_eq!(
///     compile(&options).unwrap(),
///     "gobuster dir -u http://example.com -w /tmp/words.txt -t 10 --timeout 10s \
///      -s 200,204,301,302,307,401,403 -b 404"
/// );
/// ```
pub fn compile(options: &OptionSet) -> Result<String, CompileError> {
    compile_with(options, QuoteStyle::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> OptionSet {
        OptionSet::new("http://example.com")
            .with_wordlist("/usr/share/wordlists/dirb/common.txt")
    }

    fn count(tokens: &[String], token: &str) -> usize {
        tokens.iter().filter(|t| *t == token).count()
    }

    #[test]
    fn test_missing_target_wins_over_everything() {
        let options = OptionSet::default()
            .with_wordlist("w")
            .with_flag(Flag::Quiet)
            .with_proxy("http://proxy:8080");

        assert_eq!(compile(&options), Err(CompileError::MissingTarget));
        assert_eq!(
            compile(&OptionSet::default()),
            Err(CompileError::MissingTarget)
        );
    }

    #[test]
    fn test_missing_wordlist() {
        let options = OptionSet::new("http://example.com");
        assert_eq!(compile(&options), Err(CompileError::MissingWordlist));
    }

    #[test]
    fn test_custom_wordlist_overrides_predefined() {
        let options = OptionSet::new("t")
            .with_wordlist("w1")
            .with_custom_wordlist("w2");
        let command = compile(&options).unwrap();

        assert!(command.contains("-w w2"));
        assert!(!command.contains("w1"));
    }

    #[test]
    fn test_custom_wordlist_alone_is_enough() {
        let options = OptionSet::new("t").with_custom_wordlist("/tmp/mine.txt");
        assert!(compile(&options).unwrap().contains("-w /tmp/mine.txt"));
    }

    #[test]
    fn test_default_command() {
        assert_eq!(
            compile(&ready()).unwrap(),
            "gobuster dir -u http://example.com -w /usr/share/wordlists/dirb/common.txt \
             -t 10 --timeout 10s -s 200,204,301,302,307,401,403 -b 404"
        );
    }

    #[test]
    fn test_full_command_order_display_style() {
        let options = ready()
            .with_extensions("php,html,txt")
            .with_threads(50)
            .with_timeout(5)
            .with_flag(Flag::SkipSsl)
            .with_flag(Flag::ShowFullUrl)
            .with_flag(Flag::FollowRedirects)
            .with_flag(Flag::NoProgress)
            .with_flag(Flag::Quiet)
            .with_output_file("results.txt")
            .with_user_agent("Mozilla/5.0")
            .with_headers("X-API-Key: abc\nAuthorization: Bearer t")
            .with_proxy("http://proxy:8080");

        assert_eq!(
            compile_with(&options, QuoteStyle::Display).unwrap(),
            "gobuster dir -u http://example.com -w /usr/share/wordlists/dirb/common.txt \
             -x php,html,txt -t 50 --timeout 5s -s 200,204,301,302,307,401,403 -b 404 \
             -e -q -z -o results.txt -r -k -a \"Mozilla/5.0\" -H \"X-API-Key: abc\" \
             -H \"Authorization: Bearer t\" --proxy http://proxy:8080"
        );
    }

    #[test]
    fn test_empty_status_codes_are_skipped() {
        let options = ready().with_status_codes("", "");
        let tokens = tokens(&options, QuoteStyle::Shell).unwrap();

        assert_eq!(count(&tokens, "-s"), 0);
        assert_eq!(count(&tokens, "-b"), 0);
    }

    #[test]
    fn test_threads_and_timeout_always_present() {
        let tokens = tokens(&ready(), QuoteStyle::Shell).unwrap();

        assert_eq!(count(&tokens, "-t"), 1);
        assert_eq!(count(&tokens, "--timeout"), 1);
        assert!(tokens.contains(&"10s".to_string()));
    }

    #[test]
    fn test_out_of_range_numbers_pass_through() {
        let options = ready().with_threads(-3).with_timeout(0);
        let command = compile(&options).unwrap();

        assert!(command.contains("-t -3"));
        assert!(command.contains("--timeout 0s"));
    }

    #[test]
    fn test_each_flag_adds_exactly_one_token() {
        let base = tokens(&ready(), QuoteStyle::Shell).unwrap();

        for flag in Flag::ALL {
            let with_flag =
                tokens(&ready().with_flag(flag), QuoteStyle::Shell).unwrap();

            assert_eq!(with_flag.len(), base.len() + 1, "{flag}");
            assert_eq!(count(&with_flag, flag.token()), 1);

            let without: Vec<String> = with_flag
                .iter()
                .filter(|t| *t != flag.token())
                .cloned()
                .collect();
            assert_eq!(without, base);
        }
    }

    #[test]
    fn test_header_splitting() {
        let options = ready().with_headers("A: 1\n\n  B: 2  \n");
        let tokens = tokens(&options, QuoteStyle::Display).unwrap();

        assert_eq!(count(&tokens, "-H"), 2);
        assert!(tokens.contains(&"\"A: 1\"".to_string()));
        assert!(tokens.contains(&"\"B: 2\"".to_string()));
    }

    #[test]
    fn test_whitespace_only_headers_emit_nothing() {
        let options = ready().with_headers(" \n\t\n");
        let tokens = tokens(&options, QuoteStyle::Shell).unwrap();

        assert_eq!(count(&tokens, "-H"), 0);
    }

    #[test]
    fn test_header_lines_helper() {
        let lines: Vec<&str> = header_lines("  X: 1\r\n\nY: 2").collect();
        assert_eq!(lines, vec!["X: 1", "Y: 2"]);
    }

    #[test]
    fn test_shell_style_quotes_values() {
        let options = OptionSet::new("http://example.com/?q=1&x=2")
            .with_custom_wordlist("/tmp/my words.txt")
            .with_user_agent("Mozilla/5.0 (X11; Linux)")
            .with_headers("Cookie: a=b; c=d")
            .with_output_file("out.txt");

        let command = compile(&options).unwrap();

        assert!(command.contains("-u 'http://example.com/?q=1&x=2'"));
        assert!(command.contains("-w '/tmp/my words.txt'"));
        assert!(command.contains("-a 'Mozilla/5.0 (X11; Linux)'"));
        assert!(command.contains("-H 'Cookie: a=b; c=d'"));
        assert!(command.contains("-o out.txt"));
    }

    #[test]
    fn test_display_style_is_raw() {
        let options = OptionSet::new("http://x/?a=1&b=2")
            .with_wordlist("w")
            .with_user_agent("it's me");

        let command = compile_with(&options, QuoteStyle::Display).unwrap();

        assert!(command.contains("-u http://x/?a=1&b=2"));
        assert!(command.contains("-a \"it's me\""));
    }

    #[test]
    fn test_compile_is_idempotent() {
        let options = ready()
            .with_headers("A: 1\nB: 2")
            .with_flag(Flag::Quiet)
            .with_user_agent("ua");

        assert_eq!(compile(&options), compile(&options));
        assert_eq!(
            tokens(&options, QuoteStyle::Display),
            tokens(&options, QuoteStyle::Display)
        );
    }

    #[test]
    fn test_compile_error_reason_and_display() {
        assert_eq!(CompileError::MissingTarget.reason(), "missing_target");
        assert_eq!(CompileError::MissingWordlist.reason(), "missing_wordlist");
        assert_eq!(
            CompileError::MissingTarget.to_string(),
            "a target URL is required"
        );
        assert_eq!(
            serde_json::to_string(&CompileError::MissingWordlist).unwrap(),
            "\"missing_wordlist\""
        );
    }
}
