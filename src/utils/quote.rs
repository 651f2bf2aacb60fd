//! POSIX shell quoting for command values.

use std::borrow::Cow;

/// Characters that never need quoting in a POSIX shell word.
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-'
        )
}

/// Quote `value` so a POSIX shell reads it back as a single word.
///
/// Values made only of safe characters are returned untouched. Everything
/// else, including the empty string, is wrapped in single quotes with each
/// embedded `'` written as `'\''`.
///
/// # Examples
///
/// ```
/// # use gobuster_cmd::utils::shell_quote;
/// assert_eq!(shell_quote("http://example.com"), "http://example.com");
/// assert_eq!(shell_quote("X-Token: a b"), "'X-Token: a b'");
/// ```
#[must_use]
pub fn shell_quote(value: &str) -> Cow<'_, str> {
    if !value.is_empty() && value.chars().all(is_shell_safe) {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');

    Cow::Owned(quoted)
}
