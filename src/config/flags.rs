//! Boolean switches of the generated command.
//!
//! Each [`Flag`] maps to one bare gobuster token. The declaration order of the
//! variants is the order in which the compiler emits them within each group.

use std::fmt::{Display, Formatter, Result};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A boolean switch that turns into a single bare token when set.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// Print full URLs instead of paths (`-e`)
    ShowFullUrl,

    /// Don't print the banner and other noise (`-q`)
    Quiet,

    /// Don't display progress (`-z`)
    NoProgress,

    /// Follow redirects (`-r`)
    FollowRedirects,

    /// Skip TLS certificate verification (`-k`)
    SkipSsl,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::ShowFullUrl,
        Self::Quiet,
        Self::NoProgress,
        Self::FollowRedirects,
        Self::SkipSsl,
    ];

    /// The gobuster token emitted for this flag.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::ShowFullUrl => "-e",
            Self::Quiet => "-q",
            Self::NoProgress => "-z",
            Self::FollowRedirects => "-r",
            Self::SkipSsl => "-k",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Self::ShowFullUrl => "show full URLs",
            Self::Quiet => "quiet",
            Self::NoProgress => "no progress",
            Self::FollowRedirects => "follow redirects",
            Self::SkipSsl => "skip SSL verification",
        };

        write!(f, "{name}")
    }
}

/// A set of [`Flag`]s.
///
/// Iteration always follows [`Flag::ALL`] order, regardless of insertion order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FlagSet(u8);

impl FlagSet {
    /// An empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    pub fn remove(&mut self, flag: Flag) {
        self.0 &= !flag.bit();
    }

    /// Insert or remove `flag` depending on `enabled`.
    pub fn set(&mut self, flag: Flag, enabled: bool) {
        if enabled {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    /// Builder-style [`FlagSet::insert`].
    #[must_use]
    pub fn with(mut self, flag: Flag) -> Self {
        self.insert(flag);
        self
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The flags contained in the set, in emission order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |flag| self.contains(*flag))
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut set = Self::new();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

// Serialized as a list of flag names so config snapshots stay readable.
impl Serialize for FlagSet {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for FlagSet {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let flags = Vec::<Flag>::deserialize(deserializer)?;
        Ok(flags.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_tokens() {
        assert_eq!(Flag::ShowFullUrl.token(), "-e");
        assert_eq!(Flag::Quiet.token(), "-q");
        assert_eq!(Flag::NoProgress.token(), "-z");
        assert_eq!(Flag::FollowRedirects.token(), "-r");
        assert_eq!(Flag::SkipSsl.token(), "-k");
    }

    #[test]
    fn test_flag_set_default_is_empty() {
        let set = FlagSet::default();

        assert!(set.is_empty());
        for flag in Flag::ALL {
            assert!(!set.contains(flag));
        }
    }

    #[test]
    fn test_flag_set_insert_and_remove() {
        let mut set = FlagSet::new();
        set.insert(Flag::Quiet);
        set.insert(Flag::SkipSsl);

        assert!(set.contains(Flag::Quiet));
        assert!(set.contains(Flag::SkipSsl));
        assert!(!set.contains(Flag::NoProgress));

        set.remove(Flag::Quiet);
        assert!(!set.contains(Flag::Quiet));
        assert!(set.contains(Flag::SkipSsl));
    }

    #[test]
    fn test_flag_set_set_toggles() {
        let mut set = FlagSet::new();
        set.set(Flag::FollowRedirects, true);
        assert!(set.contains(Flag::FollowRedirects));

        set.set(Flag::FollowRedirects, false);
        assert!(set.is_empty());
    }

    #[test]
    fn test_flag_set_iterates_in_declaration_order() {
        let set: FlagSet = [Flag::SkipSsl, Flag::ShowFullUrl, Flag::NoProgress]
            .into_iter()
            .collect();

        let order: Vec<Flag> = set.iter().collect();
        assert_eq!(
            order,
            vec![Flag::ShowFullUrl, Flag::NoProgress, Flag::SkipSsl]
        );
    }

    #[test]
    fn test_flag_set_serde_as_names() {
        let set = FlagSet::new().with(Flag::Quiet).with(Flag::SkipSsl);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["quiet","skip_ssl"]"#);

        let parsed: FlagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
