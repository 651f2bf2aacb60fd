//! Interactive completion of missing required options.

use std::fmt::{Display, Formatter, Result as FmtResult};

use anyhow::Result;
use inquire::{Select, Text, required};

use crate::config::OptionSet;
use crate::wordlist::WordlistPreset;

/// One entry of the wordlist picker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum WordlistChoice {
    Preset(WordlistPreset),
    Custom,
}

impl Display for WordlistChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Preset(preset) => write!(f, "{preset}"),
            Self::Custom => write!(f, "Custom path..."),
        }
    }
}

fn wordlist_choices() -> Vec<WordlistChoice> {
    WordlistPreset::all()
        .iter()
        .copied()
        .map(WordlistChoice::Preset)
        .chain(std::iter::once(WordlistChoice::Custom))
        .collect()
}

/// Ask for the target and wordlist if `options` lacks them.
///
/// Fields that are already set are left untouched, so this is a no-op for a
/// complete option set.
///
/// # Errors
///
/// Returns an error if a prompt fails or the user cancels it.
pub fn fill_missing(mut options: OptionSet) -> Result<OptionSet> {
    if options.target.is_empty() {
        options.target = Text::new("Target URL:")
            .with_placeholder("http://example.com")
            .with_validator(required!("A target is required"))
            .prompt()?
            .trim()
            .to_string();
    }

    if options.effective_wordlist().is_none() {
        match Select::new("Wordlist:", wordlist_choices()).prompt()? {
            WordlistChoice::Preset(preset) => {
                options.wordlist_path = preset.path().to_string();
            }
            WordlistChoice::Custom => {
                options.custom_wordlist_path = Text::new("Wordlist path:")
                    .with_placeholder("/path/to/wordlist.txt")
                    .with_validator(required!("A wordlist path is required"))
                    .prompt()?
                    .trim()
                    .to_string();
            }
        }
    }

    Ok(options)
}
