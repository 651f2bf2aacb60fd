//! Catalog of well-known wordlists.
//!
//! These are the paths shipped by Kali's `wordlists`, `dirb`, `dirbuster` and
//! `seclists` packages. Picking a preset only fills in
//! [`OptionSet::wordlist_path`](crate::config::OptionSet::wordlist_path); the
//! compiler treats it as any other string.

use std::fmt::{Display, Formatter, Result};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Family a preset wordlist belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WordlistGroup {
    Dirb,
    Dirbuster,
    SecLists,
}

impl Display for WordlistGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Self::Dirb => "Dirb",
            Self::Dirbuster => "Dirbuster",
            Self::SecLists => "SecLists",
        };

        write!(f, "{name}")
    }
}

/// A predefined wordlist.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WordlistPreset {
    #[default]
    DirbCommon,
    DirbSmall,
    DirbusterSmall,
    DirbusterMedium,
    DirbusterLarge,
    SeclistsCommon,
    SeclistsBig,
    SeclistsMedium,
    SeclistsCgi,
    SeclistsAdminPanels,
    SeclistsExtensions,
    ApiEndpoints,
    Joomla,
    Wordpress,
}

impl WordlistPreset {
    /// Every preset, in picker order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DirbCommon,
            Self::DirbSmall,
            Self::DirbusterSmall,
            Self::DirbusterMedium,
            Self::DirbusterLarge,
            Self::SeclistsCommon,
            Self::SeclistsMedium,
            Self::SeclistsBig,
            Self::SeclistsCgi,
            Self::SeclistsAdminPanels,
            Self::SeclistsExtensions,
            Self::ApiEndpoints,
            Self::Wordpress,
            Self::Joomla,
        ]
    }

    /// Filesystem path of the wordlist.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::DirbCommon => "/usr/share/wordlists/dirb/common.txt",
            Self::DirbSmall => "/usr/share/wordlists/dirb/small.txt",
            Self::DirbusterSmall => "/usr/share/wordlists/dirbuster/directory-list-1.0.txt",
            Self::DirbusterMedium => {
                "/usr/share/wordlists/dirbuster/directory-list-2.3-medium.txt"
            }
            Self::DirbusterLarge => "/usr/share/wordlists/dirbuster/directory-list-2.3-big.txt",
            Self::SeclistsCommon => "/usr/share/seclists/Discovery/Web-Content/common.txt",
            Self::SeclistsBig => "/usr/share/seclists/Discovery/Web-Content/big.txt",
            Self::SeclistsMedium => "/usr/share/seclists/Discovery/Web-Content/medium.txt",
            Self::SeclistsCgi => "/usr/share/seclists/Discovery/Web-Content/CGIs.txt",
            Self::SeclistsAdminPanels => {
                "/usr/share/seclists/Discovery/Web-Content/admin-panels.txt"
            }
            Self::SeclistsExtensions => {
                "/usr/share/seclists/Discovery/Web-Content/extensions-common.txt"
            }
            Self::ApiEndpoints => {
                "/usr/share/seclists/Discovery/Web-Content/api/api-endpoints.txt"
            }
            Self::Joomla => "/usr/share/seclists/Discovery/Web-Content/CMS/joomla.txt",
            Self::Wordpress => "/usr/share/seclists/Discovery/Web-Content/CMS/wordpress.txt",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DirbCommon => "Dirb Common",
            Self::DirbSmall => "Dirb Small",
            Self::DirbusterSmall => "Dirbuster Small",
            Self::DirbusterMedium => "Dirbuster Medium",
            Self::DirbusterLarge => "Dirbuster Large",
            Self::SeclistsCommon => "SecLists Common",
            Self::SeclistsBig => "SecLists Big",
            Self::SeclistsMedium => "SecLists Medium",
            Self::SeclistsCgi => "CGIs List",
            Self::SeclistsAdminPanels => "Admin Panels",
            Self::SeclistsExtensions => "Common Extensions",
            Self::ApiEndpoints => "API Endpoints",
            Self::Joomla => "Joomla",
            Self::Wordpress => "WordPress",
        }
    }

    #[must_use]
    pub const fn group(self) -> WordlistGroup {
        match self {
            Self::DirbCommon | Self::DirbSmall => WordlistGroup::Dirb,
            Self::DirbusterSmall | Self::DirbusterMedium | Self::DirbusterLarge => {
                WordlistGroup::Dirbuster
            }
            _ => WordlistGroup::SecLists,
        }
    }

    /// Look up the preset whose path is exactly `path`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.path() == path)
    }
}

impl Display for WordlistPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.label(), self.group())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_is_dirb_common() {
        assert_eq!(WordlistPreset::default(), WordlistPreset::DirbCommon);
        assert_eq!(
            WordlistPreset::default().path(),
            "/usr/share/wordlists/dirb/common.txt"
        );
    }

    #[test]
    fn test_all_presets_listed_once() {
        let all = WordlistPreset::all();
        assert_eq!(all.len(), WordlistPreset::value_variants().len());

        for preset in WordlistPreset::value_variants() {
            assert_eq!(all.iter().filter(|p| *p == preset).count(), 1);
        }
    }

    #[test]
    fn test_paths_are_absolute_and_unique() {
        let all = WordlistPreset::all();
        for preset in all {
            assert!(preset.path().starts_with("/usr/share/"));
            assert!(preset.path().ends_with(".txt"));
            assert_eq!(
                all.iter().filter(|p| p.path() == preset.path()).count(),
                1
            );
        }
    }

    #[test]
    fn test_groups() {
        assert_eq!(WordlistPreset::DirbSmall.group(), WordlistGroup::Dirb);
        assert_eq!(
            WordlistPreset::DirbusterLarge.group(),
            WordlistGroup::Dirbuster
        );
        assert_eq!(WordlistPreset::Wordpress.group(), WordlistGroup::SecLists);
        assert_eq!(WordlistPreset::ApiEndpoints.group(), WordlistGroup::SecLists);
    }

    #[test]
    fn test_from_path_roundtrip() {
        for preset in WordlistPreset::all() {
            assert_eq!(WordlistPreset::from_path(preset.path()), Some(*preset));
        }
        assert_eq!(WordlistPreset::from_path("/tmp/mine.txt"), None);
    }

    #[test]
    fn test_display_includes_group() {
        assert_eq!(
            WordlistPreset::SeclistsCgi.to_string(),
            "CGIs List (SecLists)"
        );
    }

    #[test]
    fn test_value_enum_names() {
        let preset = WordlistPreset::from_str("seclists-admin-panels", false).unwrap();
        assert_eq!(preset, WordlistPreset::SeclistsAdminPanels);
    }
}
