use crate::shared::error::PortalError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Interface language of the portal
///
/// Governs which label dictionary is active and how locale-sensitive
/// option lists are ordered. English is the start-up default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// All supported languages in presentation order
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    /// Short tag sent to the portal API in the `language` field
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = PortalError;

    /// Parses a language tag, tolerating case and region suffixes (`pt-BR`, `en_US`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or("");
        match primary {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            _ => Err(PortalError::UnknownLanguage {
                value: s.to_string(),
            }),
        }
    }
}
