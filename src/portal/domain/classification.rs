use super::Language;
use crate::shared::error::PortalError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Sustainability classification assigned to a satellite by the portal
///
/// The canonical value is the one the portal stores and filters on; it is
/// the same regardless of the interface language. Only the labels returned
/// by [`Classification::option_label`] and [`Classification::badge_label`]
/// change with the active [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Gold,
    Silver,
    Bronze,
    Pending,
}

/// Visual tier used when rendering a classification badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTier {
    Gold,
    Silver,
    Bronze,
}

impl Classification {
    /// All classifications in the order they are offered for selection
    pub const ALL: [Classification; 4] = [
        Classification::Gold,
        Classification::Silver,
        Classification::Bronze,
        Classification::Pending,
    ];

    /// Language-independent value exchanged with the portal API
    pub fn canonical(self) -> &'static str {
        match self {
            Classification::Gold => "OURO",
            Classification::Silver => "PRATA",
            Classification::Bronze => "BRONZE",
            Classification::Pending => "PENDENTE DE CLASSIFICAÇÃO",
        }
    }

    /// Label shown in the classification selector
    pub fn option_label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Pt, c) => c.canonical(),
            (Language::En, Classification::Gold) => "GOLD",
            (Language::En, Classification::Silver) => "SILVER",
            (Language::En, Classification::Bronze) => "BRONZE",
            (Language::En, Classification::Pending) => "PENDING",
        }
    }

    /// Label shown on a satellite result badge
    pub fn badge_label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Classification::Pending) => "PENDING CLASSIFICATION",
            (language, c) => c.option_label(language),
        }
    }

    /// Pending satellites share the silver styling
    pub fn tier(self) -> BadgeTier {
        match self {
            Classification::Gold => BadgeTier::Gold,
            Classification::Silver | Classification::Pending => BadgeTier::Silver,
            Classification::Bronze => BadgeTier::Bronze,
        }
    }

    /// Recognises a server-provided label in either language
    ///
    /// Returns `None` for labels outside the closed set; callers display
    /// those verbatim.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "OURO" | "GOLD" => Some(Classification::Gold),
            "PRATA" | "SILVER" => Some(Classification::Silver),
            "BRONZE" => Some(Classification::Bronze),
            "PENDENTE DE CLASSIFICAÇÃO" | "PENDING" | "PENDING CLASSIFICATION" => {
                Some(Classification::Pending)
            }
            _ => None,
        }
    }
}

/// Display label and tier for an arbitrary server label
///
/// Unrecognised labels are upper-cased and rendered with the bronze tier.
pub fn badge_for(label: &str, language: Language) -> (String, BadgeTier) {
    match Classification::from_label(label) {
        Some(class) => (class.badge_label(language).to_string(), class.tier()),
        None => (label.to_uppercase(), BadgeTier::Bronze),
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical())
    }
}

impl FromStr for Classification {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::from_label(s).ok_or_else(|| PortalError::UnknownClassification {
            value: s.to_string(),
        })
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical())
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
