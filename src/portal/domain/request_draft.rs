use super::Classification;
use crate::shared::error::PortalError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the requested data is delivered to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Delivery {
    #[default]
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "Batch")]
    Batch,
}

impl Delivery {
    pub const ALL: [Delivery; 2] = [Delivery::Api, Delivery::Batch];

    pub fn as_str(self) -> &'static str {
        match self {
            Delivery::Api => "API",
            Delivery::Batch => "Batch",
        }
    }
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Delivery {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "api" => Ok(Delivery::Api),
            "batch" => Ok(Delivery::Batch),
            _ => Err(PortalError::UnknownDelivery {
                value: s.to_string(),
            }),
        }
    }
}

/// Request being composed by the client before submission
///
/// Lives only in memory: it is created empty, edited field by field and
/// reset to [`RequestDraft::default`] once the portal accepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub name: String,
    pub company_id: String,
    pub address: String,
    pub email: String,
    pub sector: String,
    pub country: String,
    /// Selected purpose option; may be the "Other" sentinel
    pub purpose: String,
    /// Free-text purpose used when `purpose` is the "Other" sentinel
    pub purpose_other: String,
    pub classification: Option<Classification>,
    pub delivery: Option<Delivery>,
    pub description: String,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            company_id: String::new(),
            address: String::new(),
            email: String::new(),
            sector: String::new(),
            country: String::new(),
            purpose: String::new(),
            purpose_other: String::new(),
            classification: None,
            delivery: Some(Delivery::Api),
            description: String::new(),
        }
    }
}

impl RequestDraft {
    /// Resolves the purpose actually sent to the portal
    ///
    /// When `purpose` equals `other_label` the free-text `purpose_other`
    /// wins; otherwise `purpose` is used verbatim.
    pub fn effective_purpose(&self, other_label: &str) -> &str {
        if self.purpose == other_label {
            &self.purpose_other
        } else {
            &self.purpose
        }
    }

    /// Whether `purpose` currently holds the "Other" sentinel
    pub fn wants_other_purpose(&self, other_label: &str) -> bool {
        self.purpose == other_label
    }
}
