use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const UNKNOWN_SATELLITE: &str = "Unknown satellite";

/// Satellite record as returned by the catalog
///
/// The record is server-defined. Known descriptive fields are typed; every
/// other field is kept in `extra` so the record can be sent back unchanged
/// as part of a request's selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Satellite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_of_satellite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_un_registry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_operator_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_class: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Satellite {
    /// Creates a record carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name_of_satellite: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_classification(mut self, label: impl Into<String>) -> Self {
        self.sustainability_class = Some(label.into());
        self
    }

    /// Identity used for selection: the satellite name
    pub fn identity(&self) -> Option<&str> {
        self.name_of_satellite.as_deref()
    }

    /// Name to display, falling back to the raw catalog object name
    pub fn display_name(&self) -> &str {
        self.name_of_satellite
            .as_deref()
            .or_else(|| self.extra_str("OBJECT_NAME"))
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_SATELLITE)
    }

    /// Server-provided classification label, if any
    pub fn classification_label(&self) -> Option<&str> {
        self.sustainability_class
            .as_deref()
            .or_else(|| self.extra_str("SUSTAINABILITY_CLASS"))
    }

    /// Descriptive lines shown under the name, skipping empty fields
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Alt", &self.alternate_names),
            ("UN Registry", &self.country_un_registry),
            ("Country/Operator", &self.country_operator_owner),
            ("Owner", &self.operator_owner),
            ("Purpose", &self.purpose),
            ("Detailed", &self.detailed_purpose),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }

    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}
