use crate::portal::domain::{Classification, Delivery, Language};
use serde::Serialize;

/// A selectable value with its label in the active language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledOption {
    pub value: String,
    pub label: String,
}

/// Every choice list of the request form, localized and ordered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub language: Language,
    pub sectors: Vec<String>,
    pub purposes: Vec<String>,
    /// Purpose that enables the free-text purpose
    pub other_purpose: String,
    pub classifications: Vec<LabeledOption>,
    pub deliveries: Vec<String>,
    pub countries: Vec<String>,
}

impl FormOptions {
    pub fn classification_options(
        language: Language,
    ) -> impl Iterator<Item = LabeledOption> {
        Classification::ALL.into_iter().map(move |class| LabeledOption {
            value: class.canonical().to_string(),
            label: class.option_label(language).to_string(),
        })
    }

    pub fn delivery_options() -> Vec<String> {
        Delivery::ALL.iter().map(|d| d.as_str().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_values_stay_canonical() {
        let en: Vec<_> = FormOptions::classification_options(Language::En).collect();
        let pt: Vec<_> = FormOptions::classification_options(Language::Pt).collect();
        for (a, b) in en.iter().zip(&pt) {
            assert_eq!(a.value, b.value);
        }
        assert_eq!(en[3].label, "PENDING");
        assert_eq!(pt[3].label, "PENDENTE DE CLASSIFICAÇÃO");
    }

    #[test]
    fn test_delivery_options() {
        assert_eq!(FormOptions::delivery_options(), ["API", "Batch"]);
    }
}
