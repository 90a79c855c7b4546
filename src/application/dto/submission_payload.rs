use crate::portal::domain::{Classification, Delivery, Language, RequestDraft, Satellite, SelectionSet};
use serde::Serialize;

/// Wire body posted to `/portal/request`
///
/// Mirrors the draft field by field, with `purpose` already resolved to the
/// effective purpose and the selection embedded as full catalog records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    #[serde(rename = "cnpj")]
    pub company_id: String,
    pub address: String,
    pub email: String,
    pub sector: String,
    pub country: String,
    pub purpose: String,
    #[serde(rename = "purposeOther")]
    pub purpose_other: String,
    pub classification: Option<Classification>,
    /// Always one of the two methods; a draft with no delivery criterion
    /// is sent with the default method
    pub delivery: Delivery,
    pub description: String,
    pub language: Language,
    pub selected_satellites: Vec<Satellite>,
}

impl SubmissionPayload {
    /// Builds the payload from the draft
    ///
    /// # Arguments
    /// * `draft` - Current request draft
    /// * `other_label` - "Other" sentinel of the active language
    /// * `language` - Active interface language
    /// * `selection` - Satellites marked for the request
    pub fn from_draft(
        draft: &RequestDraft,
        other_label: &str,
        language: Language,
        selection: &SelectionSet,
    ) -> Self {
        Self {
            name: draft.name.clone(),
            company_id: draft.company_id.clone(),
            address: draft.address.clone(),
            email: draft.email.clone(),
            sector: draft.sector.clone(),
            country: draft.country.clone(),
            purpose: draft.effective_purpose(other_label).to_string(),
            purpose_other: draft.purpose_other.clone(),
            classification: draft.classification,
            delivery: draft.delivery.unwrap_or_default(),
            description: draft.description.clone(),
            language,
            selected_satellites: selection.as_slice().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let draft = RequestDraft {
            name: "Ana".to_string(),
            company_id: "12.345.678/0001-90".to_string(),
            purpose: "Other".to_string(),
            purpose_other: "Fisheries mapping".to_string(),
            ..Default::default()
        };
        let mut selection = SelectionSet::new();
        selection.toggle(&Satellite::named("Amazonia-1"));

        let payload = SubmissionPayload::from_draft(&draft, "Other", Language::En, &selection);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["cnpj"], json!("12.345.678/0001-90"));
        assert_eq!(value["purpose"], json!("Fisheries mapping"));
        assert_eq!(value["purposeOther"], json!("Fisheries mapping"));
        assert_eq!(value["classification"], json!(null));
        assert_eq!(value["delivery"], json!("API"));
        assert_eq!(value["language"], json!("en"));
        assert_eq!(
            value["selected_satellites"][0]["name_of_satellite"],
            json!("Amazonia-1")
        );
    }

    #[test]
    fn test_classification_sent_as_canonical_value() {
        let draft = RequestDraft {
            classification: Some(Classification::Gold),
            ..Default::default()
        };
        let payload =
            SubmissionPayload::from_draft(&draft, "Outro", Language::Pt, &SelectionSet::new());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["classification"], json!("OURO"));
        assert_eq!(value["language"], json!("pt"));
        assert_eq!(value["selected_satellites"], json!([]));
    }

    #[test]
    fn test_cleared_delivery_is_sent_as_default_method() {
        let draft = RequestDraft {
            delivery: None,
            ..Default::default()
        };
        let payload =
            SubmissionPayload::from_draft(&draft, "Other", Language::En, &SelectionSet::new());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["delivery"], json!("API"));

        let draft = RequestDraft {
            delivery: Some(Delivery::Batch),
            ..Default::default()
        };
        let payload =
            SubmissionPayload::from_draft(&draft, "Other", Language::En, &SelectionSet::new());
        assert_eq!(payload.delivery, Delivery::Batch);
    }
}
