use crate::portal::domain::{Classification, Delivery};

/// Number of satellites requested per catalog search
pub const RESULT_LIMIT: u32 = 24;

/// Criteria of a satellite catalog search
///
/// Empty criteria are omitted from the query string; `limit` is always sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub classification: Option<Classification>,
    pub purpose: Option<String>,
    pub delivery: Option<Delivery>,
    pub limit: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            classification: None,
            purpose: None,
            delivery: None,
            limit: RESULT_LIMIT,
        }
    }
}

impl CatalogQuery {
    pub fn new(
        classification: Option<Classification>,
        purpose: &str,
        delivery: Option<Delivery>,
    ) -> Self {
        let purpose = purpose.trim();
        Self {
            classification,
            purpose: (!purpose.is_empty()).then(|| purpose.to_string()),
            delivery,
            limit: RESULT_LIMIT,
        }
    }

    /// Query parameters in the order the portal documents them
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(class) = self.classification {
            pairs.push(("classification", class.canonical().to_string()));
        }
        if let Some(purpose) = &self.purpose {
            pairs.push(("purpose", purpose.clone()));
        }
        if let Some(delivery) = self.delivery {
            pairs.push(("delivery", delivery.as_str().to_string()));
        }
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }

    /// URL-encoded query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_only_has_limit() {
        let query = CatalogQuery::new(None, "", None);
        assert_eq!(query, CatalogQuery::default());
        assert_eq!(query.to_pairs(), vec![("limit", "24".to_string())]);
        assert_eq!(query.to_query_string(), "limit=24");
    }

    #[test]
    fn test_blank_purpose_is_omitted() {
        let query = CatalogQuery::new(None, "   ", Some(Delivery::Batch));
        assert_eq!(query.to_query_string(), "delivery=Batch&limit=24");
    }

    #[test]
    fn test_full_query_uses_canonical_classification() {
        let query = CatalogQuery::new(
            Some(Classification::Pending),
            "Earth Observation",
            Some(Delivery::Api),
        );
        assert_eq!(
            query.to_query_string(),
            "classification=PENDENTE%20DE%20CLASSIFICA%C3%87%C3%83O&purpose=Earth%20Observation&delivery=API&limit=24"
        );
    }
}
