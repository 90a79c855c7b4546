use crate::application::dto::{FormOptions, SubmissionOutcome, SubmissionPayload};
use crate::portal::domain::{Classification, Language, RequestDraft, Satellite, SelectionSet};
use crate::portal::i18n::{self, Dictionary};
use crate::portal::services::CatalogQuery;
use crate::ports::outbound::{GatewayResponse, Notifier, RequestGateway, SatelliteCatalog};
use crate::shared::Result;
use tracing::{debug, error, info};

/// FormController - state holder of the request portal
///
/// Owns the request draft, the last catalog results, the selection made
/// from them and the active language, and mediates the two network
/// operations (filter and submit). Every operation takes `&mut self`, so a
/// controller never has more than one request in flight and its state is
/// whatever the last completed operation left behind.
///
/// # Type Parameters
/// * `C` - SatelliteCatalog implementation
/// * `G` - RequestGateway implementation
/// * `N` - Notifier implementation
pub struct FormController<C, G, N> {
    catalog: C,
    gateway: G,
    notifier: N,
    language: Language,
    draft: RequestDraft,
    selection: SelectionSet,
    results: Vec<Satellite>,
}

impl<C, G, N> FormController<C, G, N>
where
    C: SatelliteCatalog,
    G: RequestGateway,
    N: Notifier,
{
    /// Creates a controller with an empty draft
    pub fn new(catalog: C, gateway: G, notifier: N, language: Language) -> Self {
        Self {
            catalog,
            gateway,
            notifier,
            language,
            draft: RequestDraft::default(),
            selection: SelectionSet::new(),
            results: Vec::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Labels of the active language
    pub fn dictionary(&self) -> &'static Dictionary {
        i18n::dictionary(self.language)
    }

    /// Switches the interface language
    ///
    /// Only labels and option ordering change; the draft keeps its values,
    /// including the canonical classification.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            debug!(from = %self.language, to = %language, "switching interface language");
            self.language = language;
        }
    }

    pub fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RequestDraft {
        &mut self.draft
    }

    /// Satellites returned by the last filter
    pub fn results(&self) -> &[Satellite] {
        &self.results
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn purpose_options(&self) -> Vec<&'static str> {
        i18n::purpose_options(self.language)
    }

    pub fn sector_options(&self) -> Vec<&'static str> {
        i18n::sector_options(self.language)
    }

    pub fn country_options(&self) -> Vec<&'static str> {
        i18n::country_options()
    }

    /// Classification choices with labels in the active language
    pub fn classification_options(&self) -> Vec<(Classification, &'static str)> {
        Classification::ALL
            .iter()
            .map(|class| (*class, class.option_label(self.language)))
            .collect()
    }

    /// All choice lists in the active language
    pub fn options(&self) -> FormOptions {
        let owned = |list: Vec<&'static str>| -> Vec<String> {
            list.into_iter().map(str::to_string).collect()
        };
        FormOptions {
            language: self.language,
            sectors: owned(self.sector_options()),
            purposes: owned(self.purpose_options()),
            other_purpose: self.dictionary().other_label.to_string(),
            classifications: FormOptions::classification_options(self.language).collect(),
            deliveries: FormOptions::delivery_options(),
            countries: owned(self.country_options()),
        }
    }

    /// Purpose that filter and submit will send
    pub fn effective_purpose(&self) -> &str {
        self.draft.effective_purpose(self.dictionary().other_label)
    }

    /// Whether the free-text purpose field applies
    pub fn shows_other_purpose(&self) -> bool {
        self.draft.wants_other_purpose(self.dictionary().other_label)
    }

    /// Catalog criteria derived from the current draft
    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery::new(
            self.draft.classification,
            self.effective_purpose(),
            self.draft.delivery,
        )
    }

    /// Queries the catalog and replaces the result list
    ///
    /// The selection is cleared on success. Failures are returned to the
    /// caller untouched; no alert is shown and state is left as it was.
    pub async fn filter(&mut self) -> Result<&[Satellite]> {
        let query = self.catalog_query();
        debug!(query = %query.to_query_string(), "filtering satellites");

        self.notifier.begin(self.dictionary().filtering);
        let outcome = self.catalog.search(&query).await;
        self.notifier.end();

        self.results = outcome?;
        self.selection.clear();
        info!(count = self.results.len(), "catalog returned satellites");
        Ok(&self.results)
    }

    /// Adds or removes a satellite from the selection
    ///
    /// Returns `true` when the satellite ends up selected.
    pub fn toggle_satellite(&mut self, satellite: &Satellite) -> bool {
        let selected = self.selection.toggle(satellite);
        debug!(satellite = satellite.display_name(), selected, "toggled satellite");
        selected
    }

    /// Selects a satellite from the current results by name
    ///
    /// Already-selected satellites stay selected. Returns `false` when no
    /// result carries that name.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        let Some(satellite) = self
            .results
            .iter()
            .find(|s| s.identity() == Some(name))
            .cloned()
        else {
            return false;
        };
        if !self.selection.contains(&satellite) {
            self.toggle_satellite(&satellite);
        }
        true
    }

    /// Payload that [`FormController::submit`] would post
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::from_draft(
            &self.draft,
            self.dictionary().other_label,
            self.language,
            &self.selection,
        )
    }

    /// Posts the request once
    ///
    /// On acceptance a localized confirmation is shown and draft, selection
    /// and results are reset. Otherwise a localized error is shown, the
    /// server error (or transport error) is logged, and all state is kept
    /// for correction.
    pub async fn submit(&mut self) -> SubmissionOutcome {
        let payload = self.payload();
        let dictionary = self.dictionary();
        debug!(
            purpose = %payload.purpose,
            selected = payload.selected_satellites.len(),
            "submitting request"
        );

        self.notifier.begin(dictionary.submitting);
        let response = self.gateway.submit(&payload).await;
        self.notifier.end();

        match response {
            Ok(GatewayResponse::Accepted) => {
                info!("request accepted");
                self.notifier.alert(dictionary.submit_ok);
                self.reset();
                SubmissionOutcome::Accepted
            }
            Ok(GatewayResponse::Rejected { status, error }) => {
                error!(status, error = ?error, "error submitting request");
                self.notifier.alert_error(dictionary.submit_rejected);
                SubmissionOutcome::Rejected { status, error }
            }
            Err(e) => {
                error!(error = %format!("{:#}", e), "network error");
                self.notifier.alert_error(dictionary.submit_connection_error);
                SubmissionOutcome::ConnectionFailed {
                    reason: format!("{:#}", e),
                }
            }
        }
    }

    /// Restores the initial draft and empties selection and results
    pub fn reset(&mut self) {
        self.draft = RequestDraft::default();
        self.selection.clear();
        self.results.clear();
    }
}
