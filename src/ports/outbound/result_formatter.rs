use crate::application::dto::FormOptions;
use crate::portal::domain::{Language, Satellite, SelectionSet};
use crate::shared::Result;

/// ResultFormatter port for rendering catalog search results
pub trait ResultFormatter {
    /// Formats the current result list
    ///
    /// # Arguments
    /// * `results` - Satellites from the last catalog search
    /// * `selection` - Satellites currently marked for the request
    /// * `language` - Active interface language for labels and badges
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(
        &self,
        results: &[Satellite],
        selection: &SelectionSet,
        language: Language,
    ) -> Result<String>;

    /// Formats the localized choice lists of the request form
    fn format_options(&self, options: &FormOptions) -> Result<String>;
}
