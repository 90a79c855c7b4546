use crate::application::dto::FormOptions;
use crate::portal::domain::{Language, Satellite, SelectionSet};
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;

/// JsonResultFormatter adapter emitting the catalog records as JSON
///
/// Records are written exactly as the catalog returned them, so the output
/// can be piped into other tools. Labels are not translated.
pub struct JsonResultFormatter;

impl JsonResultFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonResultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonResultFormatter {
    fn format(
        &self,
        results: &[Satellite],
        _selection: &SelectionSet,
        _language: Language,
    ) -> Result<String> {
        let mut json = serde_json::to_string_pretty(results)?;
        json.push('\n');
        Ok(json)
    }

    fn format_options(&self, options: &FormOptions) -> Result<String> {
        let mut json = serde_json::to_string_pretty(options)?;
        json.push('\n');
        Ok(json)
    }
}
