use crate::adapters::outbound::formatters::{JsonResultFormatter, TextResultFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ResultFormatter;

/// Factory for creating result formatters
///
/// Selects the formatter adapter matching the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use orbithub_portal::application::dto::OutputFormat;
    /// use orbithub_portal::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn ResultFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextResultFormatter::new(color)),
            OutputFormat::Json => Box::new(JsonResultFormatter::new()),
        }
    }
}
