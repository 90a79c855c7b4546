/// Formatters for catalog search results
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonResultFormatter;
pub use text_formatter::TextResultFormatter;
