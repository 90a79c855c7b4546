/// Data Transfer Objects for the application layer
///
/// DTOs carry data between the form controller and the adapters,
/// keeping wire shapes out of the portal domain.
mod form_options;
mod output_format;
mod submission_outcome;
mod submission_payload;

pub use form_options::{FormOptions, LabeledOption};
pub use output_format::OutputFormat;
pub use submission_outcome::SubmissionOutcome;
pub use submission_payload::SubmissionPayload;
