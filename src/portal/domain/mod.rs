pub mod classification;
pub mod language;
pub mod request_draft;
pub mod satellite;
pub mod selection;

pub use classification::{badge_for, BadgeTier, Classification};
pub use language::Language;
pub use request_draft::{Delivery, RequestDraft};
pub use satellite::Satellite;
pub use selection::SelectionSet;
