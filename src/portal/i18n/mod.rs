/// Label dictionaries and localized option catalogs
pub mod dictionary;
pub mod options;

pub use dictionary::{dictionary, Dictionary};
pub use options::{country_options, purpose_options, sector_options, COUNTRIES};
