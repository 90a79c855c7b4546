pub mod catalog_query;
pub mod collation;

pub use catalog_query::{CatalogQuery, RESULT_LIMIT};
pub use collation::{locale_cmp, sort_localized};
