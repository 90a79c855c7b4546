use crate::portal::domain::Satellite;
use crate::portal::services::CatalogQuery;
use crate::shared::Result;
use async_trait::async_trait;

/// SatelliteCatalog port for searching the remote satellite catalog
///
/// This port abstracts the portal API endpoint that returns satellites
/// ranked by sustainability classification.
#[async_trait]
pub trait SatelliteCatalog: Send + Sync {
    /// Searches the catalog with the given criteria
    ///
    /// # Arguments
    /// * `query` - Search criteria; empty criteria are not sent
    ///
    /// # Returns
    /// The satellites returned by the catalog, in server order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The API returns a non-success status code
    /// - The response is not a JSON array of satellite records
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Satellite>>;
}
