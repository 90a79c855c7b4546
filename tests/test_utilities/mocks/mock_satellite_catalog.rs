use async_trait::async_trait;
use orbithub_portal::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SatelliteCatalog for testing
///
/// Returns a fixed list of satellites (or a failure) and records every
/// query it receives as its encoded query string.
#[derive(Default, Clone)]
pub struct MockSatelliteCatalog {
    satellites: Vec<Satellite>,
    should_fail: bool,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MockSatelliteCatalog {
    pub fn new(satellites: Vec<Satellite>) -> Self {
        Self {
            satellites,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn get_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SatelliteCatalog for MockSatelliteCatalog {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Satellite>> {
        self.queries.lock().unwrap().push(query.to_query_string());
        if self.should_fail {
            anyhow::bail!("Mock catalog failure");
        }
        Ok(self.satellites.clone())
    }
}
