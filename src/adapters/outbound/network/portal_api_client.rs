use crate::application::dto::SubmissionPayload;
use crate::portal::domain::Satellite;
use crate::portal::services::CatalogQuery;
use crate::ports::outbound::{GatewayResponse, RequestGateway, SatelliteCatalog};
use crate::shared::error::PortalError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct HealthStatus {
    status: String,
}

/// PortalApiClient adapter for the OrbitHub portal REST API
///
/// Implements both the SatelliteCatalog and RequestGateway ports against
/// a single base URL. Requests are sent once: there is no retry and no
/// client-side timeout.
#[derive(Debug, Clone)]
pub struct PortalApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PortalApiClient {
    const SATELLITES_PATH: &'static str = "satellites";
    const REQUEST_PATH: &'static str = "portal/request";
    const HEALTH_PATH: &'static str = "health";

    /// Creates a client for the given API base URL
    ///
    /// # Errors
    /// Returns [`PortalError::InvalidApiUrl`] if the URL is not an absolute
    /// http(s) URL, or an error if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("orbithub-portal/{}", version);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client, base_url })
    }

    /// Validates a base URL and normalizes it to end with `/`
    pub fn parse_base_url(raw: &str) -> std::result::Result<Url, PortalError> {
        let invalid = |reason: String| PortalError::InvalidApiUrl {
            url: raw.to_string(),
            reason,
        };

        let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid(
                "base URL must not carry a query or fragment".to_string(),
            ));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for '{}'", path))
    }

    /// URL of a catalog search, including the encoded query string
    pub fn search_url(&self, query: &CatalogQuery) -> Result<Url> {
        let mut url = self.endpoint(Self::SATELLITES_PATH)?;
        url.set_query(Some(&query.to_query_string()));
        Ok(url)
    }

    /// Asks the portal whether it is up
    ///
    /// # Returns
    /// The status string reported by the API (`"ok"` when healthy)
    pub async fn health(&self) -> Result<String> {
        let url = self.endpoint(Self::HEALTH_PATH)?;
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(PortalError::HealthCheckFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            }
            .into());
        }

        let health: HealthStatus = response
            .json()
            .await
            .context("Portal health endpoint did not return a status object")?;
        Ok(health.status)
    }
}

#[async_trait]
impl SatelliteCatalog for PortalApiClient {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<Satellite>> {
        let url = self.search_url(query)?;
        debug!(%url, "GET satellites");

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(PortalError::CatalogQueryFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            }
            .into());
        }

        let satellites: Vec<Satellite> = response
            .json()
            .await
            .context("Satellite catalog returned an unexpected response body")?;
        Ok(satellites)
    }
}

#[async_trait]
impl RequestGateway for PortalApiClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<GatewayResponse> {
        let url = self.endpoint(Self::REQUEST_PATH)?;
        debug!(%url, "POST portal request");

        let response = self.client.post(url).json(payload).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(GatewayResponse::Accepted);
        }

        let body = response.bytes().await?;
        let error = serde_json::from_slice::<Value>(&body).ok();
        if error.is_none() && !body.is_empty() {
            warn!(status = status.as_u16(), "error response body is not JSON");
        }
        Ok(GatewayResponse::Rejected {
            status: status.as_u16(),
            error,
        })
    }
}
