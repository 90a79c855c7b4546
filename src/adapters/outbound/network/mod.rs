/// Network adapters for the portal REST API
mod portal_api_client;

pub use portal_api_client::PortalApiClient;
