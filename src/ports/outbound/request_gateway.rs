use crate::application::dto::SubmissionPayload;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Answer of the portal to a submitted request
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResponse {
    /// Any success status; the body is not inspected
    Accepted,
    /// Non-success status; `error` is the parsed error body when it was JSON
    Rejected { status: u16, error: Option<Value> },
}

/// RequestGateway port for delivering data requests to the portal
///
/// A single call is a single attempt: implementations must not retry.
#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// Posts the request payload to the portal
    ///
    /// # Errors
    /// Returns an error only when no HTTP response was obtained
    /// (connection refused, DNS failure, interrupted transfer).
    async fn submit(&self, payload: &SubmissionPayload) -> Result<GatewayResponse>;
}
