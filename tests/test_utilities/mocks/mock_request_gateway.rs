use async_trait::async_trait;
use orbithub_portal::prelude::*;
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum Behavior {
    Accept,
    Reject(u16, Option<Value>),
    Fail,
}

/// Mock RequestGateway for testing
///
/// Answers every submission the same way and keeps the serialized
/// payloads it was given.
#[derive(Clone)]
pub struct MockRequestGateway {
    behavior: Behavior,
    pub payloads: Arc<Mutex<Vec<Value>>>,
}

impl MockRequestGateway {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepting() -> Self {
        Self::with_behavior(Behavior::Accept)
    }

    pub fn rejecting(status: u16, error: Option<Value>) -> Self {
        Self::with_behavior(Behavior::Reject(status, error))
    }

    pub fn unreachable() -> Self {
        Self::with_behavior(Behavior::Fail)
    }

    pub fn get_payloads(&self) -> Vec<Value> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestGateway for MockRequestGateway {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<GatewayResponse> {
        self.payloads
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload)?);
        match &self.behavior {
            Behavior::Accept => Ok(GatewayResponse::Accepted),
            Behavior::Reject(status, error) => Ok(GatewayResponse::Rejected {
                status: *status,
                error: error.clone(),
            }),
            Behavior::Fail => anyhow::bail!("connection refused"),
        }
    }
}
