use orbithub_portal::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock Notifier for testing that captures alerts and busy indicators
#[derive(Default, Clone)]
pub struct MockNotifier {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Only the alerts, without busy indicator messages
    pub fn alerts(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter(|m| m.starts_with("Alert: ") || m.starts_with("Error: "))
            .collect()
    }
}

impl Notifier for MockNotifier {
    fn begin(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Busy: {}", message));
    }

    fn end(&self) {
        self.messages.lock().unwrap().push("Idle".to_string());
    }

    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Alert: {}", message));
    }

    fn alert_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }
}
