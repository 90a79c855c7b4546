use serde_json::Value;

/// Result of a submit attempt as seen by the user
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The portal accepted the request; the form has been reset
    Accepted,
    /// The portal answered with a non-success status; the form is unchanged
    Rejected { status: u16, error: Option<Value> },
    /// No response was obtained; the form is unchanged
    ConnectionFailed { reason: String },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_accepted() {
        assert!(SubmissionOutcome::Accepted.is_accepted());
        assert!(!SubmissionOutcome::Rejected {
            status: 422,
            error: None
        }
        .is_accepted());
        assert!(!SubmissionOutcome::ConnectionFailed {
            reason: "refused".to_string()
        }
        .is_accepted());
    }
}
