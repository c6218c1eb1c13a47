//! Submission State Machine
//!
//! Per-form state for the feed submission flow:
//! Idle -> Submitting -> (Success | Failure).

use crate::models::FeedResponse;

/// Seconds shown by the post-success countdown before the page reloads
pub const COUNTDOWN_SECS: u32 = 3;

/// Shown when the backend reports failure without a message
pub const GENERIC_FAILURE: &str = "The feeder returned an unexpected response.";

/// State of one form's in-flight submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success(String),
    Failure(String),
}

impl SubmitState {
    /// True while a request is in flight; the submit button is disabled
    /// for exactly this window.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Classify a parsed backend response.
    ///
    /// `default_message` is the flow-specific success text used when the
    /// backend omits one. Any status other than "success" is a failure.
    pub fn from_response(response: &FeedResponse, default_message: &str) -> Self {
        if response.status == "success" {
            let message = response
                .message
                .clone()
                .unwrap_or_else(|| default_message.to_string());
            SubmitState::Success(message)
        } else {
            let message = response
                .message
                .clone()
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            SubmitState::Failure(message)
        }
    }

    /// Classify a transport-level failure (network error, non-JSON body)
    pub fn from_transport_error(error: &str) -> Self {
        SubmitState::Failure(format!("Error: {error}"))
    }

    /// CSS class for the status alert box
    pub fn alert_class(&self) -> &'static str {
        match self {
            SubmitState::Idle => "",
            SubmitState::Submitting => "alert alert-info",
            SubmitState::Success(_) => "alert alert-success",
            SubmitState::Failure(_) => "alert alert-danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str, message: Option<&str>) -> FeedResponse {
        FeedResponse {
            status: status.to_string(),
            message: message.map(|m| m.to_string()),
        }
    }

    #[test]
    fn test_success_uses_server_message() {
        let state = SubmitState::from_response(&response("success", Some("Fed!")), "default");
        assert_eq!(state, SubmitState::Success("Fed!".to_string()));
    }

    #[test]
    fn test_success_falls_back_to_default_message() {
        let state = SubmitState::from_response(
            &response("success", None),
            "Feed command sent successfully!",
        );
        assert_eq!(
            state,
            SubmitState::Success("Feed command sent successfully!".to_string())
        );
    }

    #[test]
    fn test_error_status_is_failure_with_server_message() {
        let state = SubmitState::from_response(&response("error", Some("Motor jam")), "default");
        assert_eq!(state, SubmitState::Failure("Motor jam".to_string()));
    }

    #[test]
    fn test_unknown_status_is_failure_with_generic_message() {
        let state = SubmitState::from_response(&response("pending", None), "default");
        assert_eq!(state, SubmitState::Failure(GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn test_transport_error() {
        let state = SubmitState::from_transport_error("Failed to fetch");
        assert_eq!(state, SubmitState::Failure("Error: Failed to fetch".to_string()));
    }

    #[test]
    fn test_submitting_flag() {
        assert!(SubmitState::Submitting.is_submitting());
        assert!(!SubmitState::Idle.is_submitting());
        assert!(!SubmitState::Success("ok".to_string()).is_submitting());
        assert!(!SubmitState::Failure("no".to_string()).is_submitting());
    }

    #[test]
    fn test_alert_classes() {
        assert_eq!(SubmitState::Submitting.alert_class(), "alert alert-info");
        assert_eq!(
            SubmitState::Success("ok".to_string()).alert_class(),
            "alert alert-success"
        );
        assert_eq!(
            SubmitState::Failure("no".to_string()).alert_class(),
            "alert alert-danger"
        );
    }
}
