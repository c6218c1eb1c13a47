//! Frontend Models
//!
//! Data structures for feed requests and backend responses.

use serde::Deserialize;

/// Slider default after a successful schedule submission
pub const DEFAULT_PORTION: u32 = 5;

/// Motor steps dispensed per portion unit (manual feeds only)
pub const STEPS_PER_PORTION: u32 = 500;

/// Visual severity band for a portion value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortionBand {
    Low,
    Normal,
    High,
}

impl PortionBand {
    pub fn from_portion(portion: u32) -> Self {
        if portion <= 3 {
            PortionBand::Low
        } else if portion <= 7 {
            PortionBand::Normal
        } else {
            PortionBand::High
        }
    }

    /// CSS class for the value badge next to a slider
    pub fn badge_class(self) -> &'static str {
        match self {
            PortionBand::Low => "portion-badge low",
            PortionBand::Normal => "portion-badge normal",
            PortionBand::High => "portion-badge high",
        }
    }
}

/// A one-shot feed request sent to the backend
#[derive(Debug, Clone, PartialEq)]
pub enum FeedRequest {
    /// Immediate actuation with a portion size
    Manual { portion: u32 },
    /// Creation of a persisted feeding rule (time + portion)
    Schedule { portion: u32, time: String },
}

impl FeedRequest {
    pub fn request_type(&self) -> &'static str {
        match self {
            FeedRequest::Manual { .. } => "manual_feed",
            FeedRequest::Schedule { .. } => "schedule_feed",
        }
    }

    /// Multipart form fields in submission order.
    ///
    /// Manual feeds carry the derived step count and fixed actuation
    /// parameters; the backend forwards them to the motor driver as-is.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            FeedRequest::Manual { portion } => vec![
                ("request_type", self.request_type().to_string()),
                ("portion", portion.to_string()),
                ("steps", (portion * STEPS_PER_PORTION).to_string()),
                ("direction", "clockwise".to_string()),
                ("microstepping", "8".to_string()),
                ("speed", "250".to_string()),
            ],
            FeedRequest::Schedule { portion, time } => vec![
                ("request_type", self.request_type().to_string()),
                ("portion", portion.to_string()),
                ("time", time.clone()),
            ],
        }
    }
}

/// Backend response body (matches the feeder server's JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(PortionBand::from_portion(1), PortionBand::Low);
        assert_eq!(PortionBand::from_portion(3), PortionBand::Low);
        assert_eq!(PortionBand::from_portion(4), PortionBand::Normal);
        assert_eq!(PortionBand::from_portion(7), PortionBand::Normal);
        assert_eq!(PortionBand::from_portion(8), PortionBand::High);
        assert_eq!(PortionBand::from_portion(10), PortionBand::High);
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(PortionBand::Low.badge_class(), "portion-badge low");
        assert_eq!(PortionBand::Normal.badge_class(), "portion-badge normal");
        assert_eq!(PortionBand::High.badge_class(), "portion-badge high");
    }

    #[test]
    fn test_manual_feed_fields() {
        let request = FeedRequest::Manual { portion: 5 };
        let fields = request.form_fields();

        assert_eq!(field(&fields, "request_type"), Some("manual_feed"));
        assert_eq!(field(&fields, "portion"), Some("5"));
        assert_eq!(field(&fields, "steps"), Some("2500"));
        assert_eq!(field(&fields, "direction"), Some("clockwise"));
        assert_eq!(field(&fields, "microstepping"), Some("8"));
        assert_eq!(field(&fields, "speed"), Some("250"));
    }

    #[test]
    fn test_schedule_feed_fields() {
        let request = FeedRequest::Schedule {
            portion: 3,
            time: "08:30".to_string(),
        };
        let fields = request.form_fields();

        assert_eq!(field(&fields, "request_type"), Some("schedule_feed"));
        assert_eq!(field(&fields, "portion"), Some("3"));
        assert_eq!(field(&fields, "time"), Some("08:30"));
        // Actuation parameters are manual-feed only
        assert_eq!(field(&fields, "steps"), None);
        assert_eq!(field(&fields, "direction"), None);
    }

    #[test]
    fn test_response_parsing() {
        let parsed: FeedResponse =
            serde_json::from_str(r#"{"status":"success","message":"Fed!"}"#).unwrap();
        assert_eq!(parsed.status, "success");
        assert_eq!(parsed.message.as_deref(), Some("Fed!"));

        // Message is optional, extra fields are ignored
        let parsed: FeedResponse =
            serde_json::from_str(r#"{"status":"error","device":"esp8266"}"#).unwrap();
        assert_eq!(parsed.status, "error");
        assert_eq!(parsed.message, None);
    }
}
