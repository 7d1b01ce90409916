//! Frontend Models
//!
//! Data structures matching the feedback service contract.

use serde::{Deserialize, Serialize};

/// One meeting/company entry with an assignable 1-5 score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingItem {
    pub id: u32,
    pub name: String,
    pub rating: Option<u8>,
}

/// Read response from the feedback endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DelegateResponse {
    pub name: String,
    pub delegate_meetings: Vec<String>,
}

/// Write payload for the feedback endpoint
///
/// The service expects `delegate_meetings` as a JSON-encoded string of the
/// item array, not as a nested array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackPayload {
    pub email: String,
    pub delegate_meetings: String,
}

impl FeedbackPayload {
    pub fn new(encoded_email: String, items: &[RatingItem]) -> Result<Self, String> {
        Ok(Self {
            email: encoded_email,
            delegate_meetings: serde_json::to_string(items).map_err(|e| e.to_string())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trips_items() {
        let items = vec![
            RatingItem { id: 1, name: "Acme".to_string(), rating: Some(5) },
            RatingItem { id: 2, name: "Globex".to_string(), rating: None },
        ];

        let payload = FeedbackPayload::new("YUBiLmM=".to_string(), &items).unwrap();
        assert_eq!(payload.email, "YUBiLmM=");

        let parsed: Vec<RatingItem> = serde_json::from_str(&payload.delegate_meetings).unwrap();
        assert_eq!(parsed, items);
    }

    #[test]
    fn test_unrated_item_serializes_null_rating() {
        let item = RatingItem { id: 1, name: "Acme".to_string(), rating: None };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Acme","rating":null}"#);
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let json = r#"{"name":"Alice","delegate_meetings":["Acme"],"batch":7}"#;
        let resp: DelegateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.name, "Alice");
        assert_eq!(resp.delegate_meetings, vec!["Acme".to_string()]);
    }

    #[test]
    fn test_response_requires_meetings_field() {
        let json = r#"{"name":"Alice"}"#;
        assert!(serde_json::from_str::<DelegateResponse>(json).is_err());
    }
}
