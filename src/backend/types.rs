use serde::{Deserialize, Serialize};

/// Envelope every backend endpoint responds with
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<ClaimData>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Payload of a successful claim: the token the mess staff scans
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimData {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Body of the claim-meal request
#[derive(Debug, Clone, Serialize)]
pub struct ClaimRequest {
    #[serde(rename = "mealType")]
    pub meal_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_envelope() {
        let raw = r#"{"status":"success","data":{"_id":"68c55739f2fa5db9ae55d874"}}"#;
        let resp: ApiResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.data.unwrap().id, "68c55739f2fa5db9ae55d874");
    }

    #[test]
    fn test_parse_failure_envelope() {
        let raw = r#"{"status":"fail","message":"Meal already claimed"}"#;
        let resp: ApiResponse = serde_json::from_str(raw).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.message_or("?"), "Meal already claimed");
    }

    #[test]
    fn test_claim_request_body() {
        let body = serde_json::to_string(&ClaimRequest {
            meal_type: "breakfast".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"mealType":"breakfast"}"#);
    }
}
